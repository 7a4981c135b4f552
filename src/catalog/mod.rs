//! ブロックカタログ（blocks.json）の読み書きと更新
//!
//! センチネルURLのレコードだけをマッチング対象とし、配列の並び順と
//! `name`/`url`以外のフィールドを保ったまま書き戻す。

use crate::error::{Result, TextureFixError};
use crate::matcher::{TextureMatcher, MISSING_TEXTURE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// カタログの1レコード
///
/// `name`と`url`以外のフィールドは`extra`に退避してそのまま書き戻す。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRecord {
    pub name: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// 更新処理の統計情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateStats {
    /// 処理したレコード数
    pub total_processed: usize,
    /// センチネルURLだったレコード数
    pub missing_found: usize,
    /// テクスチャを割り当てられたレコード数
    pub updated: usize,
    /// マッチせず未解決のまま残ったレコード数
    pub still_missing: usize,
}

impl UpdateStats {
    /// 成功率（%）。対象レコードがなければ`None`
    pub fn success_rate(&self) -> Option<f64> {
        if self.missing_found == 0 {
            None
        } else {
            Some(self.updated as f64 / self.missing_found as f64 * 100.0)
        }
    }
}

/// 未解決を示すセンチネルURL
pub fn missing_url(url_prefix: &str) -> String {
    format!("{}/{}", url_prefix, MISSING_TEXTURE)
}

/// カタログJSONを読み込む
pub fn load(path: &Path) -> Result<Vec<BlockRecord>> {
    if !path.exists() {
        return Err(TextureFixError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<BlockRecord> = serde_json::from_str(&content)?;
    Ok(records)
}

/// カタログJSONを書き戻す
///
/// 全レコードの処理が終わってから呼ぶこと。途中書き込みはしない。
pub fn save(path: &Path, records: &[BlockRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// センチネルURLのレコードにマッチしたテクスチャURLを書き込む
pub fn update(
    records: &mut [BlockRecord],
    matcher: &TextureMatcher,
    candidates: &HashSet<String>,
    url_prefix: &str,
    verbose: bool,
) -> UpdateStats {
    let sentinel = missing_url(url_prefix);
    let mut stats = UpdateStats::default();

    for record in records.iter_mut() {
        stats.total_processed += 1;

        if record.url != sentinel {
            continue;
        }
        stats.missing_found += 1;

        let texture = matcher.find_match(&record.name, candidates);
        if texture != MISSING_TEXTURE {
            let new_url = format!("{}/{}", url_prefix, texture);
            if verbose {
                println!("更新 '{}': {} -> {}", record.name, record.url, new_url);
            }
            record.url = new_url;
            stats.updated += 1;
        } else {
            stats.still_missing += 1;
            if verbose {
                println!("マッチなし '{}'", record.name);
            }
        }
    }

    stats
}

/// センチネルURLのまま残っているレコード名を返す
pub fn missing_names<'a>(records: &'a [BlockRecord], url_prefix: &str) -> Vec<&'a str> {
    let sentinel = missing_url(url_prefix);
    records
        .iter()
        .filter(|r| r.url == sentinel)
        .map(|r| r.name.as_str())
        .collect()
}
