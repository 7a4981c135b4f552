//! 利用可能テクスチャ一覧の読み込み
//!
//! 改行区切りの一覧ファイル（files.txt）またはテクスチャフォルダの
//! 直接スキャンから候補セットを作る。

use crate::error::{Result, TextureFixError};
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

const TEXTURE_EXTENSION: &str = "png";

/// 改行区切りの一覧ファイルからテクスチャ名を読み込む
///
/// `.png`で終わらない行と空行は無視する。
pub fn load_list(path: &Path) -> Result<HashSet<String>> {
    if !path.exists() {
        return Err(TextureFixError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let textures = content
        .lines()
        .map(str::trim)
        .filter(|line| line.ends_with(".png"))
        .map(str::to_string)
        .collect();

    Ok(textures)
}

/// テクスチャフォルダをスキャンしてファイル名の一覧を作る
///
/// 一覧ファイルを経由せず、テクスチャパックのフォルダを直接使うためのもの。
pub fn scan_dir(folder: &Path) -> Result<HashSet<String>> {
    if !folder.exists() {
        return Err(TextureFixError::FolderNotFound(folder.display().to_string()));
    }

    let mut textures = HashSet::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            if ext.to_string_lossy() == TEXTURE_EXTENSION {
                if let Some(name) = path.file_name() {
                    textures.insert(name.to_string_lossy().to_string());
                }
            }
        }
    }

    Ok(textures)
}
