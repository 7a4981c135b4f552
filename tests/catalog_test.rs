//! カタログ更新のエンドツーエンドテスト
//!
//! 一覧ファイルとカタログJSONの読み込みから書き戻しまでを検証

use std::path::Path;
use tempfile::tempdir;
use texture_fix_rust::matcher::TextureMatcher;
use texture_fix_rust::{catalog, textures};

const FILES_TXT: &str = "stone.png\nstone_andesite.png\noak_log_top.png\nreadme.txt\n\n";

const BLOCKS_JSON: &str = r#"[
  {
    "name": "stone",
    "url": "blocks/missing_texture.png",
    "id": 1
  },
  {
    "name": "unobtainium",
    "url": "blocks/missing_texture.png"
  },
  {
    "name": "dirt",
    "url": "blocks/dirt.png"
  }
]"#;

/// 3レコードのカタログでカウンタと成功率を検証
#[test]
fn test_full_update_run() {
    let dir = tempdir().expect("Failed to create temp dir");
    let files_path = dir.path().join("files.txt");
    let blocks_path = dir.path().join("blocks.json");
    std::fs::write(&files_path, FILES_TXT).unwrap();
    std::fs::write(&blocks_path, BLOCKS_JSON).unwrap();

    let candidates = textures::load_list(&files_path).unwrap();
    assert_eq!(candidates.len(), 3);

    let mut records = catalog::load(&blocks_path).unwrap();
    let matcher = TextureMatcher::default();
    let stats = catalog::update(&mut records, &matcher, &candidates, "blocks", false);

    assert_eq!(stats.total_processed, 3);
    assert_eq!(stats.missing_found, 2);
    assert_eq!(stats.updated, 1);
    assert_eq!(stats.still_missing, 1);
    assert_eq!(stats.success_rate(), Some(50.0));

    assert_eq!(records[0].url, "blocks/stone.png");
    assert_eq!(records[1].url, "blocks/missing_texture.png");
    assert_eq!(records[2].url, "blocks/dirt.png");

    catalog::save(&blocks_path, &records).unwrap();
}

/// 書き戻し後に再読み込みしても並び順と追加フィールドが保たれる
#[test]
fn test_save_preserves_order_and_extra_fields() {
    let dir = tempdir().expect("Failed to create temp dir");
    let blocks_path = dir.path().join("blocks.json");
    std::fs::write(&blocks_path, BLOCKS_JSON).unwrap();

    let records = catalog::load(&blocks_path).unwrap();
    catalog::save(&blocks_path, &records).unwrap();

    let reloaded = catalog::load(&blocks_path).unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded[0].name, "stone");
    assert_eq!(reloaded[1].name, "unobtainium");
    assert_eq!(reloaded[2].name, "dirt");
    // name/url以外のフィールドも残る
    assert_eq!(
        reloaded[0].extra.get("id"),
        Some(&serde_json::Value::from(1))
    );
}

/// 2回目の実行では解決済みレコードに変更が起きない（冪等性）
#[test]
fn test_second_run_is_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let files_path = dir.path().join("files.txt");
    let blocks_path = dir.path().join("blocks.json");
    std::fs::write(&files_path, FILES_TXT).unwrap();
    std::fs::write(&blocks_path, BLOCKS_JSON).unwrap();

    let candidates = textures::load_list(&files_path).unwrap();
    let matcher = TextureMatcher::default();

    let mut records = catalog::load(&blocks_path).unwrap();
    catalog::update(&mut records, &matcher, &candidates, "blocks", false);
    let after_first = records.clone();

    let stats = catalog::update(&mut records, &matcher, &candidates, "blocks", false);

    // 未解決のまま残った1件だけが対象になり、更新は発生しない
    assert_eq!(stats.missing_found, 1);
    assert_eq!(stats.updated, 0);
    assert_eq!(stats.still_missing, 1);
    for (a, b) in after_first.iter().zip(records.iter()) {
        assert_eq!(a.url, b.url);
    }
}

/// カタログが存在しない場合はFileNotFound
#[test]
fn test_load_missing_catalog() {
    let result = catalog::load(Path::new("/nonexistent/blocks.json"));
    assert!(matches!(
        result,
        Err(texture_fix_rust::error::TextureFixError::FileNotFound(_))
    ));
}

/// 壊れたJSONはJsonParseエラーになり、書き込みは発生しない
#[test]
fn test_load_malformed_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let blocks_path = dir.path().join("blocks.json");
    std::fs::write(&blocks_path, "{ not json").unwrap();

    let result = catalog::load(&blocks_path);
    assert!(matches!(
        result,
        Err(texture_fix_rust::error::TextureFixError::JsonParse(_))
    ));

    // 入力ファイルはそのまま
    assert_eq!(std::fs::read_to_string(&blocks_path).unwrap(), "{ not json");
}
