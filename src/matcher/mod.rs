//! テクスチャ名マッチング
//!
//! ブロック名と利用可能なテクスチャファイル名を、優先度付きの
//! ヒューリスティック戦略で突き合わせる。上位の戦略でヒットした時点で確定し、
//! より緩い戦略に上書きされることはない。
//!
//! ## マッチング戦略（優先順）
//! 1. 完全一致
//! 2. プレフィックス付きバリエーション（stone_ / planks_ など）
//! 3. polished系の特殊ケース（_smooth変換）
//! 4. 部分フレーズ一致（`_`区切りの連続部分列）
//! 5. ファジー包含一致（正規化後の部分文字列）

use std::collections::HashSet;

/// マッチしなかった場合に返すファイル名
pub const MISSING_TEXTURE: &str = "missing_texture.png";

/// テクスチャ名マッチャー
///
/// プレフィックス一覧と拡張子を設定として保持する。通常は`Default`で生成。
#[derive(Debug, Clone)]
pub struct TextureMatcher {
    /// 戦略2で試すプレフィックス（並び順がそのまま優先度）
    pub prefixes: Vec<String>,
    /// 戦略4で部分フレーズに付けるプレフィックス
    pub part_prefixes: Vec<String>,
    /// テクスチャファイルの拡張子（ドットなし）
    pub extension: String,
}

impl Default for TextureMatcher {
    fn default() -> Self {
        Self {
            prefixes: [
                "stone",
                "planks",
                "log",
                "leaves",
                "wool_colored",
                "glass",
                "concrete",
                "hardened_clay_stained",
                "glazed_terracotta",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            part_prefixes: ["stone", "planks"].iter().map(|s| s.to_string()).collect(),
            extension: "png".to_string(),
        }
    }
}

impl TextureMatcher {
    /// ブロック名に最も合うテクスチャファイル名を返す
    ///
    /// 必ず値を返す。どの戦略でもマッチしなかった場合は
    /// [`MISSING_TEXTURE`]を返す。候補セットに存在しないファイル名を
    /// 作り出すことはない（センチネルを除く）。
    pub fn find_match(&self, block_name: &str, candidates: &HashSet<String>) -> String {
        let name = block_name.to_lowercase();

        // 1. 完全一致
        let exact = format!("{}.{}", name, self.extension);
        if candidates.contains(&exact) {
            return exact;
        }

        // 2. プレフィックス付きバリエーション
        if let Some(hit) = self.match_prefixed(&name, candidates) {
            return hit;
        }

        // 3. polished系の特殊ケース
        if let Some(hit) = self.match_polished(&name, candidates) {
            return hit;
        }

        // 4. 部分フレーズ一致
        if let Some(hit) = self.match_subphrase(&name, candidates) {
            return hit;
        }

        // 5. ファジー包含一致
        if let Some(hit) = self.match_fuzzy(&name, candidates) {
            return hit;
        }

        MISSING_TEXTURE.to_string()
    }

    fn match_prefixed(&self, name: &str, candidates: &HashSet<String>) -> Option<String> {
        self.prefixes
            .iter()
            .map(|prefix| format!("{}_{}.{}", prefix, name, self.extension))
            .find(|variation| candidates.contains(variation))
    }

    /// polished系は`_smooth`サフィックスで収録されていることが多い
    fn match_polished(&self, name: &str, candidates: &HashSet<String>) -> Option<String> {
        if !name.contains("polished") {
            return None;
        }

        let base = name.replace("polished_", "");
        let variations = [
            format!("stone_{}_smooth.{}", base, self.extension),
            format!("{}_smooth.{}", base, self.extension),
            format!("polished_{}.{}", base, self.extension),
        ];
        variations.into_iter().find(|v| candidates.contains(v))
    }

    /// `_`区切りの連続部分列を短い開始位置から順に試す
    ///
    /// 候補ファイル名との完全一致のみ。部分文字列では判定しない。
    fn match_subphrase(&self, name: &str, candidates: &HashSet<String>) -> Option<String> {
        let parts: Vec<&str> = name.split('_').collect();
        if parts.len() < 2 {
            return None;
        }

        for i in 0..parts.len() {
            for j in (i + 1)..=parts.len() {
                let combo = parts[i..j].join("_");

                let bare = format!("{}.{}", combo, self.extension);
                if candidates.contains(&bare) {
                    return Some(bare);
                }
                for prefix in &self.part_prefixes {
                    let prefixed = format!("{}_{}.{}", prefix, combo, self.extension);
                    if candidates.contains(&prefixed) {
                        return Some(prefixed);
                    }
                }
            }
        }

        None
    }

    /// 正規化した名前の部分文字列包含で候補を探す
    ///
    /// 複数マッチした場合は最短のファイル名を優先する
    /// （短いほど特定的なことが多い）。同長は辞書順で決定的に選ぶ。
    fn match_fuzzy(&self, name: &str, candidates: &HashSet<String>) -> Option<String> {
        let parts: Vec<String> = if name.contains('_') {
            name.split('_').map(normalize_name).collect()
        } else {
            vec![normalize_name(name)]
        };

        let suffix = format!(".{}", self.extension);
        let mut best: Option<&String> = None;

        for texture in candidates {
            let base = texture.strip_suffix(&suffix).unwrap_or(texture);
            let normalized = normalize_name(base);

            // 3文字以下の断片は誤マッチしやすいので対象外
            let qualifies = parts
                .iter()
                .any(|part| part.len() > 2 && normalized.contains(part.as_str()));
            if !qualifies {
                continue;
            }

            let replace = match best {
                None => true,
                Some(b) => (texture.len(), texture.as_str()) < (b.len(), b.as_str()),
            };
            if replace {
                best = Some(texture);
            }
        }

        best.cloned()
    }
}

/// マッチング用にブロック名を正規化する
///
/// 小文字化し、`_`・`-`・空白を除去する。ファジー戦略専用。
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .collect()
}
