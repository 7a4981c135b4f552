use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "texture-fix")]
#[command(about = "ブロックカタログのテクスチャURL自動解決ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// レコードごとの更新内容を出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 未解決URLをテクスチャ名マッチングで補完
    Fix {
        /// ブロックカタログJSONファイル
        #[arg(required = true)]
        blocks: PathBuf,

        /// テクスチャ一覧ファイル（改行区切り、デフォルト: files.txt）
        #[arg(short, long, conflicts_with = "textures_dir")]
        textures: Option<PathBuf>,

        /// 一覧ファイルの代わりにテクスチャフォルダを直接スキャン
        #[arg(long)]
        textures_dir: Option<PathBuf>,

        /// 出力ファイル（省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// URLのディレクトリプレフィックス
        #[arg(long, default_value = "blocks")]
        url_prefix: String,

        /// ドライラン（変更を適用せずプレビュー）
        #[arg(long)]
        dry_run: bool,
    },

    /// 未解決レコードの一覧を表示
    Check {
        /// ブロックカタログJSONファイル
        #[arg(required = true)]
        blocks: PathBuf,

        /// URLのディレクトリプレフィックス
        #[arg(long, default_value = "blocks")]
        url_prefix: String,
    },
}
