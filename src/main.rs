use clap::Parser;
use texture_fix_rust::{catalog, cli, error, matcher, textures};
use cli::{Cli, Commands};
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fix { blocks, textures: list, textures_dir, output, url_prefix, dry_run } => {
            println!("🧱 texture-fix - テクスチャURL補完\n");

            // 1. テクスチャ一覧の読み込み
            println!("[1/3] テクスチャ一覧を読み込み中...");
            let candidates = if let Some(dir) = textures_dir {
                textures::scan_dir(&dir)?
            } else {
                let list = list.unwrap_or_else(|| std::path::PathBuf::from("files.txt"));
                textures::load_list(&list)?
            };
            println!("✔ {}件のテクスチャを検出\n", candidates.len());

            // 2. カタログ読み込みとマッチング
            println!("[2/3] カタログをマッチング中...");
            let mut records = catalog::load(&blocks)?;
            println!("✔ {}件のレコードを読み込み\n", records.len());

            let matcher = matcher::TextureMatcher::default();
            let stats =
                catalog::update(&mut records, &matcher, &candidates, &url_prefix, cli.verbose);

            // 3. 書き戻し（全レコード処理後のみ）
            if dry_run {
                println!("[3/3] ドライラン: 書き込みをスキップ");
            } else {
                println!("[3/3] カタログを保存中...");
                let out = output.unwrap_or(blocks);
                catalog::save(&out, &records)?;
                println!("✔ 保存完了: {}", out.display());
            }

            print_summary(&stats);
            println!("\n✅ 完了");
        }

        Commands::Check { blocks, url_prefix } => {
            println!("🔍 texture-fix - 未解決レコード確認\n");

            let records = catalog::load(&blocks)?;
            let missing = catalog::missing_names(&records, &url_prefix);

            println!("レコード数: {}", records.len());
            println!("未解決: {}件", missing.len());
            for name in missing {
                println!("  - {}", name);
            }
        }
    }

    Ok(())
}

fn print_summary(stats: &catalog::UpdateStats) {
    println!("\n{}", "-".repeat(50));
    println!("処理したレコード数: {}", stats.total_processed);
    println!("未解決レコード数: {}", stats.missing_found);
    println!("更新したレコード数: {}", stats.updated);
    println!("未解決のまま: {}", stats.still_missing);
    if let Some(rate) = stats.success_rate() {
        println!("成功率: {:.1}%", rate);
    }
}
