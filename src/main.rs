use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;

use image_folder::data::prepare_dataset;

/// 加载 <ROOT>/training_data 与 <ROOT>/testing_data 下的图像分类数据集并打印摘要
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// 数据集根目录
    root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let dataset = prepare_dataset(&args.root)
        .with_context(|| format!("准备数据集失败: {}", args.root.display()))?;

    println!("{dataset}");
    Ok(())
}
