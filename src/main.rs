use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use mcq_generator::orchestrator::render_table;
use mcq_generator::utils::logging;
use mcq_generator::{App, Config, McqError, QuizInput};

/// 从 .txt 或 .pdf 文件生成多选题
#[derive(Debug, Parser)]
#[command(name = "mcq-generator", version, about)]
struct Args {
    /// 源文件（.txt 或 .pdf）
    file: PathBuf,

    /// 题目数量（3-10）
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,

    /// 科目，例如 Mathematics
    #[arg(short, long, default_value = "General")]
    subject: String,

    /// 难度，例如 simple, mid, hard, very hard
    #[arg(short, long, default_value = "simple")]
    difficulty: String,

    /// CSV 输出路径（覆盖配置）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML 配置文件
    #[arg(long, env = "MCQ_CONFIG")]
    config: Option<PathBuf>,

    /// 题目数量与请求不一致时判定失败
    #[arg(long)]
    strict_count: bool,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // 加载配置
    let mut config = Config::load(args.config.as_deref()).context("加载配置失败")?;
    if let Some(output) = args.output.clone() {
        config.output_csv_path = output;
    }
    config.strict_count |= args.strict_count;
    config.verbose_logging |= args.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    let input = QuizInput {
        source_path: args.file,
        question_count: args.count,
        subject: args.subject,
        difficulty: args.difficulty,
    };

    // 初始化并运行应用
    let app = App::initialize(config).await?;
    let outcome = match app.run(&input).await {
        Ok(outcome) => outcome,
        Err(McqError::TableUnavailable) => {
            error!("❌ 无法根据模型输出生成题目表格，请重试");
            anyhow::bail!(McqError::TableUnavailable);
        }
        Err(e) => {
            error!("❌ 生成题目时发生错误: {}", e);
            return Err(e.into());
        }
    };

    println!("\n生成的题目\n");
    print!("{}", render_table(&outcome.records));
    println!("\n评审意见\n\n{}", outcome.review);

    Ok(())
}
