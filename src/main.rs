// ==========================================
// SMT贴片排产系统 - 命令行主入口
// ==========================================
// 流程: 加载飞达库/机器配置/料单 -> 排产 -> 导出
// 退出码: 0 成功; 1 导入/导出失败;
// 2 更换额度耗尽; 3 更换站找不到吸嘴;
// 4 吸嘴不可用; 5 更换站无空槽位
// ==========================================

use clap::Parser;
use smt_pnp_aps::engine::JobOrchestrator;
use smt_pnp_aps::exporter::{export_job, ExportError};
use smt_pnp_aps::importer::{load_config, load_feeders, load_parts, ImportError};
use smt_pnp_aps::{logging, ScheduleError, APP_NAME, VERSION};
use std::path::PathBuf;
use std::process;
use thiserror::Error;

#[derive(Parser)]
#[command(
    name = "smt-pnp-aps",
    about = "SMT贴片排产系统 — KiCad 料单转 NeoDen YY1 贴装程序",
    version
)]
struct Cli {
    /// 料单 CSV 文件 (KiCad 贴装坐标导出)
    #[arg(short, long)]
    input: PathBuf,

    /// 飞达库 JSON 文件
    #[arg(short, long)]
    feeders: PathBuf,

    /// 机器配置 JSON 文件
    #[arg(short, long)]
    config: PathBuf,

    /// 输出的 YY1 贴装程序文件
    #[arg(short, long)]
    output: PathBuf,
}

/// 应用级错误: 聚合各层错误并映射退出码
#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::Import(_) | AppError::Export(_) => 1,
            AppError::Schedule(err) => err.exit_code(),
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let feeders = load_feeders(&cli.feeders)?;
    let mut machine = load_config(&cli.config)?;
    let parts = load_parts(&cli.input, &machine)?;

    let orchestrator = JobOrchestrator::new();
    let result = orchestrator.run(parts, &feeders, &mut machine)?;

    export_job(&cli.output, &result.job, &result.nozzle_changes, &machine)?;
    Ok(())
}

fn main() {
    logging::init();

    tracing::info!("{} v{}", APP_NAME, VERSION);

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        tracing::error!("{}", err);
        process::exit(err.exit_code());
    }
}
