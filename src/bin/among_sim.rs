//! 网格社交推理仿真
//!
//! 读取场景文件，逐迭代打印网格并写出结果文件。

use amongsim_rs::run::{RunOpts, run_scenario};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "among-sim", about = "宇航员与内鬼网格仿真：(2N+1)x(2N+1) 网格")]
struct Args {
    /// 场景文件（六行文本格式，或 .json）
    scenario: PathBuf,

    /// 不向 stdout 打印 ASCII 网格
    #[arg(long)]
    no_grid: bool,

    /// 不写 `<scenario>_out_<iteration>` 结果文件
    #[arg(long)]
    no_reports: bool,

    /// 结果文件写到该目录，而不是场景文件旁边
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() {
    // 日志写到 stderr，stdout 只留给网格
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let opts = RunOpts {
        render_grid: !args.no_grid,
        write_reports: !args.no_reports,
        out_dir: args.out_dir,
    };

    match run_scenario(&args.scenario, &opts) {
        Ok(summary) => {
            info!(
                outcome = ?summary.outcome,
                status = %summary.status,
                iterations = summary.iterations,
                kills = summary.kills,
                witnessed = summary.witnessed,
                "仿真结束"
            );
        }
        Err(err) => {
            error!(%err, "仿真失败");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
