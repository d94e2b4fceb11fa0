//! 运行入口
//!
//! 把场景加载、仿真主循环与两种输出串起来，供 CLI 和集成测试使用。

use crate::error::SimResult;
use crate::game::{RunSummary, Simulation};
use crate::output::{GridPrinter, ReportWriter};
use crate::scenario::Scenario;
use std::io;
use std::path::{Path, PathBuf};

/// 运行选项
#[derive(Debug, Clone)]
pub struct RunOpts {
    /// 每个快照在标准输出打印 ASCII 网格
    pub render_grid: bool,
    /// 每个快照写一个结果文件
    pub write_reports: bool,
    /// 结果文件目录；`None` 时与场景文件放在一起
    pub out_dir: Option<PathBuf>,
}

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            render_grid: true,
            write_reports: true,
            out_dir: None,
        }
    }
}

/// 加载场景并运行到结束。任何错误都会立即返回，不做重试。
pub fn run_scenario(path: &Path, opts: &RunOpts) -> SimResult<RunSummary> {
    let world = Scenario::load(path)?.into_world()?;
    let mut sim = Simulation::new(world);

    let grid = opts.render_grid.then(|| GridPrinter::new(io::stdout()));
    let reports = opts
        .write_reports
        .then(|| ReportWriter::new(path, opts.out_dir.clone()));
    let mut sink = (grid, reports);

    sim.run(&mut sink)
}
