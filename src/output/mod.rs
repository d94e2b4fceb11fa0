//! 输出模块
//!
//! 每个快照的两种外部表示：标准输出上的 ASCII 网格，以及逐迭代的结果文本文件。

mod recorder;
mod render;
mod report;

pub use recorder::SnapshotRecorder;
pub use render::{GridPrinter, render_grid};
pub use report::{
    EntityState, IterationReport, ParseReportError, ReportWriter, report_path, write_report,
};
