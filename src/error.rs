//! 错误类型
//!
//! 场景加载与结果输出过程中可能出现的全部错误。所有错误都是致命的：
//! 调用方（CLI）打印诊断信息后直接退出。

use std::io;
use std::path::PathBuf;

/// 仿真过程中的错误。
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// 场景文件不存在或无法打开。
    #[error("failed to open scenario file {}: {source}", .path.display())]
    ScenarioFileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 场景内容不合法（字段缺失、非数字、坐标越界、坐标数量不符等）。
    ///
    /// `line` 为 1 起始的行号；针对整个场景的校验没有行号。
    #[error("malformed scenario{}: {reason}", line_suffix(.line))]
    ScenarioFormat { line: Option<usize>, reason: String },

    /// JSON 场景无法反序列化。
    #[error("malformed scenario json {}: {source}", .path.display())]
    ScenarioJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 结果文件无法创建或写入（包括文件名无法构造）。
    #[error("failed to write output {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    pub(crate) fn format_at(line: usize, reason: impl Into<String>) -> SimError {
        SimError::ScenarioFormat {
            line: Some(line),
            reason: reason.into(),
        }
    }

    pub(crate) fn format(reason: impl Into<String>) -> SimError {
        SimError::ScenarioFormat {
            line: None,
            reason: reason.into(),
        }
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(l) => format!(" at line {l}"),
        None => String::new(),
    }
}
