//! 逐迭代结果文件
//!
//! 文件名为输入路径追加 `_out_<iteration>`，内容共七行：
//!
//! ```text
//! dead impostor count
//! alive impostor count
//! dead astronaut count
//! alive astronaut count
//! Defeat | Victory | Continue
//! x, y, Alive & x, y, Dead & ...   (宇航员)
//! x, y, Alive & ...                (内鬼)
//! ```

use crate::error::{SimError, SimResult};
use crate::game::{GameStatus, Pos, Snapshot, SnapshotSink, World};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// 单个实体在报告中的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityState {
    pub pos: Pos,
    pub alive: bool,
}

impl fmt::Display for EntityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let liveness = if self.alive { "Alive" } else { "Dead" };
        write!(f, "{}, {}, {liveness}", self.pos.x, self.pos.y)
    }
}

/// 一个迭代的结果报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationReport {
    pub dead_impostors: usize,
    pub alive_impostors: usize,
    pub dead_astronauts: usize,
    pub alive_astronauts: usize,
    pub status: GameStatus,
    pub astronauts: Vec<EntityState>,
    pub impostors: Vec<EntityState>,
}

impl IterationReport {
    pub fn from_world(world: &World, status: GameStatus) -> IterationReport {
        IterationReport {
            dead_impostors: world.dead_imp_count(),
            alive_impostors: world.alive_imp_count(),
            dead_astronauts: world.dead_astro_count(),
            alive_astronauts: world.alive_astro_count(),
            status,
            astronauts: world
                .astronauts()
                .iter()
                .map(|a| EntityState {
                    pos: a.pos,
                    alive: a.alive,
                })
                .collect(),
            impostors: world
                .impostors()
                .iter()
                .map(|imp| EntityState {
                    pos: imp.pos,
                    alive: imp.alive,
                })
                .collect(),
        }
    }
}

fn write_entities(f: &mut fmt::Formatter<'_>, entities: &[EntityState]) -> fmt::Result {
    for (i, e) in entities.iter().enumerate() {
        if i > 0 {
            f.write_str(" & ")?;
        }
        write!(f, "{e}")?;
    }
    f.write_str("\n")
}

impl fmt::Display for IterationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dead_impostors)?;
        writeln!(f, "{}", self.alive_impostors)?;
        writeln!(f, "{}", self.dead_astronauts)?;
        writeln!(f, "{}", self.alive_astronauts)?;
        writeln!(f, "{}", self.status)?;
        write_entities(f, &self.astronauts)?;
        write_entities(f, &self.impostors)
    }
}

/// 结果文件解析错误（行号从 1 开始）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed report at line {line}: {reason}")]
pub struct ParseReportError {
    pub line: usize,
    pub reason: String,
}

fn report_err(line: usize, reason: impl Into<String>) -> ParseReportError {
    ParseReportError {
        line,
        reason: reason.into(),
    }
}

fn parse_count(line: usize, raw: &str) -> Result<usize, ParseReportError> {
    raw.trim()
        .parse()
        .map_err(|_| report_err(line, format!("expected a count, got {raw:?}")))
}

fn parse_entity(line: usize, raw: &str) -> Result<EntityState, ParseReportError> {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    let &[x, y, liveness] = fields.as_slice() else {
        return Err(report_err(line, format!("expected \"x, y, Alive|Dead\", got {raw:?}")));
    };
    let coord = |v: &str| {
        v.parse::<u32>()
            .map_err(|_| report_err(line, format!("bad coordinate {v:?}")))
    };
    let alive = match liveness {
        "Alive" => true,
        "Dead" => false,
        other => return Err(report_err(line, format!("bad liveness {other:?}"))),
    };
    Ok(EntityState {
        pos: Pos::new(coord(x)?, coord(y)?),
        alive,
    })
}

/// 解析实体行，并核对与计数行是否一致。
fn parse_entities(
    line: usize,
    raw: &str,
    dead: usize,
    alive: usize,
) -> Result<Vec<EntityState>, ParseReportError> {
    let entities = if raw.trim().is_empty() {
        Vec::new()
    } else {
        raw.split('&')
            .map(|e| parse_entity(line, e))
            .collect::<Result<Vec<_>, _>>()?
    };
    let dead_listed = entities.iter().filter(|e| !e.alive).count();
    if entities.len() != dead + alive || dead_listed != dead {
        return Err(report_err(
            line,
            format!(
                "{} entities ({dead_listed} dead) do not match counts dead={dead} alive={alive}",
                entities.len()
            ),
        ));
    }
    Ok(entities)
}

impl FromStr for IterationReport {
    type Err = ParseReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() < 7 {
            return Err(report_err(
                lines.len() + 1,
                format!("expected 7 lines, found {}", lines.len()),
            ));
        }

        let dead_impostors = parse_count(1, lines[0])?;
        let alive_impostors = parse_count(2, lines[1])?;
        let dead_astronauts = parse_count(3, lines[2])?;
        let alive_astronauts = parse_count(4, lines[3])?;
        let status = lines[4]
            .trim()
            .parse::<GameStatus>()
            .map_err(|e| report_err(5, e.to_string()))?;
        let astronauts = parse_entities(6, lines[5], dead_astronauts, alive_astronauts)?;
        let impostors = parse_entities(7, lines[6], dead_impostors, alive_impostors)?;

        Ok(IterationReport {
            dead_impostors,
            alive_impostors,
            dead_astronauts,
            alive_astronauts,
            status,
            astronauts,
            impostors,
        })
    }
}

/// 结果文件路径：`<input>_out_<iteration>`；指定 `out_dir` 时放到该目录下，文件名同样追加后缀。
pub fn report_path(input: &Path, out_dir: Option<&Path>, iteration: u32) -> SimResult<PathBuf> {
    let mut name = match out_dir {
        None => input.as_os_str().to_owned(),
        Some(dir) => {
            let file = input.file_name().ok_or_else(|| SimError::OutputWriteFailure {
                path: input.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "scenario path has no file name",
                ),
            })?;
            dir.join(file).into_os_string()
        }
    };
    name.push(format!("_out_{iteration}"));
    Ok(PathBuf::from(name))
}

/// 写出一个结果文件。文件句柄在函数返回时释放，写入失败也不例外。
pub fn write_report(path: &Path, report: &IterationReport) -> SimResult<()> {
    let to_err = |source: io::Error| SimError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(to_err)?);
    write!(w, "{report}").and_then(|_| w.flush()).map_err(to_err)
}

/// 为每个快照写一个结果文件
#[derive(Debug)]
pub struct ReportWriter {
    input: PathBuf,
    out_dir: Option<PathBuf>,
    written: Vec<PathBuf>,
}

impl ReportWriter {
    pub fn new(input: impl Into<PathBuf>, out_dir: Option<PathBuf>) -> Self {
        Self {
            input: input.into(),
            out_dir,
            written: Vec::new(),
        }
    }

    /// 已写出的文件，按迭代顺序
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl SnapshotSink for ReportWriter {
    fn on_snapshot(&mut self, snap: &Snapshot<'_>) -> SimResult<()> {
        let path = report_path(&self.input, self.out_dir.as_deref(), snap.iteration)?;
        let report = IterationReport::from_world(snap.world, snap.status);
        write_report(&path, &report)?;
        debug!(iteration = snap.iteration, path = %path.display(), "结果文件已写出");
        self.written.push(path);
        Ok(())
    }
}
