//! 六行文本场景格式
//!
//! ```text
//! astro_count
//! imp_count
//! N
//! iteration
//! x,y & x,y & ...     (astro_count 对)
//! x,y & x,y & ...     (imp_count 对)
//! ```

use super::Scenario;
use crate::error::{SimError, SimResult};
use crate::game::{MAX_RADIUS, Pos, max_coord};

const HEADER_FIELDS: [&str; 4] = [
    "astronaut count",
    "impostor count",
    "grid radius",
    "iteration budget",
];

fn parse_number<T: std::str::FromStr>(line_no: usize, field: &str, raw: &str) -> SimResult<T> {
    let raw = raw.trim();
    raw.parse::<T>().map_err(|_| {
        SimError::format_at(
            line_no,
            format!("{field} must be a non-negative integer, got {raw:?}"),
        )
    })
}

fn parse_header<T: std::str::FromStr>(lines: &[&str], idx: usize) -> SimResult<T> {
    let field = HEADER_FIELDS[idx];
    let raw = lines
        .get(idx)
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| SimError::format_at(idx + 1, format!("missing {field}")))?;
    parse_number(idx + 1, field, raw)
}

fn parse_pair(line_no: usize, raw: &str, max: u32) -> SimResult<Pos> {
    let (x, y) = raw.split_once(',').ok_or_else(|| {
        SimError::format_at(line_no, format!("expected \"x,y\", got {:?}", raw.trim()))
    })?;
    let pos = Pos::new(
        parse_number(line_no, "x coordinate", x)?,
        parse_number(line_no, "y coordinate", y)?,
    );
    if !pos.within(max) {
        return Err(SimError::format_at(
            line_no,
            format!("coordinate {pos} is outside [0, {max}]"),
        ));
    }
    Ok(pos)
}

/// 解析一行 `x,y & x,y` 坐标对，数量必须与声明一致。
fn parse_pairs(
    line_no: usize,
    raw: Option<&str>,
    expected: usize,
    max: u32,
) -> SimResult<Vec<Pos>> {
    let raw = raw.unwrap_or("").trim();
    if raw.is_empty() {
        if expected == 0 {
            return Ok(Vec::new());
        }
        return Err(SimError::format_at(
            line_no,
            format!("expected {expected} coordinate pairs, found none"),
        ));
    }
    let pairs = raw
        .split('&')
        .map(|pair| parse_pair(line_no, pair, max))
        .collect::<SimResult<Vec<_>>>()?;
    if pairs.len() != expected {
        return Err(SimError::format_at(
            line_no,
            format!("expected {expected} coordinate pairs, found {}", pairs.len()),
        ));
    }
    Ok(pairs)
}

/// 解析文本场景。空白可随意，末尾空行忽略；数量为 0 时对应坐标行可为空或缺省。
pub fn parse_text(raw: &str) -> SimResult<Scenario> {
    let lines: Vec<&str> = raw.lines().collect();

    let astro_count: usize = parse_header(&lines, 0)?;
    let imp_count: usize = parse_header(&lines, 1)?;
    let n: u32 = parse_header(&lines, 2)?;
    let iterations: u32 = parse_header(&lines, 3)?;
    let max = max_coord(n)
        .ok_or_else(|| SimError::format_at(3, format!("grid radius {n} exceeds {MAX_RADIUS}")))?;

    let astronauts = parse_pairs(5, lines.get(4).copied(), astro_count, max)?;
    let impostors = parse_pairs(6, lines.get(5).copied(), imp_count, max)?;

    if let Some((idx, extra)) = lines
        .iter()
        .enumerate()
        .skip(6)
        .find(|(_, l)| !l.trim().is_empty())
    {
        return Err(SimError::format_at(
            idx + 1,
            format!("unexpected trailing content {:?}", extra.trim()),
        ));
    }

    Ok(Scenario {
        n,
        iterations,
        astronauts,
        impostors,
    })
}
