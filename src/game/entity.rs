//! 实体类型
//!
//! 定义网格坐标、宇航员与内鬼。实体的身份就是它在世界序列中的下标。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 网格坐标：`x` 为列，`y` 为行，取值范围 `[0, 2N]`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct Pos {
    pub x: u32,
    pub y: u32,
}

impl Pos {
    pub const fn new(x: u32, y: u32) -> Pos {
        Pos { x, y }
    }

    /// 是否处于 `other` 的八邻域内（切比雪夫距离恰为 1，不含同一格）。
    pub fn is_adjacent(self, other: Pos) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }

    /// 两个坐标都不超过 `max`。
    pub fn within(self, max: u32) -> bool {
        self.x <= max && self.y <= max
    }
}

impl From<[u32; 2]> for Pos {
    fn from([x, y]: [u32; 2]) -> Pos {
        Pos { x, y }
    }
}

impl From<Pos> for [u32; 2] {
    fn from(p: Pos) -> [u32; 2] {
        [p.x, p.y]
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 宇航员：每个迭代向网格中心移动一步。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Astronaut {
    pub pos: Pos,
    pub alive: bool,
}

impl Astronaut {
    pub fn new(pos: Pos) -> Astronaut {
        Astronaut { pos, alive: true }
    }
}

/// 内鬼：从不移动。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Impostor {
    pub pos: Pos,
    pub alive: bool,
}

impl Impostor {
    pub fn new(pos: Pos) -> Impostor {
        Impostor { pos, alive: true }
    }
}
