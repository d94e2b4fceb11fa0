//! ASCII 网格渲染
//!
//! 行号为 `y`、列号为 `x`；`O` 空格子，`A` 存活宇航员，`I` 存活内鬼。
//! 内鬼在宇航员之后绘制，同格时显示为 `I`；死亡实体不绘制。

use crate::error::{SimError, SimResult};
use crate::game::{Snapshot, SnapshotSink, World};
use std::io::Write;
use std::path::PathBuf;

const EMPTY: u8 = b'O';
const ASTRONAUT: u8 = b'A';
const IMPOSTOR: u8 = b'I';

/// 渲染整张网格，每行形如 `|O|A|O|`，网格之后跟一个空行。
pub fn render_grid(world: &World) -> String {
    let side = world.side() as usize;
    let mut grid = vec![vec![EMPTY; side]; side];

    for a in world.astronauts().iter().filter(|a| a.alive) {
        grid[a.pos.y as usize][a.pos.x as usize] = ASTRONAUT;
    }
    for imp in world.impostors().iter().filter(|imp| imp.alive) {
        grid[imp.pos.y as usize][imp.pos.x as usize] = IMPOSTOR;
    }

    let mut out = String::with_capacity((side * 2 + 2) * side + 1);
    for row in &grid {
        for &cell in row {
            out.push('|');
            out.push(cell as char);
        }
        out.push_str("|\n");
    }
    out.push('\n');
    out
}

/// 把每个快照的网格写到 `out`（通常是标准输出）。
pub struct GridPrinter<W: Write> {
    out: W,
}

impl<W: Write> GridPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SnapshotSink for GridPrinter<W> {
    fn on_snapshot(&mut self, snap: &Snapshot<'_>) -> SimResult<()> {
        let grid = render_grid(snap.world);
        self.out
            .write_all(grid.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|source| SimError::OutputWriteFailure {
                path: PathBuf::from("<stdout>"),
                source,
            })
    }
}
