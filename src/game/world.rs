//! 网格世界
//!
//! 持有网格半径、迭代预算、宇航员与内鬼序列以及双方死亡计数。
//! 实体创建后数量固定，只会被标记为死亡，不会被移除。

use super::entity::{Astronaut, Impostor, Pos};
use super::status::GameStatus;
use crate::error::{SimError, SimResult};

/// 仿真世界：`(2N+1) × (2N+1)` 的网格，中心为 `(N, N)`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    n: u32,
    iterations: u32,
    astronauts: Vec<Astronaut>,
    impostors: Vec<Impostor>,
    dead_astro_count: usize,
    dead_imp_count: usize,
}

/// 网格半径上限。网格每次都要完整渲染，`(2N+1)²` 个格子必须能放进内存。
pub const MAX_RADIUS: u32 = 1 << 12;

/// 网格最大坐标 `2N`；半径超过 [`MAX_RADIUS`] 时返回 `None`。
pub(crate) fn max_coord(n: u32) -> Option<u32> {
    (n <= MAX_RADIUS).then(|| n * 2)
}

/// 校验所有坐标都在 `[0, 2N]` 内，返回 `2N`。
pub(crate) fn check_bounds(n: u32, astronauts: &[Pos], impostors: &[Pos]) -> SimResult<u32> {
    let max = max_coord(n)
        .ok_or_else(|| SimError::format(format!("grid radius {n} exceeds {MAX_RADIUS}")))?;
    for (who, list) in [("astronaut", astronauts), ("impostor", impostors)] {
        if let Some((i, p)) = list.iter().enumerate().find(|(_, p)| !p.within(max)) {
            return Err(SimError::format(format!("{who} {i} at {p} is outside [0, {max}]")));
        }
    }
    Ok(max)
}

impl World {
    /// 由初始坐标构建世界，所有实体存活，计数器为 0。
    pub fn new(
        n: u32,
        iterations: u32,
        astronauts: impl IntoIterator<Item = Pos>,
        impostors: impl IntoIterator<Item = Pos>,
    ) -> SimResult<World> {
        World::from_parts(
            n,
            iterations,
            astronauts.into_iter().map(Astronaut::new).collect(),
            impostors.into_iter().map(Impostor::new).collect(),
        )
    }

    /// 由现成的实体（可以已经死亡）组装世界，死亡计数根据 `alive` 标记推导。
    pub fn from_parts(
        n: u32,
        iterations: u32,
        astronauts: Vec<Astronaut>,
        impostors: Vec<Impostor>,
    ) -> SimResult<World> {
        let astro_pos: Vec<Pos> = astronauts.iter().map(|a| a.pos).collect();
        let imp_pos: Vec<Pos> = impostors.iter().map(|imp| imp.pos).collect();
        check_bounds(n, &astro_pos, &imp_pos)?;

        let dead_astro_count = astronauts.iter().filter(|a| !a.alive).count();
        let dead_imp_count = impostors.iter().filter(|imp| !imp.alive).count();
        Ok(World {
            n,
            iterations,
            astronauts,
            impostors,
            dead_astro_count,
            dead_imp_count,
        })
    }

    /// 网格半径 N
    pub fn n(&self) -> u32 {
        self.n
    }

    /// 网格边长 `2N+1`
    pub fn side(&self) -> u32 {
        self.n * 2 + 1
    }

    /// 迭代预算：主循环在 `iteration < iterations` 时继续。
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn astronauts(&self) -> &[Astronaut] {
        &self.astronauts
    }

    pub fn impostors(&self) -> &[Impostor] {
        &self.impostors
    }

    pub fn astro_count(&self) -> usize {
        self.astronauts.len()
    }

    pub fn imp_count(&self) -> usize {
        self.impostors.len()
    }

    pub fn dead_astro_count(&self) -> usize {
        self.dead_astro_count
    }

    pub fn dead_imp_count(&self) -> usize {
        self.dead_imp_count
    }

    pub fn alive_astro_count(&self) -> usize {
        self.astro_count() - self.dead_astro_count
    }

    pub fn alive_imp_count(&self) -> usize {
        self.imp_count() - self.dead_imp_count
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self)
    }

    pub(crate) fn astronauts_mut(&mut self) -> &mut [Astronaut] {
        &mut self.astronauts
    }

    /// 标记宇航员死亡；已经死亡时返回 false，计数不变。
    pub(crate) fn kill_astronaut(&mut self, idx: usize) -> bool {
        let astro = &mut self.astronauts[idx];
        if !astro.alive {
            return false;
        }
        astro.alive = false;
        self.dead_astro_count += 1;
        true
    }

    /// 标记内鬼死亡；已经死亡时返回 false，计数不变。
    pub(crate) fn kill_impostor(&mut self, idx: usize) -> bool {
        let imp = &mut self.impostors[idx];
        if !imp.alive {
            return false;
        }
        imp.alive = false;
        self.dead_imp_count += 1;
        true
    }
}
