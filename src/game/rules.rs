//! 状态转移规则
//!
//! 一个迭代依次执行：宇航员移动、内鬼击杀、目击反杀。
//! 遍历顺序固定（下标顺序），结果完全确定：
//! - 击杀：宇航员为外层、内鬼为内层
//! - 目击：内鬼为外层、宇航员为内层，且在本迭代所有击杀结算之后

use super::entity::Pos;
use super::event::{EventLog, GameEvent};
use super::world::World;
use tracing::{debug, trace};

/// 单个迭代的转移结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub moved: usize,
    pub kills: usize,
    pub witnessed: usize,
}

/// 向中心 `(n, n)` 走一步：先纵向，纵向已对齐后才横向。
pub fn step_toward_center(pos: Pos, n: u32) -> Pos {
    let Pos { x, y } = pos;
    if y < n {
        Pos::new(x, y + 1)
    } else if y > n {
        Pos::new(x, y - 1)
    } else if x < n {
        Pos::new(x + 1, y)
    } else if x > n {
        Pos::new(x - 1, y)
    } else {
        pos
    }
}

/// 移动所有存活的宇航员，返回实际移动的人数。死亡者位置冻结，内鬼不移动。
pub fn move_astronauts(world: &mut World) -> usize {
    let n = world.n();
    let mut moved = 0;
    for (i, astro) in world.astronauts_mut().iter_mut().enumerate() {
        if !astro.alive {
            continue;
        }
        let next = step_toward_center(astro.pos, n);
        if next != astro.pos {
            trace!(astronaut = i, from = %astro.pos, to = %next, "宇航员移动");
            astro.pos = next;
            moved += 1;
        }
    }
    moved
}

/// 结算击杀：每名存活宇航员被同格的第一个存活内鬼击杀，每迭代至多死一次。
pub fn resolve_kills(world: &mut World, iteration: u32, log: &mut EventLog) -> usize {
    let mut kills = 0;
    for i in 0..world.astro_count() {
        let astro = world.astronauts()[i];
        if !astro.alive {
            continue;
        }
        let killer = world
            .impostors()
            .iter()
            .position(|imp| imp.alive && imp.pos == astro.pos);
        if let Some(j) = killer {
            world.kill_astronaut(i);
            kills += 1;
            debug!(iteration, astronaut = i, impostor = j, at = %astro.pos, "内鬼击杀宇航员");
            log.push(GameEvent::Kill {
                iteration,
                astronaut: i,
                impostor: j,
                at: astro.pos,
            });
        }
    }
    kills
}

/// 若 `witness` 能目击内鬼 `imp` 的击杀现场，返回同格受害者的下标。
///
/// 条件：内鬼存活；目击者处于内鬼的八邻域；存在另一名存活宇航员与内鬼同格。
fn witnessed_victim(world: &World, witness: usize, imp: usize) -> Option<usize> {
    let impostor = world.impostors()[imp];
    if !impostor.alive || !world.astronauts()[witness].pos.is_adjacent(impostor.pos) {
        return None;
    }
    world
        .astronauts()
        .iter()
        .enumerate()
        .position(|(k, a)| k != witness && a.alive && a.pos == impostor.pos)
}

/// 结算目击反杀，使用击杀之后的存活标记。每个内鬼取第一个满足条件的目击者。
pub fn resolve_witnesses(world: &mut World, iteration: u32, log: &mut EventLog) -> usize {
    let mut witnessed = 0;
    for j in 0..world.imp_count() {
        for i in 0..world.astro_count() {
            let Some(victim) = witnessed_victim(world, i, j) else {
                continue;
            };
            let at = world.impostors()[j].pos;
            world.kill_impostor(j);
            witnessed += 1;
            debug!(iteration, impostor = j, witness = i, victim, at = %at, "目击者淘汰内鬼");
            log.push(GameEvent::Witness {
                iteration,
                impostor: j,
                witness: i,
                victim,
                at,
            });
            break;
        }
    }
    witnessed
}

/// 执行一个完整的状态转移：移动 → 击杀 → 目击。
pub fn advance(world: &mut World, iteration: u32, log: &mut EventLog) -> TickOutcome {
    let moved = move_astronauts(world);
    let kills = resolve_kills(world, iteration, log);
    let witnessed = resolve_witnesses(world, iteration, log);
    TickOutcome {
        moved,
        kills,
        witnessed,
    }
}
