//! 游戏事件记录
//!
//! 每次击杀与目击反杀都记录为一条结构化事件，便于调用方回放或断言，
//! 而不必解析日志文本。

use super::entity::Pos;
use serde::{Deserialize, Serialize};

/// 一个迭代中发生的淘汰事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// 内鬼击杀了与其同格的宇航员
    Kill {
        iteration: u32,
        astronaut: usize,
        impostor: usize,
        at: Pos,
    },
    /// 相邻的宇航员目击了内鬼与另一名宇航员同格，内鬼被淘汰
    Witness {
        iteration: u32,
        impostor: usize,
        witness: usize,
        victim: usize,
        at: Pos,
    },
}

impl GameEvent {
    pub fn iteration(&self) -> u32 {
        match self {
            GameEvent::Kill { iteration, .. } | GameEvent::Witness { iteration, .. } => *iteration,
        }
    }
}

/// 事件收集器（存内存，随仿真一起存活）
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    pub fn push(&mut self, ev: GameEvent) {
        self.events.push(ev);
    }

    pub fn kills(&self) -> impl Iterator<Item = &GameEvent> {
        self.events
            .iter()
            .filter(|ev| matches!(ev, GameEvent::Kill { .. }))
    }

    pub fn witnesses(&self) -> impl Iterator<Item = &GameEvent> {
        self.events
            .iter()
            .filter(|ev| matches!(ev, GameEvent::Witness { .. }))
    }
}
