//! 游戏状态判定

use super::world::World;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 一个迭代结束后的游戏状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// 双方都还有存活者
    #[default]
    Continue,
    /// 所有内鬼死亡
    Victory,
    /// 所有宇航员死亡
    Defeat,
}

impl GameStatus {
    /// 只依赖计数器的纯函数。内鬼全灭优先判定，因此双方同时全灭时为 Victory。
    pub fn from_counts(
        astro_count: usize,
        dead_astro_count: usize,
        imp_count: usize,
        dead_imp_count: usize,
    ) -> GameStatus {
        if dead_imp_count == imp_count {
            GameStatus::Victory
        } else if dead_astro_count == astro_count {
            GameStatus::Defeat
        } else {
            GameStatus::Continue
        }
    }

    pub fn evaluate(world: &World) -> GameStatus {
        GameStatus::from_counts(
            world.astro_count(),
            world.dead_astro_count(),
            world.imp_count(),
            world.dead_imp_count(),
        )
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Continue)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Continue => "Continue",
            GameStatus::Victory => "Victory",
            GameStatus::Defeat => "Defeat",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game status {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for GameStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Continue" => Ok(GameStatus::Continue),
            "Victory" => Ok(GameStatus::Victory),
            "Defeat" => Ok(GameStatus::Defeat),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}
