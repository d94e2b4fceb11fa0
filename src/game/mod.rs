//! 游戏核心模块
//!
//! 此模块包含网格世界模型、每个迭代的状态转移规则、胜负判定与仿真主循环。

// 子模块声明
mod entity;
mod event;
pub mod rules;
mod simulation;
mod status;
mod world;

// 重新导出公共接口
pub use entity::{Astronaut, Impostor, Pos};
pub use event::{EventLog, GameEvent};
pub use rules::TickOutcome;
pub use simulation::{Outcome, RunState, RunSummary, Simulation, Snapshot, SnapshotSink};
pub use status::{GameStatus, ParseStatusError};
pub use world::{MAX_RADIUS, World};
pub(crate) use world::{check_bounds, max_coord};
