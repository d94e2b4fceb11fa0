//! 仿真主循环
//!
//! 状态机：Running → Finished(Victory | Defeat | Exhausted)。
//! 每个迭代执行一次状态转移与状态判定，然后把快照交给 [`SnapshotSink`]。

use super::event::EventLog;
use super::rules;
use super::status::GameStatus;
use super::world::World;
use crate::error::SimResult;
use tracing::{debug, info};

/// 仿真结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
    /// 迭代预算耗尽时仍为 Continue
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Finished(Outcome),
}

/// 某个迭代结束时可观察到的状态
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub iteration: u32,
    pub status: GameStatus,
    pub world: &'a World,
}

/// 快照接收方：渲染网格、写结果文件、或在测试中收集。
///
/// 返回错误会立即终止仿真。
pub trait SnapshotSink {
    fn on_snapshot(&mut self, snap: &Snapshot<'_>) -> SimResult<()>;
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn on_snapshot(&mut self, snap: &Snapshot<'_>) -> SimResult<()> {
        (**self).on_snapshot(snap)
    }
}

impl<S: SnapshotSink> SnapshotSink for Option<S> {
    fn on_snapshot(&mut self, snap: &Snapshot<'_>) -> SimResult<()> {
        match self {
            Some(sink) => sink.on_snapshot(snap),
            None => Ok(()),
        }
    }
}

// 按顺序依次交付
impl<A: SnapshotSink, B: SnapshotSink> SnapshotSink for (A, B) {
    fn on_snapshot(&mut self, snap: &Snapshot<'_>) -> SimResult<()> {
        self.0.on_snapshot(snap)?;
        self.1.on_snapshot(snap)
    }
}

/// 一次完整运行的汇总
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: Outcome,
    pub status: GameStatus,
    /// 最后一个已执行的迭代编号（只有初始快照时为 0）
    pub iterations: u32,
    pub dead_astro_count: usize,
    pub dead_imp_count: usize,
    pub kills: usize,
    pub witnessed: usize,
}

/// 仿真器：持有世界、当前迭代编号、最近一次判定的状态与事件记录。
pub struct Simulation {
    world: World,
    iteration: u32,
    status: GameStatus,
    state: RunState,
    log: EventLog,
}

impl Simulation {
    pub fn new(world: World) -> Simulation {
        Simulation {
            world,
            iteration: 0,
            status: GameStatus::Continue,
            state: RunState::Running,
            log: EventLog::default(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// 当前迭代编号
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn events(&self) -> &EventLog {
        &self.log
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            iteration: self.iteration,
            status: self.status,
            world: &self.world,
        }
    }

    /// 推进一个迭代：状态转移 + 状态判定。不检查预算，也不交付快照。
    pub fn tick(&mut self) -> GameStatus {
        self.iteration = self.iteration.saturating_add(1);
        let out = rules::advance(&mut self.world, self.iteration, &mut self.log);
        self.status = self.world.status();
        debug!(
            iteration = self.iteration,
            moved = out.moved,
            kills = out.kills,
            witnessed = out.witnessed,
            status = %self.status,
            "迭代完成"
        );
        self.status
    }

    /// 运行到 Victory / Defeat，或迭代预算耗尽。
    ///
    /// 第 0 个迭代的快照在任何转移之前交付，其状态固定为 Continue。
    /// 预算 `<= 1` 时不执行任何迭代。
    #[tracing::instrument(skip(self, sink), fields(budget = self.world.iterations()))]
    pub fn run(&mut self, sink: &mut dyn SnapshotSink) -> SimResult<RunSummary> {
        info!(
            astronauts = self.world.astro_count(),
            impostors = self.world.imp_count(),
            n = self.world.n(),
            "▶️  开始运行仿真"
        );

        if self.iteration == 0 && self.state == RunState::Running {
            sink.on_snapshot(&self.snapshot())?;
        }

        let budget = self.world.iterations();
        while self.state == RunState::Running {
            if self.iteration.saturating_add(1) >= budget {
                self.state = RunState::Finished(Outcome::Exhausted);
                break;
            }
            let status = self.tick();
            sink.on_snapshot(&self.snapshot())?;
            if status.is_terminal() {
                let outcome = if status == GameStatus::Victory {
                    Outcome::Victory
                } else {
                    Outcome::Defeat
                };
                self.state = RunState::Finished(outcome);
            }
        }

        let summary = self.summary();
        info!(
            outcome = ?summary.outcome,
            iterations = summary.iterations,
            dead_astronauts = summary.dead_astro_count,
            dead_impostors = summary.dead_imp_count,
            "✅ 仿真完成"
        );
        Ok(summary)
    }

    pub fn summary(&self) -> RunSummary {
        let outcome = match self.state {
            RunState::Finished(outcome) => outcome,
            RunState::Running => Outcome::Exhausted,
        };
        RunSummary {
            outcome,
            status: self.status,
            iterations: self.iteration,
            dead_astro_count: self.world.dead_astro_count(),
            dead_imp_count: self.world.dead_imp_count(),
            kills: self.log.kills().count(),
            witnessed: self.log.witnesses().count(),
        }
    }
}
