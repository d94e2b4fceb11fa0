//! 内存快照收集器

use super::report::IterationReport;
use crate::error::SimResult;
use crate::game::{Snapshot, SnapshotSink};

/// 把每个快照转成 [`IterationReport`] 保存在内存中。
#[derive(Debug, Default)]
pub struct SnapshotRecorder {
    pub reports: Vec<(u32, IterationReport)>,
}

impl SnapshotRecorder {
    pub fn iterations(&self) -> Vec<u32> {
        self.reports.iter().map(|(i, _)| *i).collect()
    }

    pub fn last(&self) -> Option<&IterationReport> {
        self.reports.last().map(|(_, r)| r)
    }
}

impl SnapshotSink for SnapshotRecorder {
    fn on_snapshot(&mut self, snap: &Snapshot<'_>) -> SimResult<()> {
        self.reports
            .push((snap.iteration, IterationReport::from_world(snap.world, snap.status)));
        Ok(())
    }
}
