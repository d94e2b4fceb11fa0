use super::world;
use crate::error::{SimError, SimResult};
use crate::game::{
    GameEvent, GameStatus, Outcome, Pos, RunState, Simulation, Snapshot, SnapshotSink,
};
use crate::output::SnapshotRecorder;
use std::path::PathBuf;

#[test]
fn lone_astronaut_walks_into_the_impostor_and_loses() {
    let mut sim = Simulation::new(world(1, 5, &[(0, 0)], &[(1, 1)]));
    let mut rec = SnapshotRecorder::default();

    let summary = sim.run(&mut rec).expect("run");

    assert_eq!(rec.iterations(), vec![0, 1, 2]);
    let positions: Vec<Pos> = rec
        .reports
        .iter()
        .map(|(_, r)| r.astronauts[0].pos)
        .collect();
    assert_eq!(positions, vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1)]);

    assert_eq!(summary.outcome, Outcome::Defeat);
    assert_eq!(summary.status, GameStatus::Defeat);
    assert_eq!(summary.iterations, 2);
    assert_eq!(summary.dead_astro_count, 1);
    assert_eq!(summary.dead_imp_count, 0);
    assert_eq!(summary.kills, 1);
    assert_eq!(summary.witnessed, 0);
    assert_eq!(sim.state(), RunState::Finished(Outcome::Defeat));
    assert_eq!(
        sim.events().events,
        vec![GameEvent::Kill {
            iteration: 2,
            astronaut: 0,
            impostor: 0,
            at: Pos::new(1, 1),
        }]
    );
}

#[test]
fn stationary_impostor_off_the_path_exhausts_the_budget() {
    // 内鬼不会移动，两名宇航员汇聚到中心后相安无事
    let mut sim = Simulation::new(world(1, 5, &[(1, 1), (2, 1)], &[(0, 1)]));
    let mut rec = SnapshotRecorder::default();

    let summary = sim.run(&mut rec).expect("run");

    assert_eq!(rec.iterations(), vec![0, 1, 2, 3, 4]);
    assert_eq!(summary.outcome, Outcome::Exhausted);
    assert_eq!(summary.status, GameStatus::Continue);
    assert_eq!(summary.iterations, 4);
    assert_eq!(sim.world().astronauts()[1].pos, Pos::new(1, 1));
    assert_eq!(sim.world().impostors()[0].pos, Pos::new(0, 1));
    assert_eq!(sim.world().dead_astro_count(), 0);
}

#[test]
fn budget_of_zero_or_one_only_emits_the_initial_snapshot() {
    for budget in [0, 1] {
        let mut sim = Simulation::new(world(1, budget, &[(0, 0)], &[(1, 1)]));
        let mut rec = SnapshotRecorder::default();

        let summary = sim.run(&mut rec).expect("run");

        assert_eq!(rec.iterations(), vec![0]);
        assert_eq!(summary.outcome, Outcome::Exhausted);
        assert_eq!(summary.iterations, 0);
        assert_eq!(sim.world().astronauts()[0].pos, Pos::new(0, 0));
    }
}

#[test]
fn initial_snapshot_reports_continue_even_without_impostors() {
    let mut sim = Simulation::new(world(1, 5, &[(0, 0)], &[]));
    let mut rec = SnapshotRecorder::default();

    let summary = sim.run(&mut rec).expect("run");

    assert_eq!(rec.reports[0].1.status, GameStatus::Continue);
    assert_eq!(rec.iterations(), vec![0, 1]);
    assert_eq!(summary.outcome, Outcome::Victory);
}

#[test]
fn dead_counters_are_monotonic_and_match_flags() {
    let mut sim = Simulation::new(world(
        3,
        20,
        &[(0, 0), (6, 6), (3, 0), (0, 3), (6, 3)],
        &[(3, 2), (2, 3), (3, 3)],
    ));
    let mut rec = SnapshotRecorder::default();

    sim.run(&mut rec).expect("run");

    let mut prev = (0, 0);
    for (_, r) in &rec.reports {
        assert!(r.dead_astronauts >= prev.0);
        assert!(r.dead_impostors >= prev.1);
        assert!(r.dead_astronauts <= r.astronauts.len());
        assert!(r.dead_impostors <= r.impostors.len());
        assert_eq!(
            r.dead_astronauts,
            r.astronauts.iter().filter(|a| !a.alive).count()
        );
        assert_eq!(
            r.dead_impostors,
            r.impostors.iter().filter(|i| !i.alive).count()
        );
        prev = (r.dead_astronauts, r.dead_impostors);
    }
    assert_eq!(rec.last().map(|r| r.status), Some(GameStatus::Defeat));
}

#[test]
fn tick_without_sink_advances_one_iteration() {
    let mut sim = Simulation::new(world(2, 10, &[(0, 0)], &[(4, 4)]));

    assert_eq!(sim.tick(), GameStatus::Continue);
    assert_eq!(sim.iteration(), 1);
    assert_eq!(sim.world().astronauts()[0].pos, Pos::new(0, 1));
    assert_eq!(sim.state(), RunState::Running);
}

struct FailAt {
    iteration: u32,
    seen: Vec<u32>,
}

impl SnapshotSink for FailAt {
    fn on_snapshot(&mut self, snap: &Snapshot<'_>) -> SimResult<()> {
        self.seen.push(snap.iteration);
        if snap.iteration == self.iteration {
            return Err(SimError::OutputWriteFailure {
                path: PathBuf::from("nowhere"),
                source: std::io::Error::other("disk full"),
            });
        }
        Ok(())
    }
}

#[test]
fn sink_failure_aborts_the_run() {
    let mut sim = Simulation::new(world(2, 10, &[(0, 0)], &[(4, 4)]));
    let mut sink = FailAt {
        iteration: 1,
        seen: Vec::new(),
    };

    let err = sim.run(&mut sink).expect_err("sink failure must propagate");

    assert!(matches!(err, SimError::OutputWriteFailure { .. }));
    assert_eq!(sink.seen, vec![0, 1]);
    assert_eq!(sim.iteration(), 1);
}

#[test]
fn paired_sinks_both_see_every_snapshot() {
    let mut sim = Simulation::new(world(1, 3, &[(0, 0)], &[(2, 2)]));
    let mut sink = (SnapshotRecorder::default(), Some(SnapshotRecorder::default()));

    sim.run(&mut sink).expect("run");

    let second = sink.1.expect("second recorder");
    assert_eq!(sink.0.iterations(), vec![0, 1, 2]);
    assert_eq!(second.iterations(), vec![0, 1, 2]);
}
