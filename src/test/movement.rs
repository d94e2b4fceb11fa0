use super::world;
use crate::game::Pos;
use crate::game::rules::{move_astronauts, step_toward_center};

#[test]
fn step_moves_vertically_before_horizontally() {
    assert_eq!(step_toward_center(Pos::new(0, 0), 2), Pos::new(0, 1));
    assert_eq!(step_toward_center(Pos::new(4, 4), 2), Pos::new(4, 3));
    assert_eq!(step_toward_center(Pos::new(0, 2), 2), Pos::new(1, 2));
    assert_eq!(step_toward_center(Pos::new(4, 2), 2), Pos::new(3, 2));
}

#[test]
fn astronaut_at_center_does_not_move() {
    assert_eq!(step_toward_center(Pos::new(3, 3), 3), Pos::new(3, 3));
    assert_eq!(step_toward_center(Pos::new(0, 0), 0), Pos::new(0, 0));
}

#[test]
fn every_start_converges_in_manhattan_distance_and_stays() {
    for n in 0..4u32 {
        let max = n * 2;
        for x0 in 0..=max {
            for y0 in 0..=max {
                let expected = x0.abs_diff(n) + y0.abs_diff(n);
                let mut pos = Pos::new(x0, y0);
                let mut ticks = 0;
                while pos != Pos::new(n, n) {
                    let next = step_toward_center(pos, n);
                    assert!(next.within(max), "left the grid: {next} (n={n})");
                    // 纵向未对齐时横坐标不变
                    if pos.y != n {
                        assert_eq!(next.x, pos.x);
                    }
                    pos = next;
                    ticks += 1;
                    assert!(ticks <= expected, "too slow from ({x0}, {y0}) n={n}");
                }
                assert_eq!(ticks, expected, "start ({x0}, {y0}) n={n}");
                for _ in 0..3 {
                    pos = step_toward_center(pos, n);
                    assert_eq!(pos, Pos::new(n, n));
                }
            }
        }
    }
}

#[test]
fn dead_astronauts_and_impostors_never_move() {
    let mut w = world(2, 10, &[(0, 0), (4, 4)], &[(0, 4)]);
    w.kill_astronaut(1);

    let moved = move_astronauts(&mut w);

    assert_eq!(moved, 1);
    assert_eq!(w.astronauts()[0].pos, Pos::new(0, 1));
    assert_eq!(w.astronauts()[1].pos, Pos::new(4, 4));
    assert_eq!(w.impostors()[0].pos, Pos::new(0, 4));
}
