mod movement;
mod simulation;
mod status;

use crate::game::{Pos, World};

pub(crate) fn world(n: u32, iterations: u32, astros: &[(u32, u32)], imps: &[(u32, u32)]) -> World {
    World::new(
        n,
        iterations,
        astros.iter().map(|&(x, y)| Pos::new(x, y)),
        imps.iter().map(|&(x, y)| Pos::new(x, y)),
    )
    .expect("build world")
}
