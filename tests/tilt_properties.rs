//! Property tests for grid transforms, tilting and acceleration

use proptest::prelude::*;

use tilt_cycle::platform::{tilt, Cell, Direction, Grid};
use tilt_cycle::simulation::{run_brute_force, spin_cycle, state_after};
use tilt_cycle::SimulationConfig;

fn cell() -> impl Strategy<Value = Cell> + Clone {
    prop_oneof![
        3 => Just(Cell::Empty),
        2 => Just(Cell::Movable),
        1 => Just(Cell::Fixed),
    ]
}

fn grid_with(cell: impl Strategy<Value = Cell> + Clone) -> impl Strategy<Value = Grid> {
    (1usize..8, 1usize..8).prop_flat_map(move |(height, width)| {
        prop::collection::vec(cell.clone(), height * width).prop_map(move |cells| {
            let rows = cells.chunks(width).map(|r| r.to_vec()).collect();
            Grid::from_rows(rows).unwrap()
        })
    })
}

fn grid() -> impl Strategy<Value = Grid> {
    grid_with(cell())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::all().to_vec())
}

proptest! {
    #[test]
    fn transpose_is_an_involution(g in grid()) {
        prop_assert_eq!(g.transpose().transpose(), g);
    }

    #[test]
    fn tilt_without_rolling_rocks_is_identity(
        g in grid_with(prop_oneof![Just(Cell::Empty), Just(Cell::Fixed)]),
        dir in direction(),
    ) {
        prop_assert_eq!(tilt(&g, dir), g);
    }

    #[test]
    fn tilt_is_idempotent(g in grid(), dir in direction()) {
        let once = tilt(&g, dir);
        prop_assert_eq!(tilt(&once, dir), once);
    }

    #[test]
    fn tilt_conserves_rocks(g in grid(), dir in direction()) {
        let tilted = tilt(&g, dir);
        prop_assert_eq!(tilted.movable_count(), g.movable_count());
        for (before, after) in g.cells().iter().zip(tilted.cells()) {
            prop_assert_eq!(*before == Cell::Fixed, *after == Cell::Fixed);
        }
    }

    #[test]
    fn spin_cycle_keeps_shape(g in grid()) {
        let spun = spin_cycle(&g);
        prop_assert_eq!(spun.width(), g.width());
        prop_assert_eq!(spun.height(), g.height());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn accelerated_matches_brute_force(g in grid(), n in 0u64..60) {
        let config = SimulationConfig::default();
        prop_assert_eq!(state_after(&g, n, &config).unwrap(), run_brute_force(&g, n));
    }
}
