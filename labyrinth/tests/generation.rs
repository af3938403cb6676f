//! Generation properties across algorithms, seeds and grid shapes.

use labyrinth::core::generator::{Algorithm, carve, generate_maze};
use labyrinth::core::grid::Grid;
use labyrinth::core::invariants::{
    asymmetric_walls, passage_count, shortest_path, validate_invariants,
};
use labyrinth::core::types::{Coordinate, Direction};
use labyrinth::test_support::seeded;

const SHAPES: [(usize, usize); 7] = [(1, 2), (2, 1), (1, 7), (7, 1), (2, 2), (3, 3), (15, 10)];

#[test]
fn every_algorithm_yields_valid_connected_mazes() {
    for algorithm in Algorithm::ALL {
        for (width, height) in SHAPES {
            for seed in 0..20 {
                let mut rng = seeded(seed);
                let (maze, used) =
                    generate_maze(width, height, Some(algorithm), &mut rng).expect("generate");
                assert_eq!(used, algorithm);
                let errors = validate_invariants(&maze);
                assert!(
                    errors.is_empty(),
                    "{algorithm} {width}x{height} seed {seed}: {errors:?}\n{maze}"
                );
            }
        }
    }
}

#[test]
fn random_pick_also_yields_valid_mazes() {
    let mut rng = seeded(2024);
    for _ in 0..50 {
        let (maze, _) = generate_maze(8, 6, None, &mut rng).expect("generate");
        assert!(validate_invariants(&maze).is_empty());
    }
}

#[test]
fn carved_walls_stay_symmetric() {
    for algorithm in Algorithm::ALL {
        let mut rng = seeded(77);
        let grid = carve(Grid::walled(12, 9), algorithm, &mut rng).expect("carve");
        assert!(asymmetric_walls(&grid).is_empty(), "{algorithm}");
    }
}

#[test]
fn perfect_algorithms_carve_spanning_trees() {
    for algorithm in [Algorithm::BinaryTree, Algorithm::GrowingTree] {
        assert!(algorithm.is_perfect());
        for seed in 0..10 {
            let mut rng = seeded(seed);
            let grid = carve(Grid::walled(9, 7), algorithm, &mut rng).expect("carve");
            assert_eq!(passage_count(&grid), 9 * 7 - 1, "{algorithm} seed {seed}");
            let corner = Coordinate::new(8, 6);
            assert!(shortest_path(&grid, Coordinate::new(0, 0), corner).is_some());
        }
    }
}

#[test]
fn holes_only_add_passages() {
    let mut loops_seen = false;
    for seed in 0..10 {
        let mut rng = seeded(seed);
        let grid = carve(Grid::walled(9, 7), Algorithm::BinaryTreeWithHoles, &mut rng)
            .expect("carve");
        let passages = passage_count(&grid);
        assert!(passages >= 9 * 7 - 1);
        loops_seen |= passages > 9 * 7 - 1;
    }
    assert!(loops_seen, "holes variant never produced a loop");
}

#[test]
fn binary_tree_opens_bottom_row_and_right_column() {
    for seed in 0..10 {
        let mut rng = seeded(seed);
        let grid = carve(Grid::walled(3, 3), Algorithm::BinaryTree, &mut rng).expect("carve");
        for x in 0..2 {
            let room = grid.room(Coordinate::new(x, 2)).expect("room");
            assert!(!room.has_wall(Direction::Right));
        }
        for y in 0..2 {
            let room = grid.room(Coordinate::new(2, y)).expect("room");
            assert!(!room.has_wall(Direction::Down));
        }
        // Along the border corridor only the far ends can be dead ends.
        for at in [Coordinate::new(1, 2), Coordinate::new(2, 1)] {
            let open = grid.room(at).expect("room").walls.open_sides();
            assert!(open.len() >= 2, "{at} is a dead end");
        }
        let corner = grid.room(Coordinate::new(2, 2)).expect("room");
        assert!(!corner.has_wall(Direction::Up) && !corner.has_wall(Direction::Left));
    }
}

#[test]
fn start_and_treasure_avoid_last_row_and_column() {
    let mut rng = seeded(5);
    for _ in 0..100 {
        let (maze, _) = generate_maze(6, 5, None, &mut rng).expect("generate");
        for at in [maze.start(), maze.treasure()] {
            assert!(at.x < 5 && at.y < 4, "{at}");
        }
        assert_ne!(maze.start().sum(), maze.treasure().sum());
    }
}

#[test]
fn same_seed_same_maze() {
    let (a, _) = generate_maze(10, 10, None, &mut seeded(42)).expect("generate");
    let (b, _) = generate_maze(10, 10, None, &mut seeded(42)).expect("generate");
    assert_eq!(a, b);
}
