//! Benchmarks for the two hot paths: pathfinding and move selection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quoridor_engine::core::{Move, Orientation, Position, WallSlot};
use quoridor_engine::path::shortest_path;
use quoridor_engine::rules::GameState;
use quoridor_engine::search::{Difficulty, MinimaxSearch, SearchConfig};

fn walled_midgame() -> GameState {
    let mut game = GameState::new();
    let line = [
        Move::pawn(Position::new(4, 7)),
        Move::pawn(Position::new(4, 1)),
        Move::wall(WallSlot::new(3, 1), Orientation::Horizontal),
        Move::wall(WallSlot::new(2, 6), Orientation::Horizontal),
        Move::pawn(Position::new(4, 6)),
        Move::wall(WallSlot::new(5, 5), Orientation::Vertical),
    ];
    for mv in line {
        game.apply_move(mv, true).unwrap();
    }
    game
}

fn bench_shortest_path(c: &mut Criterion) {
    let open = GameState::new();
    let walled = walled_midgame();

    c.bench_function("astar_open_board", |b| {
        b.iter(|| {
            shortest_path(
                black_box(open.walls()),
                black_box(Position::new(4, 8)),
                black_box(0),
            )
        })
    });

    c.bench_function("astar_walled_board", |b| {
        b.iter(|| {
            shortest_path(
                black_box(walled.walls()),
                black_box(Position::new(4, 6)),
                black_box(0),
            )
        })
    });
}

fn bench_get_move(c: &mut Criterion) {
    c.bench_function("get_move_easy", |b| {
        let mut game = walled_midgame();
        let mut search = MinimaxSearch::new(Difficulty::Easy);
        b.iter(|| search.get_move(black_box(&mut game)))
    });

    c.bench_function("get_move_depth_2", |b| {
        let mut game = walled_midgame();
        let mut search =
            MinimaxSearch::with_config(SearchConfig::default().with_depth(2).with_seed(5));
        b.iter(|| search.get_move(black_box(&mut game)))
    });
}

criterion_group!(benches, bench_shortest_path, bench_get_move);
criterion_main!(benches);
