use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use falling_blocks::core::{GameConfig, GameStatus, Grid, NullRenderer, Tetris};
use falling_blocks::types::{PALETTE, TICK_MS};

fn running_game() -> Tetris<NullRenderer> {
    let mut game = Tetris::with_renderer(GameConfig::default().with_seed(12345), NullRenderer)
        .expect("default config is valid");
    game.start();
    game
}

/// Restart whenever the board fills up so the loop keeps measuring play.
fn keep_running(game: &mut Tetris<NullRenderer>) {
    if game.status() == GameStatus::GameOver {
        game.start();
    }
}

fn bench_advance(c: &mut Criterion) {
    let mut game = running_game();
    let frame = Duration::from_millis(TICK_MS as u64);

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            game.advance(black_box(frame));
            keep_running(&mut game);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(12, 20).expect("non-zero size");
            for y in 16..20 {
                for x in 0..12 {
                    grid.set(x, y, Some(PALETTE[1]));
                }
            }
            black_box(grid.evaluate_lines())
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut game = running_game();

    c.bench_function("spawn_next", |b| {
        b.iter(|| {
            game.spawn_next();
            keep_running(&mut game);
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut game = running_game();

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            game.move_right();
            game.move_left();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = running_game();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            game.rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_spawn,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
