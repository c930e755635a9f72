use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_sort::core::{Catalog, GameConfig, GameSnapshot, GameState};
use tui_sort::term::{FrameBuffer, GameView, Viewport};
use tui_sort::types::{Delta, PointerEvent};

fn started_game() -> GameState {
    let mut state = GameState::new(&Catalog::builtin(), GameConfig::default()).unwrap();
    state.tick();
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = started_game();

    c.bench_function("game_tick_active_round", |b| {
        b.iter(|| {
            black_box(state.tick());
        })
    });
}

fn bench_drag_motion(c: &mut Criterion) {
    let mut state = started_game();
    let home = state.config().layout.item_home(0);
    state.apply_pointer(PointerEvent::Down(home));

    let mut flip = 1;
    c.bench_function("pointer_move", |b| {
        b.iter(|| {
            flip = -flip;
            state.apply_pointer(black_box(PointerEvent::Move(Delta::new(flip, 0))));
        })
    });
}

fn bench_pointer_down_miss(c: &mut Criterion) {
    let mut state = started_game();
    let nowhere = tui_sort::types::Point::new(-100, -100);

    c.bench_function("pointer_down_miss", |b| {
        b.iter(|| {
            state.apply_pointer(black_box(PointerEvent::Down(nowhere)));
        })
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let state = started_game();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(120, 40);

    c.bench_function("snapshot_render_120x40", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(120, 40), &mut fb);
            black_box(fb.cells().len());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_drag_motion,
    bench_pointer_down_miss,
    bench_snapshot_and_render
);
criterion_main!(benches);
