//! End-to-end rules of a game, driven through pointer events and game actions.

use tui_sort::core::{
    DropTarget, DropTargetSet, GameConfig, GameEvent, GameState, Item, ItemRegistry, Phase,
    SimpleRng,
};
use tui_sort::types::{
    CategoryId, Delta, GameAction, ItemId, Layout, Point, PointerEvent, Rect, Size,
};

const A: CategoryId = CategoryId(0);
const B: CategoryId = CategoryId(1);
const ON_A: Point = Point::new(3, 16);
const ON_B: Point = Point::new(23, 16);
const EMPTY: Point = Point::new(70, 30);

fn item(id: u32, category: CategoryId) -> Item {
    Item {
        id: ItemId(id),
        category,
        label: format!("item {id}"),
    }
}

fn two_bins() -> DropTargetSet {
    DropTargetSet::from_targets(vec![
        DropTarget {
            category: A,
            label: "A".into(),
            bounds: Rect::new(Point::new(0, 15), Size::new(18, 7)),
        },
        DropTarget {
            category: B,
            label: "B".into(),
            bounds: Rect::new(Point::new(20, 15), Size::new(18, 7)),
        },
    ])
}

fn game(items: Vec<Item>, per_round: usize, rounds: u32) -> GameState {
    let config = GameConfig::new()
        .with_items_per_round(per_round)
        .with_total_rounds(rounds);
    GameState::with_parts(ItemRegistry::from_ordered(items), two_bins(), config).unwrap()
}

/// Press on the item in `slot`, move it over `to` and release.
fn drop_slot(game: &mut GameState, slot: usize, to: Point) {
    let home = Layout::default().item_home(slot);
    game.apply_pointer(PointerEvent::Down(home));
    game.apply_pointer(PointerEvent::Move(to.delta_from(home)));
    game.apply_pointer(PointerEvent::Up(to));
}

fn active_ids(game: &GameState) -> Vec<u32> {
    game.round_state()
        .map(|r| r.active_items().map(|(_, s)| s.item.id.0).collect())
        .unwrap_or_default()
}

#[test]
fn two_category_round() {
    let mut g = game(vec![item(1, A), item(2, B)], 2, 1);
    g.tick();
    assert_eq!(active_ids(&g), vec![1, 2]);

    drop_slot(&mut g, 0, ON_A);
    assert_eq!(g.score(), 1);
    assert_eq!(active_ids(&g), vec![2]);

    drop_slot(&mut g, 1, ON_A);
    assert_eq!(g.score(), 0);
    assert_eq!(active_ids(&g), vec![2]);
    let slot = g.round_state().unwrap().slot(1).unwrap();
    assert_eq!(slot.position(), Some(slot.home));

    drop_slot(&mut g, 1, ON_B);
    assert_eq!(g.score(), 1);
    assert_eq!(g.phase(), &Phase::AwaitingRoundStart);
}

#[test]
fn single_round_game_ends_on_next_tick() {
    let mut g = game(vec![item(1, A), item(2, B)], 2, 1);
    g.tick();
    drop_slot(&mut g, 0, ON_A);
    drop_slot(&mut g, 1, ON_A);
    drop_slot(&mut g, 1, ON_B);
    assert_eq!(g.score(), 1);

    g.tick();
    assert!(g.is_finished());
    assert_eq!(g.score(), 1);
    assert_eq!(g.round(), 2);
}

#[test]
fn drop_on_empty_space_only_resets_position() {
    let mut g = game(vec![item(1, A), item(2, B)], 2, 1);
    g.tick();
    let before = g.round_state().unwrap().clone();

    for slot in 0..2 {
        drop_slot(&mut g, slot, EMPTY);
        assert_eq!(g.score(), 0);
        assert_eq!(g.round_state().unwrap(), &before);
    }
}

#[test]
fn press_while_dragging_keeps_first_item() {
    let mut g = game(vec![item(1, A), item(2, B)], 2, 1);
    g.tick();
    let layout = Layout::default();

    assert!(g.apply_pointer(PointerEvent::Down(layout.item_home(0))));
    assert!(!g.apply_pointer(PointerEvent::Down(layout.item_home(1))));
    assert_eq!(g.dragged(), Some(0));
}

#[test]
fn full_default_game_with_perfect_play() {
    let items: Vec<Item> = (0..50).map(|i| item(i, if i % 3 == 0 { A } else { B })).collect();
    let mut g = game(items, 5, 10);

    while !g.is_finished() {
        g.tick();
        let Some(round) = g.round_state() else {
            continue;
        };
        let plan: Vec<(usize, CategoryId)> = round
            .active_items()
            .map(|(i, s)| (i, s.item.category))
            .collect();
        for (slot, category) in plan {
            drop_slot(&mut g, slot, if category == A { ON_A } else { ON_B });
        }
    }

    assert_eq!(g.score(), 50);
    assert_eq!(g.matched_drops(), 50);
    assert_eq!(g.mismatched_drops(), 0);
    assert_eq!(g.round(), 11);

    let events = g.take_events();
    let started = events
        .iter()
        .filter(|e| matches!(e, GameEvent::RoundStarted { .. }))
        .count();
    assert_eq!(started, 10);
}

/// Random drops across many seeds: the bookkeeping invariants always hold.
#[test]
fn random_play_keeps_invariants() {
    for seed in 1..40u32 {
        let mut rng = SimpleRng::new(seed);
        let items: Vec<Item> = (0..12)
            .map(|i| item(i, if rng.next_range(2) == 0 { A } else { B }))
            .collect();
        let mut g = game(items, 3, 4);
        let mut last_round = 0;

        for _ in 0..400 {
            g.tick();
            assert!(g.round() >= last_round);
            assert!(g.round() <= g.total_rounds() + 1);
            last_round = g.round();
            if g.is_finished() {
                break;
            }

            let before = g.round_state().map(|r| r.active_count()).unwrap_or(0);
            let matched_before = g.matched_drops();

            let slot = rng.next_range(3) as usize;
            let to = match rng.next_range(3) {
                0 => ON_A,
                1 => ON_B,
                _ => EMPTY,
            };
            drop_slot(&mut g, slot, to);

            assert_eq!(
                g.score(),
                g.matched_drops() as i32 - g.mismatched_drops() as i32
            );

            let matched_now = g.matched_drops() > matched_before;
            let after = g.round_state().map(|r| r.active_count()).unwrap_or(0);
            if matched_now {
                assert!(after < before || g.phase() == &Phase::AwaitingRoundStart);
            } else {
                assert_eq!(after, before);
            }
        }

        // Frozen once finished.
        if g.is_finished() {
            let (score, round) = (g.score(), g.round());
            drop_slot(&mut g, 0, ON_A);
            g.tick();
            assert_eq!((g.score(), g.round()), (score, round));

            let home = Layout::default().item_home(0);
            for action in [
                GameAction::Restart,
                GameAction::Pointer(PointerEvent::Down(home)),
                GameAction::Pointer(PointerEvent::Move(Delta::new(1, 1))),
                GameAction::Pointer(PointerEvent::Up(ON_B)),
            ] {
                assert!(!g.apply_action(action));
                g.tick();
                assert!(g.is_finished());
                assert_eq!((g.score(), g.round()), (score, round));
            }
        }
    }
}

#[test]
fn pointer_up_without_drag_is_idempotent() {
    let mut g = game(vec![item(1, A), item(2, B)], 2, 1);
    g.tick();
    let snap = g.snapshot();
    for _ in 0..3 {
        assert!(!g.apply_pointer(PointerEvent::Up(ON_A)));
    }
    assert_eq!(g.snapshot(), snap);
}

#[test]
fn restart_after_finish_keeps_final_result() {
    let mut g = game(vec![item(1, A)], 1, 1);
    g.tick();
    drop_slot(&mut g, 0, ON_A);
    g.tick();
    assert!(g.is_finished());
    assert_eq!((g.score(), g.round()), (1, 2));

    assert!(!g.apply_action(GameAction::Restart));
    assert!(g.is_finished());
    assert_eq!((g.score(), g.round()), (1, 2));
    assert_eq!(g.episode_id(), 0);
}
