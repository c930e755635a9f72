//! Game state module - round lifecycle, scoring and termination
//!
//! This module ties together the registry, the drop targets and the drag
//! controller. It is the only writer of score and round number: the drag
//! controller reports drop outcomes and this module decides what they mean.
//!
//! Phases:
//!
//! ```text
//!            tick (round <= total)
//! Awaiting ─────────────────────────▶ RoundActive ──┐ matched / mismatched drop
//!    ▲  │                                │  ▲        │
//!    │  │ tick (round > total)           │  └────────┘
//!    │  ▼                                │
//!    │ AllRoundsComplete (terminal)      │ last active item removed
//!    └───────────────────────────────────┘
//! ```

use tui_sort_types::{CategoryId, GameAction, ItemId, PointerEvent};

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::drag::{DragController, DropOutcome, DropReport};
use crate::error::ConfigError;
use crate::registry::ItemRegistry;
use crate::rng::SimpleRng;
use crate::round::{RoundState, SlotIndex};
use crate::snapshot::{GameSnapshot, ItemView, TargetView};
use crate::targets::DropTargetSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingRoundStart,
    RoundActive(RoundState),
    AllRoundsComplete,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::AwaitingRoundStart => "awaiting_round_start",
            Phase::RoundActive(_) => "round_active",
            Phase::AllRoundsComplete => "all_rounds_complete",
        }
    }
}

/// Observable transitions, drained by [`GameState::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    RoundStarted {
        round: u32,
    },
    Dropped {
        item: ItemId,
        target: Option<CategoryId>,
        outcome: DropOutcome,
        score: i32,
    },
    RoundCompleted {
        round: u32,
        score: i32,
    },
    GameFinished {
        score: i32,
    },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    registry: ItemRegistry,
    targets: DropTargetSet,
    drag: DragController,
    phase: Phase,
    /// 0 before the first round; `total_rounds + 1` once finished.
    round: u32,
    score: i32,
    matched_drops: u32,
    mismatched_drops: u32,
    /// Seed of the current shuffle.
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Build a game from a catalog, shuffling its items with `config.seed`.
    pub fn new(catalog: &Catalog, config: GameConfig) -> Result<Self, ConfigError> {
        catalog.validate()?;
        let mut rng = SimpleRng::new(config.seed);
        let registry = ItemRegistry::new(catalog.items(), &mut rng);
        let targets = DropTargetSet::from_catalog(catalog, &config.layout);
        Self::with_parts(registry, targets, config)
    }

    /// Build a game from an already ordered registry and placed targets.
    ///
    /// The registry must hold enough items for every round; this is checked
    /// once here and relied upon for the rest of the game.
    pub fn with_parts(
        registry: ItemRegistry,
        targets: DropTargetSet,
        config: GameConfig,
    ) -> Result<Self, ConfigError> {
        if targets.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        if config.items_per_round == 0 {
            return Err(ConfigError::ZeroItemsPerRound);
        }
        let required = config.required_items();
        if registry.max_rounds(config.items_per_round) < config.total_rounds as usize {
            return Err(ConfigError::NotEnoughItems {
                rounds: config.total_rounds,
                per_round: config.items_per_round,
                required,
                available: registry.len(),
            });
        }

        let seed = config.seed;
        Ok(Self {
            config,
            registry,
            targets,
            drag: DragController::new(),
            phase: Phase::AwaitingRoundStart,
            round: 0,
            score: 0,
            matched_drops: 0,
            mismatched_drops: 0,
            seed,
            episode_id: 0,
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn targets(&self) -> &DropTargetSet {
        &self.targets
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn total_rounds(&self) -> u32 {
        self.config.total_rounds
    }

    pub fn matched_drops(&self) -> u32 {
        self.matched_drops
    }

    pub fn mismatched_drops(&self) -> u32 {
        self.mismatched_drops
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::AllRoundsComplete)
    }

    pub fn round_state(&self) -> Option<&RoundState> {
        match &self.phase {
            Phase::RoundActive(round) => Some(round),
            _ => None,
        }
    }

    pub fn dragged(&self) -> Option<SlotIndex> {
        self.drag.dragged()
    }

    /// Drain the transitions recorded since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Per-frame housekeeping: start the next round when none is active.
    ///
    /// Returns true when the phase changed.
    pub fn tick(&mut self) -> bool {
        if !matches!(self.phase, Phase::AwaitingRoundStart) {
            return false;
        }

        self.drag.release();
        self.round += 1;

        if self.round > self.config.total_rounds {
            self.phase = Phase::AllRoundsComplete;
            self.events.push(GameEvent::GameFinished { score: self.score });
            tracing::info!(
                score = self.score,
                matched = self.matched_drops,
                mismatched = self.mismatched_drops,
                "all rounds complete"
            );
            return true;
        }

        let index = (self.round - 1) as usize;
        let items = match self.registry.slice_for_round(index, self.config.items_per_round) {
            Ok(items) => items,
            Err(err) => {
                // Sizing was checked at construction.
                tracing::error!(%err, round = self.round, "round slice unavailable");
                self.round = self.config.total_rounds + 1;
                self.phase = Phase::AllRoundsComplete;
                self.events.push(GameEvent::GameFinished { score: self.score });
                return true;
            }
        };

        self.phase = Phase::RoundActive(RoundState::new(self.round, items, &self.config.layout));
        self.events.push(GameEvent::RoundStarted { round: self.round });
        tracing::debug!(round = self.round, total = self.config.total_rounds, "round started");
        true
    }

    /// Feed one pointer transition. Returns true when anything changed.
    pub fn apply_pointer(&mut self, event: PointerEvent) -> bool {
        let Phase::RoundActive(round) = &mut self.phase else {
            return false;
        };

        match event {
            PointerEvent::Down(pos) => self.drag.pointer_down(round, pos),
            PointerEvent::Move(delta) => self.drag.pointer_move(round, delta),
            PointerEvent::Up(pos) => match self.drag.pointer_up(round, &self.targets, pos) {
                Some(report) => {
                    self.resolve_drop(report);
                    true
                }
                None => false,
            },
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pointer(event) => self.apply_pointer(event),
            GameAction::Restart => self.restart(),
        }
    }

    /// Reshuffle with a seed derived from the current one and start over.
    ///
    /// Only an unfinished game can be restarted; the final score and round
    /// stay as they are once every round is complete.
    pub fn restart(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        let mut rng = SimpleRng::new(self.seed);
        let next_seed = rng.next_u32();
        let mut rng = SimpleRng::new(next_seed);
        self.registry.reshuffle(&mut rng);

        self.seed = next_seed;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.drag.release();
        self.phase = Phase::AwaitingRoundStart;
        self.round = 0;
        self.score = 0;
        self.matched_drops = 0;
        self.mismatched_drops = 0;
        self.events.clear();
        tracing::info!(seed = next_seed, episode = self.episode_id, "game restarted");
        true
    }

    fn resolve_drop(&mut self, report: DropReport) {
        let Phase::RoundActive(round) = &mut self.phase else {
            return;
        };

        match report.outcome {
            DropOutcome::Matched => {
                self.score += 1;
                self.matched_drops += 1;
                round.remove(report.slot);
            }
            DropOutcome::Mismatched => {
                self.score -= 1;
                self.mismatched_drops += 1;
            }
            DropOutcome::NoTarget => {}
        }

        self.events.push(GameEvent::Dropped {
            item: report.item,
            target: report.target,
            outcome: report.outcome,
            score: self.score,
        });
        tracing::debug!(
            item = report.item.0,
            target = ?report.target,
            outcome = ?report.outcome,
            score = self.score,
            "drop resolved"
        );

        if report.outcome == DropOutcome::Matched && round.is_complete() {
            self.events.push(GameEvent::RoundCompleted {
                round: self.round,
                score: self.score,
            });
            tracing::info!(round = self.round, score = self.score, "round complete");
            self.phase = Phase::AwaitingRoundStart;
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();

        out.targets.extend(self.targets.iter().map(|t| TargetView {
            category: t.category,
            label: t.label.clone(),
            bounds: t.bounds,
        }));

        if let Phase::RoundActive(round) = &self.phase {
            let dragged = self.drag.dragged();
            out.items
                .extend(round.active_items().filter_map(|(i, slot)| {
                    Some(ItemView {
                        id: slot.item.id,
                        category: slot.item.category,
                        label: slot.item.label.clone(),
                        bounds: slot.bounds(round.item_size())?,
                        dragged: dragged == Some(i),
                    })
                }));
        }

        out.score = self.score;
        out.round = self.round;
        out.total_rounds = self.config.total_rounds;
        out.finished = self.is_finished();
        out.episode_id = self.episode_id;
        out.matched_drops = self.matched_drops;
        out.mismatched_drops = self.mismatched_drops;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
