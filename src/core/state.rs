//! Game state: the aggregate every operation threads through.
//!
//! ## Ownership
//!
//! `GameState` owns every unit. The board's tiles only store ids, and the
//! live-unit list is an `im::Vector<UnitId>` so trigger broadcasts can take
//! an O(1) snapshot before they start mutating anything.
//!
//! ## Invariants
//!
//! - A live unit's `position` names a tile whose occupant is that unit.
//!   `spawn`, `relocate` and `detach` are the only places that change
//!   either side, and each changes both.
//! - A player's `health` equals their avatar's health (see
//!   `sync_player_health`).
//! - `hand.len() <= config.hand_limit`.

use std::collections::BTreeSet;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, GameAction};
use super::config::GameConfig;
use super::entity::UnitId;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::{Board, Position};
use crate::cards::catalog::AVATAR_TEMPLATES;
use crate::cards::CardId;
use crate::units::Unit;

// === Player State ===

/// Per-seat resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub mana: u32,
    /// Mirror of the avatar's health.
    pub health: u32,
    /// Cards in hand, slot 1 first.
    pub hand: Vec<CardId>,
    /// Remaining deck, top card first.
    pub deck: Vector<CardId>,
}

/// What a draw attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn(CardId),
    HandFull,
    DeckEmpty,
}

// === Interaction State ===

/// A card picked from hand, awaiting a target tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCard {
    /// 0-based hand index.
    pub index: usize,
    pub card: CardId,
}

/// Current UI selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub card: Option<SelectedCard>,
    pub unit: Option<UnitId>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.card = None;
        self.unit = None;
    }
}

/// The legality sets behind the current highlights.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSets {
    pub summonable: BTreeSet<Position>,
    pub movable: BTreeSet<Position>,
    pub attackable: BTreeSet<Position>,
}

impl HighlightSets {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summonable.is_empty() && self.movable.is_empty() && self.attackable.is_empty()
    }

    /// Every highlighted position, without duplicates.
    #[must_use]
    pub fn all(&self) -> BTreeSet<Position> {
        self.summonable
            .iter()
            .chain(&self.movable)
            .chain(&self.attackable)
            .copied()
            .collect()
    }
}

/// Re-entrancy guards. Input arriving while any is set is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guards {
    pub unit_acting: bool,
    /// The unit whose move the front end has not yet acknowledged.
    pub unit_moving: Option<UnitId>,
    pub ai_acting: bool,
}

impl Guards {
    #[must_use]
    pub fn any(&self) -> bool {
        self.unit_acting || self.unit_moving.is_some() || self.ai_acting
    }

    /// Clear the move guard if `unit` is the one moving. Returns whether
    /// it was cleared.
    pub fn acknowledge_move(&mut self, unit: UnitId) -> bool {
        if self.unit_moving == Some(unit) {
            self.unit_moving = None;
            true
        } else {
            false
        }
    }
}

/// How the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(PlayerId),
    /// Both avatars fell in the same resolution.
    Draw,
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,

    pub board: Board,

    pub players: PlayerMap<Player>,

    /// Units on the board, by id.
    units: FxHashMap<UnitId, Unit>,

    /// Board units in summon order.
    live: Vector<UnitId>,

    /// Units that have left the board, with their final stats.
    fallen: FxHashMap<UnitId, Unit>,

    pub avatars: PlayerMap<UnitId>,

    pub current_player: PlayerId,

    /// Starts at 1; increments when play returns to player 1.
    pub turn: u32,

    pub selection: Selection,

    pub highlights: HighlightSets,

    pub guards: Guards,

    /// Deterministic RNG.
    pub rng: GameRng,

    pub result: Option<GameResult>,

    history: Vector<ActionRecord>,

    action_sequence: u32,

    next_unit_id: u32,
}

impl GameState {
    /// Create a state with both avatars on their starting tiles, empty
    /// hands and decks, and player 1 to act on turn 1.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let board = Board::new(&config.layout);
        let players = PlayerMap::new(|_| Player {
            health: config.avatar_health,
            ..Player::default()
        });

        let mut state = Self {
            board,
            players,
            units: FxHashMap::default(),
            live: Vector::new(),
            fallen: FxHashMap::default(),
            avatars: PlayerMap::new(|p| UnitId::avatar(p.index() as u8)),
            current_player: PlayerId::ONE,
            turn: 1,
            selection: Selection::default(),
            highlights: HighlightSets::default(),
            guards: Guards::default(),
            rng: GameRng::new(seed),
            result: None,
            history: Vector::new(),
            action_sequence: 0,
            next_unit_id: UnitId::FIRST_SUMMONED,
            config,
        };

        for player in PlayerId::both() {
            let avatar = Unit::new(
                state.avatars[player],
                "Avatar",
                AVATAR_TEMPLATES[player.index()],
                player,
                state.config.avatar_attack,
                state.config.avatar_health,
            )
            .as_avatar(player);
            let tile = state.config.avatar_tiles[player];
            state.spawn(avatar, tile);
        }
        state.players[PlayerId::ONE].mana = state.turn + 1;

        state
    }

    // === Units ===

    /// Allocate a fresh unit id.
    pub fn alloc_unit_id(&mut self) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        id
    }

    /// Put `unit` on `at` and append it to the live list.
    ///
    /// Returns `None` without changing anything if the tile is taken.
    pub fn spawn(&mut self, mut unit: Unit, at: Position) -> Option<UnitId> {
        let id = unit.id;
        if !self.board.place(at, id) {
            return None;
        }
        unit.place_at(at, self.board.tile(at).pixel);
        self.units.insert(id, unit);
        self.live.push_back(id);
        Some(id)
    }

    /// Move a unit between tiles, updating both sides together.
    pub fn relocate(&mut self, id: UnitId, to: Position) -> bool {
        let Some(from) = self.units.get(&id).map(|u| u.position) else {
            return false;
        };
        if !self.board.is_empty(to) {
            return false;
        }
        self.board.vacate(from);
        self.board.place(to, id);
        let pixel = self.board.tile(to).pixel;
        if let Some(unit) = self.units.get_mut(&id) {
            unit.place_at(to, pixel);
        }
        true
    }

    /// Take a unit off the board: clear its tile, drop it from the live
    /// list and keep its final record. Removing an avatar decides the game.
    ///
    /// Final records are kept for the rest of the game; at most a few dozen
    /// units are ever summoned, so `fallen` is never pruned.
    pub fn detach(&mut self, id: UnitId) -> Option<&Unit> {
        let unit = self.units.remove(&id)?;
        if self.board.occupant(unit.position) == Some(id) {
            self.board.vacate(unit.position);
        }
        if let Some(index) = self.live.index_of(&id) {
            self.live.remove(index);
        }
        if let Some(owner) = unit.avatar_of {
            self.result = match self.result {
                None => Some(GameResult::Winner(owner.opponent())),
                Some(_) => Some(GameResult::Draw),
            };
        }
        self.fallen.insert(id, unit);
        self.fallen.get(&id)
    }

    /// A unit currently on the board.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    /// A unit that has left the board.
    #[must_use]
    pub fn fallen(&self, id: UnitId) -> Option<&Unit> {
        self.fallen.get(&id)
    }

    /// The unit standing on `pos`.
    #[must_use]
    pub fn unit_at(&self, pos: Position) -> Option<&Unit> {
        self.board.occupant(pos).and_then(|id| self.units.get(&id))
    }

    /// O(1) snapshot of the live list.
    #[must_use]
    pub fn live_units(&self) -> Vector<UnitId> {
        self.live.clone()
    }

    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.live.len()
    }

    /// Live units, in summon order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.live.iter().filter_map(move |id| self.units.get(id))
    }

    /// Live units owned by `player`, in summon order.
    pub fn units_of(&self, player: PlayerId) -> impl Iterator<Item = &Unit> {
        self.units().filter(move |u| u.owner == player)
    }

    #[must_use]
    pub fn avatar(&self, player: PlayerId) -> Option<&Unit> {
        self.unit(self.avatars[player])
    }

    /// Copy an avatar's health onto its player.
    pub fn sync_player_health(&mut self, id: UnitId) -> Option<(PlayerId, u32)> {
        let unit = self.units.get(&id)?;
        let player = unit.avatar_of?;
        self.players[player].health = unit.health;
        Some((player, unit.health))
    }

    // === Turn ===

    #[must_use]
    pub fn is_ai(&self, player: PlayerId) -> bool {
        self.config.is_ai(player)
    }

    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        self.is_ai(self.current_player)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    // === Hands and Decks ===

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[CardId] {
        &self.players[player].hand
    }

    pub fn set_deck(&mut self, player: PlayerId, cards: impl IntoIterator<Item = CardId>) {
        self.players[player].deck = cards.into_iter().collect();
    }

    #[must_use]
    pub fn deck_size(&self, player: PlayerId) -> usize {
        self.players[player].deck.len()
    }

    /// Shuffle a player's deck with the game RNG.
    pub fn shuffle_deck(&mut self, player: PlayerId) {
        let mut cards: Vec<CardId> = self.players[player].deck.iter().copied().collect();
        self.rng.shuffle(&mut cards);
        self.players[player].deck = cards.into_iter().collect();
    }

    /// Move the top card of the deck into the hand.
    ///
    /// A full hand or empty deck changes nothing.
    pub fn draw_card(&mut self, player: PlayerId) -> DrawOutcome {
        let limit = self.config.hand_limit;
        let seat = &mut self.players[player];
        if seat.hand.len() >= limit {
            return DrawOutcome::HandFull;
        }
        match seat.deck.pop_front() {
            Some(card) => {
                seat.hand.push(card);
                DrawOutcome::Drawn(card)
            }
            None => DrawOutcome::DeckEmpty,
        }
    }

    // === Action History ===

    /// Record an action by the current player.
    pub fn record(&mut self, action: GameAction) {
        let record = ActionRecord::new(self.current_player, action, self.turn, self.action_sequence);
        self.action_sequence += 1;
        self.history.push_back(record);
    }

    /// Reset the per-turn sequence counter.
    pub fn start_turn_sequence(&mut self) {
        self.action_sequence = 0;
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}
