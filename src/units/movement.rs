//! The move action.

use tracing::debug;

use crate::board::Position;
use crate::core::{GameAction, GameState, PlayError, UnitId};
use crate::presentation::{Command, Pace, Presenter, UnitAnimation};
use crate::range;

/// Move `unit` to `to` for the current player.
///
/// Sets the `unit_moving` guard for the duration of the move. When the
/// front end acknowledges moves (`await_move_ack`), the guard stays set
/// until it reports the unit has stopped.
pub fn move_unit(
    state: &mut GameState,
    out: &mut Presenter<'_>,
    unit: UnitId,
    to: Position,
) -> Result<(), PlayError> {
    let from = match state.unit(unit) {
        Some(u) if u.owner == state.current_player => u.position,
        Some(u) => return Err(PlayError::NotYourTurn(u.owner)),
        None => return Err(PlayError::InvalidTarget("no such unit")),
    };
    if !range::can_move(state, unit) || !range::movable_tiles(state, unit).contains(&to) {
        return Err(PlayError::IllegalTile(to));
    }

    state.guards.unit_moving = Some(unit);
    state.relocate(unit, to);
    if let Some(u) = state.unit_mut(unit) {
        u.moves += 1;
    }

    out.animate(unit, UnitAnimation::Move);
    out.emit(Command::MoveUnit { unit, from, to });
    out.pause(Pace::Animation);
    debug!(unit = %unit, from = %from, to = %to, "unit moved");

    state.record(GameAction::Move { unit, from, to });
    if !state.config.await_move_ack {
        state.guards.unit_moving = None;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, PlayerId};
    use crate::presentation::RecordingSink;
    use crate::units::Unit;

    fn pos(x: u8, y: u8) -> Position {
        Position::new_unchecked(x, y)
    }

    fn setup(config: GameConfig) -> (GameState, UnitId) {
        let mut state = GameState::new(config, 5);
        let id = state.alloc_unit_id();
        let mut unit = Unit::new(id, "Walker", "w", PlayerId::ONE, 1, 2);
        unit.reset_turn_status();
        state.spawn(unit, pos(3, 2));
        (state, id)
    }

    #[test]
    fn test_move_updates_tile_and_unit() {
        let (mut state, id) = setup(GameConfig::default());
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        move_unit(&mut state, &mut out, id, pos(5, 2)).unwrap();

        assert!(state.board.is_empty(pos(3, 2)));
        assert_eq!(state.board.occupant(pos(5, 2)), Some(id));
        assert_eq!(state.unit(id).unwrap().position, pos(5, 2));
        assert_eq!(state.guards.unit_moving, None);
        assert!(!range::can_move(&state, id));
    }

    #[test]
    fn test_second_move_rejected() {
        let (mut state, id) = setup(GameConfig::default());
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        move_unit(&mut state, &mut out, id, pos(4, 2)).unwrap();
        assert_eq!(
            move_unit(&mut state, &mut out, id, pos(5, 2)),
            Err(PlayError::IllegalTile(pos(5, 2)))
        );
        assert_eq!(state.unit(id).unwrap().position, pos(4, 2));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let (mut state, id) = setup(GameConfig::default());
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        assert!(move_unit(&mut state, &mut out, id, pos(6, 2)).is_err());
        assert_eq!(state.unit(id).unwrap().moves, 0);
    }

    #[test]
    fn test_move_ack_keeps_guard() {
        let (mut state, id) = setup(GameConfig::default().with_move_ack(true));
        let mut sink = RecordingSink::new();
        let mut out = Presenter::instant(&mut sink);

        move_unit(&mut state, &mut out, id, pos(3, 3)).unwrap();
        assert_eq!(state.guards.unit_moving, Some(id));

        let other = state.avatars[PlayerId::ONE];
        assert!(!state.guards.acknowledge_move(other));
        assert_eq!(state.guards.unit_moving, Some(id));
        assert!(state.guards.acknowledge_move(id));
        assert!(!state.guards.any());
    }
}
