use rand::Rng;
use thiserror::Error;

use crate::core::RulesError;
use crate::session::Session;
use crate::types::GameAction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("could not rotate to target rotation")]
    RotationBlocked,
    #[error("could not move to target x due to collision")]
    XBlocked,
    #[error("game is not playable")]
    NotPlayable,
    #[error("no active piece")]
    NoActive,
    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// Rotate the active piece `rotations` times clockwise, slide it to
/// `target_x` and hard-drop it.
///
/// Either the whole placement happens or the session is left as it was.
pub fn apply_place<R: Rng + Clone>(
    session: &mut Session<R>,
    target_x: i8,
    rotations: u8,
) -> Result<(), PlaceError> {
    if !session.playable() {
        return Err(PlaceError::NotPlayable);
    }
    if session.active().is_none() {
        return Err(PlaceError::NoActive);
    }

    let before = session.clone();
    let result = place_steps(session, target_x, rotations);
    if result.is_err() {
        *session = before;
    }
    result
}

fn place_steps<R: Rng>(
    session: &mut Session<R>,
    target_x: i8,
    rotations: u8,
) -> Result<(), PlaceError> {
    for _ in 0..rotations % 4 {
        if !session.apply_action(GameAction::Rotate)? {
            return Err(PlaceError::RotationBlocked);
        }
    }

    let Some(active) = session.active() else {
        return Err(PlaceError::NoActive);
    };

    let dx = i16::from(target_x) - i16::from(active.position.x);
    let step = if dx > 0 {
        GameAction::MoveRight
    } else {
        GameAction::MoveLeft
    };
    for _ in 0..dx.unsigned_abs() {
        if !session.apply_action(step)? {
            return Err(PlaceError::XBlocked);
        }
    }

    session.apply_action(GameAction::HardDrop)?;
    Ok(())
}
