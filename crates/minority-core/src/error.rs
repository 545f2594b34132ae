//! Game Errors

use minority_events::UnknownRegime;
use thiserror::Error;

/// Errors raised by the round evaluator and trial runner.
///
/// Every decision is total over valid input, so the only failure is a caller
/// naming a regime that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    UnknownRegime(#[from] UnknownRegime),
}
