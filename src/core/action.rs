//! Player actions.
//!
//! On each turn the current player takes exactly one of four actions.
//! One-card swaps carry their indices explicitly instead of reading a stored
//! selection.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A turn action.
///
/// ```
/// use schwimmen::core::Action;
///
/// let swap = Action::SwapOne { hand: 0, middle: 2 };
/// assert!(swap.is_swap());
/// assert!(!Action::Pass.is_swap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// End the swapping phase; everyone else gets one more turn.
    Knock,
    /// Do nothing this turn.
    Pass,
    /// Exchange one hand card with one middle card.
    SwapOne { hand: usize, middle: usize },
    /// Exchange the whole hand with the middle, position for position.
    SwapAll,
}

impl Action {
    /// Whether this action exchanges cards with the middle.
    #[must_use]
    pub const fn is_swap(self) -> bool {
        matches!(self, Action::SwapOne { .. } | Action::SwapAll)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Knock => f.write_str("knock"),
            Action::Pass => f.write_str("pass"),
            Action::SwapOne { hand, middle } => {
                write!(f, "swap hand[{hand}] with middle[{middle}]")
            }
            Action::SwapAll => f.write_str("swap all"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self { player, action, turn }
    }
}
