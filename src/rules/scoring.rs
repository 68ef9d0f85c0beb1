//! Hand scoring and final ranking.
//!
//! A hand scores the highest total of card points held in a single suit.
//! Three cards of the same rank score a flat 30.5, which beats every
//! single-suit total except 31 (ace plus two ten-valued cards).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Hand, Player, PlayerId, Suit};

/// Score for three cards of the same rank, regardless of suits.
pub const THREE_OF_A_KIND_SCORE: f64 = 30.5;

/// Score a three-card hand.
///
/// ```
/// use schwimmen::core::{Card, Rank, Suit};
/// use schwimmen::rules::scoring::hand_score;
///
/// let hand = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::King),
///     Card::new(Suit::Clubs, Rank::Seven),
/// ];
/// assert_eq!(hand_score(&hand), 21.0);
/// ```
#[must_use]
pub fn hand_score(hand: &Hand) -> f64 {
    let [a, b, c] = hand;
    if a.rank == b.rank && b.rank == c.rank {
        return THREE_OF_A_KIND_SCORE;
    }

    let mut by_suit: FxHashMap<Suit, u32> = FxHashMap::default();
    for card in hand {
        *by_suit.entry(card.suit).or_insert(0) += card.points();
    }

    f64::from(by_suit.values().copied().max().unwrap_or(0))
}

/// Score a player's current hand.
#[must_use]
pub fn calculate_score(player: &Player) -> f64 {
    hand_score(&player.hand)
}

/// Final scores of an ended game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    /// Scores in seat order.
    pub scores: Vec<f64>,
    /// Highest-scoring seat. Ties go to the earlier seat.
    pub winner: PlayerId,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// The winner's score.
    #[must_use]
    pub fn winning_score(&self) -> f64 {
        self.scores.get(self.winner.index()).copied().unwrap_or(0.0)
    }

    /// Seats ordered best score first; equal scores keep seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<PlayerId> {
        let mut seats: Vec<PlayerId> = PlayerId::all(self.scores.len()).collect();
        seats.sort_by(|a, b| self.scores[b.index()].total_cmp(&self.scores[a.index()]));
        seats
    }
}

/// Pick the winner from seat-ordered scores.
#[must_use]
pub fn rank(scores: Vec<f64>) -> GameResult {
    let winner = scores
        .iter()
        .enumerate()
        .fold(0, |best, (i, &score)| if score > scores[best] { i } else { best });

    GameResult {
        winner: PlayerId::new(winner as u8),
        scores,
    }
}
