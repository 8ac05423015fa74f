//! Card deck state for the discovery screen.

use indexmap::IndexMap;
use swipedeck_core::{GestureError, SwipeDecision};

use crate::{Profile, ProfileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    /// Every profile has been decided on; nothing left to show.
    Exhausted,
    /// The underlying gesture controller rejected the event.
    Gesture(GestureError),
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::Exhausted => write!(f, "deck exhausted"),
            DeckError::Gesture(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DeckError {}

impl From<GestureError> for DeckError {
    fn from(err: GestureError) -> Self {
        DeckError::Gesture(err)
    }
}

/// Insertion-ordered record of every decision taken this session.
pub type DecisionJournal = IndexMap<ProfileId, SwipeDecision>;

/// The stack of profiles behind the discovery screen.
///
/// Profiles keep their insertion order; the cursor marks the topmost
/// (interactive) card. Committed decisions advance the cursor and are
/// recorded in the journal. `None` decisions leave the deck untouched.
pub struct CardDeck {
    profiles: IndexMap<ProfileId, Profile>,
    cursor: usize,
    journal: DecisionJournal,
}

impl CardDeck {
    pub fn new(profiles: impl IntoIterator<Item = Profile>) -> Self {
        Self {
            profiles: profiles.into_iter().map(|p| (p.id, p)).collect(),
            cursor: 0,
            journal: DecisionJournal::new(),
        }
    }

    /// The interactive top card, if any profiles remain.
    pub fn top_profile(&self) -> Option<&Profile> {
        self.profiles.get_index(self.cursor).map(|(_, p)| p)
    }

    /// Profiles not yet decided on, including the top card.
    pub fn remaining(&self) -> usize {
        self.profiles.len().saturating_sub(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn journal(&self) -> &DecisionJournal {
        &self.journal
    }

    /// Records a decision for the top card and advances past it.
    ///
    /// A `None` decision is a no-op: the card sprang back and stays on
    /// top. Returns the newly exposed profile, if one remains.
    pub fn apply(&mut self, decision: SwipeDecision) -> Result<Option<&Profile>, DeckError> {
        let top = self
            .profiles
            .get_index(self.cursor)
            .map(|(id, p)| (*id, p.name.clone()))
            .ok_or(DeckError::Exhausted)?;

        if decision.is_commit() {
            self.journal.insert(top.0, decision);
            self.cursor += 1;
            log::debug!(
                "decided {decision} on {} ({} remaining)",
                top.1,
                self.remaining()
            );
        }

        Ok(self.top_profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_profiles;

    #[test]
    fn commits_advance_and_journal() {
        let mut deck = CardDeck::new(sample_profiles());
        assert_eq!(deck.remaining(), 5);
        assert_eq!(deck.top_profile().unwrap().name, "Sarah");

        let next = deck.apply(SwipeDecision::Like).unwrap();
        assert_eq!(next.unwrap().name, "Mike");
        assert_eq!(deck.remaining(), 4);
        assert_eq!(deck.journal().get(&1), Some(&SwipeDecision::Like));
    }

    #[test]
    fn none_decision_keeps_the_top_card() {
        let mut deck = CardDeck::new(sample_profiles());
        let top = deck.apply(SwipeDecision::None).unwrap();
        assert_eq!(top.unwrap().name, "Sarah");
        assert!(deck.journal().is_empty());
    }

    #[test]
    fn exhausted_deck_reports_an_error() {
        let mut deck = CardDeck::new(sample_profiles().into_iter().take(1));
        deck.apply(SwipeDecision::Pass).unwrap();
        assert!(deck.is_exhausted());
        assert_eq!(deck.apply(SwipeDecision::Like), Err(DeckError::Exhausted));
    }

    #[test]
    fn journal_preserves_decision_order() {
        let mut deck = CardDeck::new(sample_profiles());
        deck.apply(SwipeDecision::Pass).unwrap();
        deck.apply(SwipeDecision::Like).unwrap();
        deck.apply(SwipeDecision::SuperLike).unwrap();

        let order: Vec<_> = deck.journal().keys().copied().collect();
        assert_eq!(order, vec![1, 2, 3]);
    }
}
