//! Discovery session: one deck, one gesture controller.

use swipedeck_core::{CardPose, SwipeConfig, SwipeController, SwipeDecision, SwipeRelease};

use crate::{CardDeck, DeckError, DecisionJournal, Profile};

/// Screen-local state of the discovery screen.
///
/// Couples a [`CardDeck`] to the [`SwipeController`] driving the top card.
/// When a release commits, the session records the decision, advances the
/// deck, and resets the controller so the newly exposed card is
/// immediately interactive; the fly-off animation of the departing card
/// belongs to the render layer and keeps playing independently.
pub struct DiscoverSession {
    controller: SwipeController,
    deck: CardDeck,
}

impl DiscoverSession {
    pub fn new(config: SwipeConfig, profiles: impl IntoIterator<Item = Profile>) -> Self {
        Self {
            controller: SwipeController::new(config),
            deck: CardDeck::new(profiles),
        }
    }

    pub fn top_profile(&self) -> Option<&Profile> {
        self.deck.top_profile()
    }

    pub fn remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn journal(&self) -> &DecisionJournal {
        self.deck.journal()
    }

    pub fn gesture_start(&mut self) -> Result<(), DeckError> {
        if self.deck.is_exhausted() {
            return Err(DeckError::Exhausted);
        }
        self.controller.gesture_start()?;
        Ok(())
    }

    pub fn gesture_update(&mut self, delta_x: f32, delta_y: f32) -> Result<CardPose, DeckError> {
        Ok(self.controller.gesture_update(delta_x, delta_y)?)
    }

    pub fn gesture_end(
        &mut self,
        final_delta_x: f32,
        final_delta_y: f32,
        velocity_x: f32,
    ) -> Result<SwipeRelease, DeckError> {
        let release = self
            .controller
            .gesture_end(final_delta_x, final_delta_y, velocity_x)?;
        self.settle_release(&release)?;
        Ok(release)
    }

    pub fn gesture_cancel(&mut self) -> Result<SwipeRelease, DeckError> {
        Ok(self.controller.gesture_cancel()?)
    }

    /// The X action button: dismiss the top card.
    pub fn press_pass(&mut self) -> Result<SwipeRelease, DeckError> {
        self.press(SwipeDecision::Pass)
    }

    /// The check action button: like the top card.
    pub fn press_like(&mut self) -> Result<SwipeRelease, DeckError> {
        self.press(SwipeDecision::Like)
    }

    /// The star action button: super-like the top card.
    pub fn press_super_like(&mut self) -> Result<SwipeRelease, DeckError> {
        self.press(SwipeDecision::SuperLike)
    }

    fn press(&mut self, decision: SwipeDecision) -> Result<SwipeRelease, DeckError> {
        if self.deck.is_exhausted() {
            return Err(DeckError::Exhausted);
        }
        let release = self.controller.commit(decision)?;
        self.settle_release(&release)?;
        Ok(release)
    }

    fn settle_release(&mut self, release: &SwipeRelease) -> Result<(), DeckError> {
        if release.decision.is_commit() {
            self.deck.apply(release.decision)?;
            self.controller.reset();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
