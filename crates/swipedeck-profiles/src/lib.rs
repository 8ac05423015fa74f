//! Profile deck and discovery-screen state for Swipedeck
//!
//! The discovery screen shows a stack of profile cards; only the topmost
//! card is interactive. This crate owns that screen-local state: the
//! profile records, the deck that advances as decisions land, the journal
//! of decisions taken, and the session type that ties a deck to a
//! [`SwipeController`](swipedeck_core::SwipeController).

mod deck;
mod profile;
mod session;

pub use deck::{CardDeck, DeckError, DecisionJournal};
pub use profile::{sample_profiles, Interest, Profile, ProfileId};
pub use session::DiscoverSession;
