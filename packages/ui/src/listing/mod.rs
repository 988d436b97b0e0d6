//! Paginated listings: a pure state machine plus the hook that drives it.

mod controller;
mod debounce;
mod hook;

pub use controller::{
    CommitOutcome, ListingController, ListingPhase, Navigation, PendingFetch,
};
pub use debounce::Debouncer;
pub use hook::{use_listing, Listing};
