//! Client-side widget state.
//!
//! DESIGN
//! ======
//! State is plain data with no DOM or network access so the turn lifecycle
//! can be exercised natively; the component wraps it in an `RwSignal`.

pub mod chat;
