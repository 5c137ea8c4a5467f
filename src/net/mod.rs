//! Networking modules for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single POST per turn, `error` collapses every way that
//! call can fail into one type, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
