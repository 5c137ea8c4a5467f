//! Utility helpers for the widget UI.

pub mod keys;
