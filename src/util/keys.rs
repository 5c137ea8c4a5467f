//! Keyboard handling for the message input.
//!
//! Enter alone submits; Shift+Enter keeps the textarea's own newline.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Prevent the default and submit, same as clicking send.
    Submit,
    /// Leave the event to the browser.
    PassThrough,
}

/// Decide what a `keydown` in the message input does.
pub fn key_action(key: &str, shift: bool) -> KeyAction {
    if key == "Enter" && !shift {
        KeyAction::Submit
    } else {
        KeyAction::PassThrough
    }
}
