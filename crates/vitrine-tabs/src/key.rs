//! Keyboard input model
//!
//! The host application translates raw key events into these values.
//! Enter/Space activate; the arrow keys move focus only, so a user can
//! walk the strip without switching panels until they commit.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
}

/// What a key press did to the tab set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// The focused tab was activated.
    Activated(usize),
    /// Focus moved to the tab at this index; the active panel is unchanged.
    FocusMoved(usize),
    /// No tab had focus, so the key was not handled.
    Ignored,
}
