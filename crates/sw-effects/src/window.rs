//! Window open/closed state.

use std::fmt;

/// Whether the window is open.  Starts closed.
///
/// Changed only by operator commands; the simulation never opens or closes
/// the window on its own, even while a warning is up.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    open: bool,
}

impl WindowState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        if self.open != open {
            tracing::debug!(open, "window state changed");
        }
        self.open = open;
    }

    /// Flip the window and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.set_open(!self.open);
        self.open
    }
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.open { "open" } else { "closed" })
    }
}
