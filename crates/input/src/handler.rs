//! Soft-drop key tracking for terminal environments.
//!
//! Many terminals never report key releases, only presses and auto-repeats.
//! The latch turns a held down key into one `SoftDropBegin` per press or
//! repeat, and synthesizes the `SoftDropEnd` that a release would have sent
//! once repeats stop arriving.

use crate::types::{Command, SOFT_DROP_RELEASE_MS};

/// Tracks whether the down key is held.
#[derive(Debug, Clone)]
pub struct SoftDropLatch {
    held: bool,
    /// Time since the last press or repeat while held.
    since_last_press_ms: u32,
    release_timeout_ms: u32,
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self::with_release_timeout_ms(SOFT_DROP_RELEASE_MS)
    }

    pub fn with_release_timeout_ms(release_timeout_ms: u32) -> Self {
        Self {
            held: false,
            since_last_press_ms: 0,
            release_timeout_ms,
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Down key pressed or repeated.
    pub fn press(&mut self) -> Command {
        self.held = true;
        self.since_last_press_ms = 0;
        Command::SoftDropBegin
    }

    /// Down key released. Returns `SoftDropEnd` only if it was held.
    pub fn release(&mut self) -> Option<Command> {
        if !self.held {
            return None;
        }
        self.held = false;
        self.since_last_press_ms = 0;
        Some(Command::SoftDropEnd)
    }

    /// Advance the latch clock; releases the key after the timeout.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Command> {
        if !self.held {
            return None;
        }
        self.since_last_press_ms = self.since_last_press_ms.saturating_add(elapsed_ms);
        if self.since_last_press_ms > self.release_timeout_ms {
            return self.release();
        }
        None
    }

    /// Route a mapped command through the latch.
    ///
    /// Soft-drop commands update the held state; a release for a key that is
    /// not held is dropped. Everything else passes through.
    pub fn filter(&mut self, command: Command) -> Option<Command> {
        match command {
            Command::SoftDropBegin => Some(self.press()),
            Command::SoftDropEnd => self.release(),
            other => Some(other),
        }
    }
}
