//! Per-session state.
//!
//! A `Session` owns the navigation state and the interaction counter for
//! one user. Sessions share nothing, so a server can hold one per client
//! and a handler can own it exclusively for the duration of a request.

use crate::NavigationController;

#[derive(Clone, Debug, Default)]
pub struct Session {
    navigation: NavigationController,
    interactions: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationController {
        &mut self.navigation
    }

    /// Count one interaction (a page render) and return the new total
    pub fn record_interaction(&mut self) -> u64 {
        self.interactions += 1;
        self.interactions
    }

    pub fn interaction_count(&self) -> u64 {
        self.interactions
    }
}
