//! Node handles of the rendered tab buttons, keyed by route key.
//!
//! Buttons are keyed by route key, so reordering the route list moves the
//! existing nodes instead of remounting them. Handles therefore follow the key,
//! never the position.

use std::collections::HashMap;

use super::route::Route;
use super::tab_bar::{MeasureTicket, TabBarState};

#[derive(Debug, Clone)]
pub struct TabHandles<H> {
    by_key: HashMap<String, H>,
}

impl<H> Default for TabHandles<H> {
    fn default() -> Self {
        Self {
            by_key: HashMap::new(),
        }
    }
}

impl<H: Clone> TabHandles<H> {
    pub fn insert(&mut self, key: impl Into<String>, handle: H) {
        self.by_key.insert(key.into(), handle);
    }

    /// Forget buttons whose route is no longer in `routes`.
    pub fn retain_routes(&mut self, routes: &[Route]) {
        self.by_key
            .retain(|key, _| routes.iter().any(|route| &route.key == key));
    }

    pub fn get(&self, key: &str) -> Option<H> {
        self.by_key.get(key).cloned()
    }

    /// Handle of the button rendering the tab `ticket` was issued for.
    pub fn for_ticket(&self, state: &TabBarState, ticket: MeasureTicket) -> Option<H> {
        state
            .routes()
            .get(ticket.index)
            .and_then(|route| self.get(&route.key))
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
