//! Selection and highlight state for the floating tab bar.
//!
//! Nothing in here touches the renderer. The component drives it in two phases:
//!
//! 1. `select` flips the active index synchronously (cheap, happens in the
//!    click handler).
//! 2. Once the DOM has been laid out, the component asks for a
//!    [`MeasureTicket`], measures the tab the ticket names and hands the result
//!    back through [`TabBarState::apply_measurement`].
//!
//! Measurements are asynchronous and can interleave (selection, resize and the
//! post-mount settle pass). Every one of them writes the same derived
//! [`DotGeometry`], so the latest applicable result wins. A ticket is only
//! applicable while it still names the active tab of the current route list.
//!
//! Changing the active tab or the route list changes the tab weights, and the
//! bar animates to its new layout. [`TabBarState::take_reflow`] tells the
//! component that one more pass is due once that animation is over.

use super::geometry::{DotGeometry, LayoutBox, MeasureError};
use super::route::{default_routes, Route};

/// Visible state of the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// No measurement has succeeded yet.
    Hidden,
    Positioned { index: usize },
}

/// Identifies the tab a measurement was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureTicket {
    pub index: usize,
    epoch: u64,
}

/// What happened to a measurement result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureOutcome {
    Applied,
    /// The active tab or route list changed while measuring.
    Stale,
    /// Measurement failed; previous geometry kept.
    Failed,
    /// The owning component is gone.
    Detached,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabBarState {
    routes: Vec<Route>,
    active_index: usize,
    dot: DotGeometry,
    highlight: Highlight,
    // Bumped whenever the route list is replaced.
    epoch: u64,
    attached: bool,
    // Tab weights changed since the last `take_reflow`.
    reflow_pending: bool,
}

impl TabBarState {
    /// An empty route list falls back to [`default_routes`].
    pub fn new(routes: Vec<Route>) -> Self {
        Self::with_active(routes, 0)
    }

    /// Like [`TabBarState::new`] with an initial selection (clamped into range).
    pub fn with_active(routes: Vec<Route>, active_index: usize) -> Self {
        let routes = if routes.is_empty() {
            default_routes()
        } else {
            routes
        };
        let active_index = active_index.min(routes.len() - 1);
        Self {
            routes,
            active_index,
            dot: DotGeometry::HIDDEN,
            highlight: Highlight::Hidden,
            epoch: 0,
            attached: true,
            reflow_pending: false,
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_route(&self) -> &Route {
        &self.routes[self.active_index]
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == index
    }

    pub fn dot(&self) -> DotGeometry {
        self.dot
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// User picked tab `index`. Returns the route the host callback should
    /// receive; re-selecting the active tab still returns it.
    pub fn select(&mut self, index: usize) -> Option<Route> {
        let route = self.routes.get(index)?.clone();
        if index != self.active_index {
            tracing::debug!(from = self.active_index, to = index, key = %route.key, "tab selected");
            self.reflow_pending = true;
        }
        self.active_index = index;
        Some(route)
    }

    /// Replace the route list. Returns `false` when the list is unchanged.
    ///
    /// The active index is clamped into the new range. Tickets issued for the
    /// old list become stale; the current geometry stays until re-measured.
    pub fn set_routes(&mut self, routes: Vec<Route>) -> bool {
        let routes = if routes.is_empty() {
            default_routes()
        } else {
            routes
        };
        if routes == self.routes {
            return false;
        }
        self.routes = routes;
        self.active_index = self.active_index.min(self.routes.len() - 1);
        self.epoch = self.epoch.wrapping_add(1);
        self.reflow_pending = true;
        if let Highlight::Positioned { index } = self.highlight {
            if index >= self.routes.len() {
                self.highlight = Highlight::Hidden;
                self.dot = DotGeometry::HIDDEN;
            }
        }
        true
    }

    /// Start a measurement of the active tab. `None` once detached.
    pub fn request_measure(&self) -> Option<MeasureTicket> {
        self.attached.then_some(MeasureTicket {
            index: self.active_index,
            epoch: self.epoch,
        })
    }

    pub fn apply_measurement(
        &mut self,
        ticket: MeasureTicket,
        measured: Result<LayoutBox, MeasureError>,
    ) -> MeasureOutcome {
        if !self.attached {
            return MeasureOutcome::Detached;
        }
        if ticket.epoch != self.epoch || ticket.index != self.active_index {
            return MeasureOutcome::Stale;
        }
        let measured = measured.and_then(|b| {
            if b.is_empty() {
                Err(MeasureError::EmptyBox {
                    index: ticket.index,
                })
            } else {
                Ok(b)
            }
        });
        match measured {
            Ok(b) => {
                self.dot = DotGeometry::from_box(b);
                self.highlight = Highlight::Positioned {
                    index: ticket.index,
                };
                MeasureOutcome::Applied
            }
            Err(err) => {
                tracing::trace!(index = ticket.index, %err, "highlight measurement skipped");
                MeasureOutcome::Failed
            }
        }
    }

    /// Whether a measurement is due after the layout animation, clearing the flag.
    pub fn take_reflow(&mut self) -> bool {
        std::mem::take(&mut self.reflow_pending)
    }

    /// Mark the owning component as unmounted. Later results are dropped.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Flex-grow share of tab `index`.
    pub fn weight(&self, index: usize) -> f64 {
        self.routes
            .get(index)
            .map(|route| tab_weight(&route.name, self.is_active(index)))
            .unwrap_or(1.0)
    }
}

impl Default for TabBarState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// The active tab widens with its label so the pill appears to grow around it;
/// inactive tabs share equal weight.
pub fn tab_weight(label: &str, active: bool) -> f64 {
    if !active {
        return 1.0;
    }
    (label.chars().count() as f64 / 8.0 + 0.5).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::Icon;

    fn tab_box(left: f64, width: f64) -> LayoutBox {
        LayoutBox::new(left, 6.0, width, 40.0)
    }

    #[test]
    fn starts_hidden_on_first_tab() {
        let state = TabBarState::default();
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.highlight(), Highlight::Hidden);
        assert_eq!(state.dot().opacity, 0.0);
    }

    #[test]
    fn initial_index_is_clamped() {
        let state = TabBarState::with_active(default_routes(), 9);
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut state = TabBarState::default();
        assert!(state.select(3).is_none());
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn reselecting_active_tab_still_reports_route() {
        let mut state = TabBarState::default();
        let route = state.select(0).expect("in range");
        assert_eq!(route.key, "home");
    }

    #[test]
    fn failed_measurement_keeps_highlight_hidden() {
        let mut state = TabBarState::default();
        let ticket = state.request_measure().unwrap();
        let outcome = state.apply_measurement(ticket, Err(MeasureError::ContainerNotMounted));
        assert_eq!(outcome, MeasureOutcome::Failed);
        assert_eq!(state.highlight(), Highlight::Hidden);
        assert!(!state.dot().is_visible());
    }

    #[test]
    fn empty_box_counts_as_failure() {
        let mut state = TabBarState::default();
        let ticket = state.request_measure().unwrap();
        let outcome = state.apply_measurement(ticket, Ok(LayoutBox::default()));
        assert_eq!(outcome, MeasureOutcome::Failed);
        assert!(!state.dot().is_visible());
    }

    #[test]
    fn failure_after_success_keeps_last_geometry() {
        let mut state = TabBarState::default();
        let ticket = state.request_measure().unwrap();
        state.apply_measurement(ticket, Ok(tab_box(8.0, 96.0)));
        let ticket = state.request_measure().unwrap();
        state.apply_measurement(ticket, Err(MeasureError::Layout("gone".into())));
        assert_eq!(state.dot().left, 8.0);
        assert_eq!(state.highlight(), Highlight::Positioned { index: 0 });
    }

    #[test]
    fn measurement_for_previous_tab_is_stale() {
        let mut state = TabBarState::default();
        let ticket = state.request_measure().unwrap();
        state.select(2);
        let outcome = state.apply_measurement(ticket, Ok(tab_box(8.0, 96.0)));
        assert_eq!(outcome, MeasureOutcome::Stale);
        assert_eq!(state.highlight(), Highlight::Hidden);
    }

    #[test]
    fn ticket_survives_round_trip_selection() {
        let mut state = TabBarState::default();
        let ticket = state.request_measure().unwrap();
        state.select(1);
        state.select(0);
        let outcome = state.apply_measurement(ticket, Ok(tab_box(8.0, 96.0)));
        assert_eq!(outcome, MeasureOutcome::Applied);
    }

    #[test]
    fn replacing_routes_invalidates_tickets_and_clamps() {
        let mut state = TabBarState::with_active(default_routes(), 2);
        let ticket = state.request_measure().unwrap();
        let changed = state.set_routes(vec![
            Route::new("campaigns", "Campaigns", Icon::Megaphone),
            Route::new("users", "Users", Icon::Users),
        ]);
        assert!(changed);
        assert_eq!(state.active_index(), 1);
        assert_eq!(
            state.apply_measurement(ticket, Ok(tab_box(0.0, 10.0))),
            MeasureOutcome::Stale
        );
    }

    #[test]
    fn shrinking_routes_hides_dot_beyond_range() {
        let mut state = TabBarState::with_active(default_routes(), 2);
        let ticket = state.request_measure().unwrap();
        state.apply_measurement(ticket, Ok(tab_box(200.0, 80.0)));
        state.set_routes(vec![Route::new("only", "Only", Icon::Home)]);
        assert_eq!(state.highlight(), Highlight::Hidden);
        assert!(!state.dot().is_visible());
    }

    #[test]
    fn same_routes_are_not_a_change() {
        let mut state = TabBarState::default();
        assert!(!state.set_routes(default_routes()));
        assert!(!state.set_routes(Vec::new()));
    }

    #[test]
    fn selection_change_requests_reflow_once() {
        let mut state = TabBarState::default();
        assert!(!state.take_reflow());
        state.select(1);
        assert!(state.take_reflow());
        assert!(!state.take_reflow());
        // Same tab again: weights unchanged.
        state.select(1);
        assert!(!state.take_reflow());
    }

    #[test]
    fn route_change_requests_reflow() {
        let mut state = TabBarState::default();
        state.set_routes(vec![Route::new("sms", "SMS", Icon::Message)]);
        assert!(state.take_reflow());
        state.set_routes(vec![Route::new("sms", "SMS", Icon::Message)]);
        assert!(!state.take_reflow());
    }

    #[test]
    fn detached_state_ignores_results() {
        let mut state = TabBarState::default();
        let ticket = state.request_measure().unwrap();
        state.detach();
        assert!(state.request_measure().is_none());
        assert_eq!(
            state.apply_measurement(ticket, Ok(tab_box(0.0, 10.0))),
            MeasureOutcome::Detached
        );
        assert!(!state.dot().is_visible());
    }

    #[test]
    fn weights_follow_label_length() {
        assert_eq!(tab_weight("Home", false), 1.0);
        assert_eq!(tab_weight("Home", true), 1.0);
        assert_eq!(tab_weight("Campaigns", true), 9.0 / 8.0 + 0.5);
        // Counted in characters, not bytes.
        assert_eq!(tab_weight("Кампании", true), 1.5);
    }

    #[test]
    fn only_active_tab_is_weighted() {
        let mut state = TabBarState::new(vec![
            Route::new("campaigns", "Campaigns", Icon::Megaphone),
            Route::new("sms", "SMS", Icon::Message),
        ]);
        assert!(state.weight(0) > 1.0);
        assert_eq!(state.weight(1), 1.0);
        state.select(1);
        assert_eq!(state.weight(0), 1.0);
        assert_eq!(state.weight(1), 1.0);
        assert_eq!(state.weight(7), 1.0);
    }
}
