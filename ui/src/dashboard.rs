//! Dashboard sections shown in the tab bar.

use crate::core::route::{Icon, Route};
use crate::t;

pub const CAMPAIGNS: &str = "campaigns";
pub const MESSAGES: &str = "messages";
pub const USERS: &str = "users";

/// Tab routes for the dashboard, labelled in the active language.
pub fn dashboard_routes() -> Vec<Route> {
    crate::i18n::init();
    vec![
        Route::new(CAMPAIGNS, t!("tab-campaigns"), Icon::Megaphone),
        Route::new(MESSAGES, t!("tab-messages"), Icon::Message),
        Route::new(USERS, t!("tab-users"), Icon::Users),
    ]
}

/// Position of the section `key` in [`dashboard_routes`].
pub fn section_index(key: &str) -> Option<usize> {
    [CAMPAIGNS, MESSAGES, USERS].iter().position(|k| *k == key)
}
