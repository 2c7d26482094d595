use dioxus::prelude::*;

use crate::core::route::Icon;

/// Outline path data (24×24 viewBox) for each tab icon.
fn icon_path(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "M3 11l9-8 9 8M5 10v10h5v-6h4v6h5V10",
        Icon::Globe => "M12 3a9 9 0 100 18 9 9 0 000-18zM3 12h18M12 3c3 3.5 3 14.5 0 18M12 3c-3 3.5-3 14.5 0 18",
        Icon::Card => "M3 6h18v12H3zM3 10h18M7 15h4",
        Icon::Megaphone => "M4 10v4h3l8 4V6L7 10zM18 9a3 3 0 010 6M7 14l1 5h3l-1-4",
        Icon::Message => "M4 5h16v11H9l-5 4z",
        Icon::Users => "M9 11a4 4 0 100-8 4 4 0 000 8zM2 21a7 7 0 0114 0M17 11a3 3 0 100-6M18 21h4a6 6 0 00-5-6",
    }
}

#[component]
pub fn TabIcon(icon: Icon) -> Element {
    rsx! {
        svg {
            class: "tab-bar__icon",
            view_box: "0 0 24 24",
            width: "20",
            height: "20",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: icon_path(icon) }
        }
    }
}
