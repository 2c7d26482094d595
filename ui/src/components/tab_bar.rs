//! Floating pill-shaped tab bar with a sliding highlight.
//!
//! Selection is applied synchronously in the click handler. The highlight is
//! positioned in a second phase: a post-render effect (and the resize / settle
//! triggers) push a [`Trigger`] into a coroutine, which measures the active
//! button against the bar and writes the result back into [`TabBarState`].
//!
//! A new selection or route list also animates the tab widths. The post-render
//! pass sees the first frame of that animation, so another pass follows when the
//! `flex-grow` transition ends, with a timer fallback for when no
//! `transitionend` arrives (reduced motion, interrupted animation).
//!
//! Host usage:
//! ```ignore
//! rsx! {
//!     TabBar {
//!         config: TabBarConfig::default(),
//!         routes: dashboard_routes(),
//!         on_select: move |route: Route| tracing::info!(key = %route.key, "picked"),
//!     }
//! }
//! ```
use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::icons::TabIcon;
use crate::core::config::TabBarConfig;
use crate::core::geometry::{LayoutBox, MeasureError};
use crate::core::handles::TabHandles;
use crate::core::route::{default_routes, Route};
use crate::core::tab_bar::TabBarState;
use crate::core::timing;
use crate::core::viewport::ResizeSubscription;
use crate::t;

const TAB_BAR_CSS: Asset = asset!("/assets/styling/tab_bar.css");
const TAB_BAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/tab_bar.css"
));

/// Why a highlight pass was requested (only used for tracing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Rendered,
    Resize,
    Settle,
    RoutesChanged,
    Transition,
}

#[component]
pub fn TabBar(
    #[props(default)] config: TabBarConfig,
    #[props(default = default_routes())] routes: Vec<Route>,
    #[props(default)] initial_index: usize,
    on_select: Option<EventHandler<Route>>,
) -> Element {
    let mut state = use_signal(|| TabBarState::with_active(routes.clone(), initial_index));
    let mut tab_handles = use_signal(TabHandles::<Rc<MountedData>>::default);
    let mut container = use_signal(|| Option::<Rc<MountedData>>::None);

    let settle_task: Rc<RefCell<Option<Task>>> = use_hook(|| Rc::new(RefCell::new(None)));
    let resize_sub: Rc<RefCell<Option<ResizeSubscription>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    let measurer = use_coroutine(move |mut rx: UnboundedReceiver<Trigger>| {
        let mut state = state;
        async move {
            while let Some(trigger) = rx.next().await {
                let Some(ticket) = state.peek().request_measure() else {
                    break;
                };
                let tab = tab_handles.peek().for_ticket(&state.peek(), ticket);
                let outer = container.peek().clone();
                let measured = measure_tab(outer, tab, ticket.index).await;
                let outcome = state.with_mut(|s| s.apply_measurement(ticket, measured));
                tracing::trace!(?trigger, index = ticket.index, ?outcome, "highlight pass");
            }
        }
    });

    // Delayed pass; a newer request replaces a pending one.
    let schedule_settle = use_callback({
        let settle_task = settle_task.clone();
        move |delay_ms: u64| {
            let task = spawn(async move {
                timing::sleep_ms(delay_ms).await;
                measurer.send(Trigger::Settle);
            });
            if let Some(previous) = settle_task.borrow_mut().replace(task) {
                previous.cancel();
            }
        }
    });
    let reflow_delay_ms = config.reflow_delay_ms();

    // Runs after every render that changed the active tab, once the DOM reflects it.
    let active = use_memo(move || state.read().active_index());
    use_effect(move || {
        let index = active();
        tracing::trace!(index, "active tab rendered");
        measurer.send(Trigger::Rendered);
    });

    use_effect(use_reactive((&routes,), move |(routes,)| {
        if state.with_mut(|s| s.set_routes(routes)) {
            tab_handles.with_mut(|handles| handles.retain_routes(state.peek().routes()));
            measurer.send(Trigger::RoutesChanged);
            if state.with_mut(|s| s.take_reflow()) {
                schedule_settle.call(reflow_delay_ms);
            }
        }
    }));

    {
        let settle_task = settle_task.clone();
        let resize_sub = resize_sub.clone();
        use_drop(move || {
            if let Some(task) = settle_task.borrow_mut().take() {
                task.cancel();
            }
            resize_sub.borrow_mut().take();
            if let Ok(mut s) = state.try_write() {
                s.detach();
            }
        });
    }

    let on_container_mounted = {
        let settle_delay_ms = config.settle_delay_ms;
        move |evt: MountedEvent| {
            container.set(Some(evt.data()));
            schedule_settle.call(settle_delay_ms);

            if resize_sub.borrow().is_none() {
                let tx = measurer.tx();
                let subscription = ResizeSubscription::acquire(move || {
                    let _ = tx.unbounded_send(Trigger::Resize);
                });
                *resize_sub.borrow_mut() = subscription;
            }
        }
    };

    let (tabs, active_index, dot) = {
        let snapshot = state.read();
        let tabs = snapshot
            .routes()
            .iter()
            .enumerate()
            .map(|(index, route)| {
                (
                    index,
                    route.clone(),
                    route.key.clone(),
                    snapshot.weight(index),
                    snapshot.is_active(index),
                )
            })
            .collect::<Vec<_>>();
        (tabs, snapshot.active_index(), snapshot.dot())
    };
    let total = tabs.len();

    let bar_style = format!(
        "top: {}px; padding: {}px 6px; background: {}; --tab-bar-transition: {}ms;",
        config.padding_top, config.padding_vertical, config.background, config.transition_ms
    );
    let dot_style = dot.style(config.active_background(active_index));
    let dot_class = if dot.is_visible() {
        "tab-bar__dot tab-bar__dot--visible"
    } else {
        "tab-bar__dot"
    };
    let show_icon = config.show_icon;
    let show_label = config.labels_visible();

    rsx! {
        document::Link { rel: "stylesheet", href: TAB_BAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{TAB_BAR_CSS_INLINE}" }
        }

        nav {
            class: "tab-bar",
            role: "tablist",
            aria_label: t!("tab-bar-label"),
            style: "{bar_style}",
            onmounted: on_container_mounted,
            onresize: move |_| measurer.send(Trigger::Resize),

            div { class: "{dot_class}", style: "{dot_style}", aria_hidden: "true" }

            for (index, route, key, weight, is_active) in tabs {
                button {
                    key: "{route.key}",
                    r#type: "button",
                    role: "tab",
                    class: if is_active { "tab-bar__tab tab-bar__tab--active" } else { "tab-bar__tab" },
                    aria_selected: "{is_active}",
                    title: t!("tab-bar-position", index = (index + 1), total = total),
                    style: format!(
                        "flex-grow: {weight}; color: {};",
                        if is_active { config.active_color(index) } else { config.tint_color.as_str() }
                    ),
                    onmounted: move |evt: MountedEvent| {
                        tab_handles.with_mut(|handles| handles.insert(key.clone(), evt.data()));
                    },
                    ontransitionend: move |evt: TransitionEvent| {
                        if evt.property_name() == "flex-grow" {
                            measurer.send(Trigger::Transition);
                        }
                    },
                    onclick: move |_| {
                        let Some((picked, reflow)) =
                            state.with_mut(|s| s.select(index).map(|r| (r, s.take_reflow())))
                        else {
                            return;
                        };
                        if reflow {
                            schedule_settle.call(reflow_delay_ms);
                        }
                        if let Some(handler) = on_select {
                            handler.call(picked);
                        }
                    },
                    if show_icon {
                        TabIcon { icon: route.icon }
                    }
                    if show_label {
                        span { class: "tab-bar__label", "{route.name}" }
                    }
                }
            }
        }
    }
}

async fn measure_tab(
    container: Option<Rc<MountedData>>,
    tab: Option<Rc<MountedData>>,
    index: usize,
) -> Result<LayoutBox, MeasureError> {
    let container = container.ok_or(MeasureError::ContainerNotMounted)?;
    let tab = tab.ok_or(MeasureError::TabNotMounted { index })?;
    let outer = client_box(&container).await?;
    let inner = client_box(&tab).await?;
    Ok(inner.relative_to(&outer))
}

async fn client_box(node: &MountedData) -> Result<LayoutBox, MeasureError> {
    let rect = node
        .get_client_rect()
        .await
        .map_err(|err| MeasureError::Layout(format!("{err:?}")))?;
    Ok(LayoutBox::new(
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
    ))
}
