//! Window resize subscription.
//!
//! On the web the listener is attached to `window` for as long as the returned
//! [`ResizeSubscription`] lives; dropping it removes the listener. Native
//! builds have no `window` object to attach to, so `acquire` returns `None`
//! there and callers rely on the element-level resize event instead.

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    pub struct ResizeSubscription {
        window: web_sys::Window,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl ResizeSubscription {
        pub fn acquire(mut on_resize: impl FnMut() + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let callback =
                Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                    on_resize()
                });
            if let Err(err) = window
                .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "could not attach resize listener");
                return None;
            }
            tracing::debug!("resize listener attached");
            Some(Self { window, callback })
        }
    }

    impl Drop for ResizeSubscription {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                "resize",
                self.callback.as_ref().unchecked_ref(),
            );
            tracing::debug!("resize listener released");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub struct ResizeSubscription {
        _private: (),
    }

    impl ResizeSubscription {
        pub fn acquire(_on_resize: impl FnMut() + 'static) -> Option<Self> {
            None
        }
    }
}

pub use imp::ResizeSubscription;
