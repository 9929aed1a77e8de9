//! Browser access for the components. Off the browser (server-side rendering in
//! tests) every call is a no-op that reports the plain defaults.

use crate::theme::Theme;
use yew::Callback;

#[cfg(target_arch = "wasm32")]
mod imp {
    use crate::theme::{Theme, THEME_KEY};
    use js_sys::{Function, Reflect};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, Storage};
    use yew::Callback;

    fn local_storage() -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }

    pub fn stored_theme() -> Option<Theme> {
        local_storage()?
            .get_item(THEME_KEY)
            .ok()
            .flatten()
            .and_then(|value| Theme::from_str(&value))
    }

    pub fn store_theme(theme: Theme) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, theme.as_str());
        }
    }

    pub fn matches_media(query: &str) -> bool {
        window()
            .and_then(|w| w.match_media(query).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }

    pub fn set_root_theme(theme: Theme) {
        if let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }

    /// Applies `theme` inside `document.startViewTransition`; false when the
    /// browser has no view transitions.
    pub fn with_view_transition(theme: Theme) -> bool {
        let Some(document) = window().and_then(|w| w.document()) else {
            return false;
        };

        let document_js: JsValue = document.into();
        let Some(start) = Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
        else {
            return false;
        };

        // The browser invokes the update after capturing the old frame, so the
        // closure has to outlive this call.
        let update = Closure::once_into_js(move || set_root_theme(theme));
        start.call1(&document_js, &update).is_ok()
    }

    pub fn request_frame(callback: Callback<()>) {
        let Some(win) = window() else {
            callback.emit(());
            return;
        };

        let fallback = callback.clone();
        let frame = Closure::once_into_js(move || callback.emit(()));
        if win.request_animation_frame(frame.unchecked_ref()).is_err() {
            fallback.emit(());
        }
    }

    pub fn set_timeout(millis: i32, callback: Callback<()>) {
        let Some(win) = window() else {
            callback.emit(());
            return;
        };

        let fallback = callback.clone();
        let timer = Closure::once_into_js(move || callback.emit(()));
        if win
            .set_timeout_with_callback_and_timeout_and_arguments_0(timer.unchecked_ref(), millis)
            .is_err()
        {
            fallback.emit(());
        }
    }

    pub fn scroll_into_view(id: &str, smooth: bool) {
        let Some(target) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use crate::theme::Theme;
    use yew::Callback;

    pub fn stored_theme() -> Option<Theme> {
        None
    }

    pub fn store_theme(_theme: Theme) {}

    pub fn matches_media(_query: &str) -> bool {
        false
    }

    pub fn set_root_theme(_theme: Theme) {}

    pub fn with_view_transition(_theme: Theme) -> bool {
        false
    }

    // Nothing is painted off the browser, so frames and timers never fire.
    pub fn request_frame(_callback: Callback<()>) {}

    pub fn set_timeout(_millis: i32, _callback: Callback<()>) {}

    pub fn scroll_into_view(_id: &str, _smooth: bool) {}
}

pub fn prefers_reduced_motion() -> bool {
    imp::matches_media("(prefers-reduced-motion: reduce)")
}

/// Stored choice first, then the system colour scheme.
pub fn resolve_theme() -> Theme {
    imp::stored_theme().unwrap_or_else(|| {
        Theme::from_dark_mode(imp::matches_media("(prefers-color-scheme: dark)"))
    })
}

pub fn apply_theme(theme: Theme) {
    imp::set_root_theme(theme);
}

pub fn switch_theme(theme: Theme) {
    imp::store_theme(theme);
    if prefers_reduced_motion() || !imp::with_view_transition(theme) {
        imp::set_root_theme(theme);
    }
}

/// Runs `callback` once the current DOM has been painted at least once.
pub fn after_first_paint(callback: Callback<()>) {
    imp::request_frame(Callback::from(move |_| imp::request_frame(callback.clone())));
}

pub fn after_delay(seconds: f64, callback: Callback<()>) {
    imp::set_timeout((seconds * 1000.0).round() as i32, callback);
}

pub fn scroll_to_section(id: &str) {
    imp::scroll_into_view(id, !prefers_reduced_motion());
}
