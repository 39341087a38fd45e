//! Browser lifecycle hooks.
//!
//! Everything here runs inside an [`Effect`], so nothing touches the DOM during
//! server rendering. Every timer, listener and observer acquired by a hook is
//! released in `on_cleanup` when the owning component unmounts.

use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::motion::MotionPreference;
use crate::state::{
    AutoplayConfig, Carousel, LoadingState, RATIO_TOLERANCE, ReadyTrigger, RevealLatch,
    reachable_threshold,
};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// The visitor's motion preference, provided once by [`crate::frontend::App`].
#[derive(Debug, Clone, Copy)]
pub struct Motion(ReadSignal<MotionPreference>);

impl Motion {
    pub fn get(&self) -> MotionPreference {
        self.0.get()
    }

    pub fn get_untracked(&self) -> MotionPreference {
        self.0.get_untracked()
    }
}

pub fn provide_motion_preference() {
    let (preference, set_preference) = signal(MotionPreference::Full);

    Effect::new(move |_| {
        let reduced = window()
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .is_some_and(|list| list.matches());
        set_preference.set(MotionPreference::from_reduced(reduced));
    });

    provide_context(Motion(preference));
}

pub fn use_motion() -> Motion {
    use_context::<Motion>().unwrap_or_else(|| Motion(signal(MotionPreference::Full).0))
}

/// Readiness of one skeleton placeholder.
#[derive(Debug, Clone, Copy)]
pub struct Readiness {
    state: RwSignal<LoadingState>,
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        self.state.with(LoadingState::is_ready)
    }

    pub fn shows_placeholder(&self) -> bool {
        self.state.with(LoadingState::shows_placeholder)
    }

    /// Subscribers are only notified on the single false to true flip.
    pub fn mark_ready(&self) {
        self.state.maybe_update(LoadingState::mark_ready);
    }
}

/// Starts a placeholder in the loading state. A [`ReadyTrigger::Timer`] arms a
/// timeout on mount; a [`ReadyTrigger::ResourceLoad`] waits for the caller to
/// invoke [`Readiness::mark_ready`] from a load event.
pub fn use_readiness(trigger: ReadyTrigger) -> Readiness {
    let readiness = Readiness {
        state: RwSignal::new(LoadingState::new()),
    };

    if let Some(delay) = trigger.delay() {
        Effect::new(move |_| {
            match set_timeout_with_handle(move || readiness.mark_ready(), delay) {
                Ok(handle) => on_cleanup(move || handle.clear()),
                Err(err) => {
                    tracing::warn!(error = ?err, "skeleton timer unavailable, showing content");
                    readiness.mark_ready();
                }
            }
        });
    }

    readiness
}

struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverGuard {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Latches to `true` the first time at least `threshold` of `target` is in
/// the viewport, or as much of it as the viewport can hold. The observer is disconnected right after, so leaving the
/// viewport never hides the content again.
pub fn use_reveal(target: NodeRef<Div>, threshold: f64) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let guard = StoredValue::new_local(None::<ObserverGuard>);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if revealed.get_untracked() || guard.with_value(Option::is_some) {
            return;
        }

        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let threshold =
            reachable_threshold(threshold, element.get_bounding_client_rect().height(), viewport);

        let mut latch = RevealLatch::new();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let ratio = if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    };
                    if latch.observe(ratio, threshold) {
                        set_revealed.set(true);
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(
            (threshold - RATIO_TOLERANCE).max(0.0),
        ));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                guard.set_value(Some(ObserverGuard {
                    observer,
                    _callback: callback,
                }));
            }
            Err(err) => {
                tracing::warn!(error = ?err, "IntersectionObserver unavailable, revealing immediately");
                set_revealed.set(true);
            }
        }
    });

    on_cleanup(move || {
        guard.try_update_value(|slot| {
            if let Some(guard) = slot.take() {
                guard.disconnect();
            }
        });
    });

    revealed
}

/// Calls `on_scroll` with the window's vertical offset on mount and on every
/// scroll event.
pub fn use_window_scroll(on_scroll: impl Fn(f64) + Clone + 'static) {
    Effect::new(move |_| {
        let current = on_scroll.clone();
        current(window().scroll_y().unwrap_or(0.0));

        let listener = on_scroll.clone();
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            listener(window().scroll_y().unwrap_or(0.0));
        });
        on_cleanup(move || handle.remove());
    });
}

/// Ticks `carousel` on the autoplay interval for the current motion
/// preference. The interval is re-armed when the preference changes and
/// cleared on unmount.
pub fn use_autoplay<T>(carousel: RwSignal<Carousel<T>>, config: AutoplayConfig, motion: Motion)
where
    T: Send + Sync + 'static,
{
    Effect::new(move |_| {
        let Some(interval) = config.interval_for(motion.get()) else {
            return;
        };

        match set_interval_with_handle(move || carousel.maybe_update(Carousel::tick), interval) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => tracing::warn!(error = ?err, "carousel autoplay unavailable"),
        }
    });
}

/// Wait-mode transition over an index: when `current` changes, `leaving`
/// turns on for `exit` and only then does `shown` follow.
pub fn use_wait_transition(
    current: Memo<usize>,
    exit: impl Fn() -> Duration + 'static,
) -> (ReadSignal<usize>, ReadSignal<bool>) {
    let (shown, set_shown) = signal(current.get_untracked());
    let (leaving, set_leaving) = signal(false);

    Effect::new(move |_| {
        let next = current.get();
        if next == shown.get_untracked() {
            set_leaving.set(false);
            return;
        }

        set_leaving.set(true);
        let swap = move || {
            set_shown.set(next);
            set_leaving.set(false);
        };
        match set_timeout_with_handle(swap, exit()) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => {
                tracing::warn!(error = ?err, "transition timer unavailable");
                set_shown.set(next);
                set_leaving.set(false);
            }
        }
    });

    (shown, leaving)
}

/// Empties `slot` once a value has sat in it for `after`. Replacing the value
/// restarts the countdown.
pub fn use_auto_clear<T>(slot: RwSignal<Option<T>>, after: Duration)
where
    T: Send + Sync + 'static,
{
    Effect::new(move |_| {
        if !slot.with(Option::is_some) {
            return;
        }

        match set_timeout_with_handle(move || slot.set(None), after) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => tracing::warn!(error = ?err, "auto-dismiss timer unavailable"),
        }
    });
}
