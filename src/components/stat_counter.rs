//! Animated Statistic Counter
//!
//! Counts up from zero the first time the number scrolls into view.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_scroll_fx::{CounterAnimation, VisibilityObserver};

use super::Tr;
use crate::context::use_site_context;

/// Visible fraction that starts the animation
const START_THRESHOLD: f64 = 0.5;

fn run_counter(mut animation: CounterAnimation, tick_ms: u32, set_value: WriteSignal<u32>) {
    // Stop once the counter has been unmounted
    if set_value.try_set(animation.step()).is_some() {
        return;
    }
    if !animation.is_finished() {
        Timeout::new(tick_ms, move || run_counter(animation, tick_ms, set_value)).forget();
    }
}

#[component]
pub fn StatCounter(target: u32, label_key: &'static str) -> impl IntoView {
    let config = use_site_context().config();
    let speed = config.counter_speed;
    let tick_ms = config.counter_tick_ms;

    let (value, set_value) = signal(0u32);
    let number_ref = NodeRef::<leptos::html::Div>::new();
    let observer = StoredValue::new_local(None::<VisibilityObserver>);

    Effect::new(move |_| {
        let Some(el) = number_ref.get() else { return };
        if observer.with_value(Option::is_some) {
            return;
        }
        let start = move || run_counter(CounterAnimation::new(target, speed), tick_ms, set_value);
        match VisibilityObserver::observe_once(&el, START_THRESHOLD, start) {
            Ok(watch) => observer.set_value(Some(watch)),
            Err(e) => {
                log::warn!("[counter] observer unavailable, showing final value: {:?}", e);
                set_value.set(target);
            }
        }
    });

    on_cleanup(move || {
        let _ = observer.try_update_value(|watch| watch.take());
    });

    view! {
        <div class="stat-item">
            <div class="stat-number" data-target=target.to_string() node_ref=number_ref>
                {move || value.get()}
            </div>
            <div class="stat-label"><Tr key=label_key /></div>
        </div>
    }
}
