//! Leptos Scroll Effects
//!
//! Scroll-driven page effects for Leptos using browser events.
//! - Reactive window scroll offset
//! - Active section tracking for navigation highlighting
//! - Reveal-on-scroll via IntersectionObserver
//! - Counter animation stepping

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Current vertical scroll offset of the window (0 when unavailable)
pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Reactive window scroll offset.
///
/// Registers a window `scroll` listener that is removed when the owning
/// reactive scope is cleaned up.
pub fn use_scroll_y() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(current_scroll_y());
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        set_scroll_y.set(current_scroll_y());
    });
    on_cleanup(move || handle.remove());
    scroll_y
}

/// Whether the page has scrolled past `threshold` pixels
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Collect `(id, offset_top)` for every element matching `selector`, in document order
pub fn section_offsets(selector: &str) -> Vec<(String, f64)> {
    query_all(selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| (el.id(), el.offset_top() as f64))
        .filter(|(id, _)| !id.is_empty())
        .collect()
}

/// The section the reader is currently in.
///
/// Returns the last section (in document order) whose top, pulled up by
/// `margin`, has been scrolled past. `None` while above the first section.
pub fn active_section(sections: &[(String, f64)], scroll_y: f64, margin: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - margin)
        .last()
        .map(|(id, _)| id.as_str())
}

/// Smoothly scroll to the element referenced by an in-page `#id` href.
///
/// Returns `false` when the href is not an anchor or nothing matches.
pub fn scroll_to_anchor(href: &str) -> bool {
    if !href.starts_with('#') || href.len() < 2 {
        return false;
    }
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return false;
    };
    match doc.query_selector(href) {
        Ok(Some(target)) => {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            opts.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
            true
        }
        _ => false,
    }
}

/// Click handler for in-page anchor links that scrolls smoothly instead of jumping
pub fn make_on_anchor_click(href: &'static str) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if scroll_to_anchor(href) {
            ev.prevent_default();
        }
    }
}

fn query_all(selector: &str) -> Vec<web_sys::Element> {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        log::warn!("[scroll-fx] invalid selector: {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// IntersectionObserver wrapper that owns its JS callback.
///
/// Disconnects on `disconnect()` or drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl VisibilityObserver {
    fn new<F>(threshold: f64, mut on_visible: F) -> Result<Self, JsValue>
    where
        F: FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = EntryCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible(entry, &observer);
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self { observer, _callback: callback })
    }

    /// Add `class` to every element matching `selector` once it becomes visible
    pub fn observe_selector(selector: &str, threshold: f64, class: &str) -> Result<Self, JsValue> {
        let class = class.to_string();
        let this = Self::new(threshold, move |entry, _| {
            if let Err(e) = entry.target().class_list().add_1(&class) {
                log::warn!("[scroll-fx] failed to add class {}: {:?}", class, e);
            }
        })?;

        let elements = query_all(selector);
        for el in &elements {
            this.observer.observe(el);
        }
        log::debug!("[scroll-fx] observing {} elements for {}", elements.len(), selector);
        Ok(this)
    }

    /// Run `callback` the first time `element` becomes visible, then stop watching it
    pub fn observe_once<F>(element: &web_sys::Element, threshold: f64, callback: F) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let mut callback = Some(callback);
        let this = Self::new(threshold, move |entry, observer| {
            observer.unobserve(&entry.target());
            if let Some(cb) = callback.take() {
                cb();
            }
        })?;
        this.observer.observe(element);
        Ok(this)
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Count-up animation state for statistic counters.
///
/// Each step adds `target / speed`, rounded up, until the target is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    current: u32,
    speed: u32,
}

impl CounterAnimation {
    pub fn new(target: u32, speed: u32) -> Self {
        Self {
            target,
            current: 0,
            speed: speed.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.target
    }

    /// Advance one frame and return the value to display
    pub fn step(&mut self) -> u32 {
        if self.current < self.target {
            let inc = self.target as f64 / self.speed as f64;
            let next = (self.current as f64 + inc).ceil() as u32;
            self.current = next.min(self.target);
        } else {
            self.current = self.target;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("about".to_string(), 600.0),
            ("programs".to_string(), 1400.0),
            ("news".to_string(), 2600.0),
        ]
    }

    #[test]
    fn test_active_section_above_first() {
        assert_eq!(active_section(&sections(), 0.0, 150.0), None);
        assert_eq!(active_section(&sections(), 449.0, 150.0), None);
    }

    #[test]
    fn test_active_section_uses_margin() {
        assert_eq!(active_section(&sections(), 450.0, 150.0), Some("about"));
        assert_eq!(active_section(&sections(), 1250.0, 150.0), Some("programs"));
        assert_eq!(active_section(&sections(), 9000.0, 150.0), Some("news"));
    }

    #[test]
    fn test_is_scrolled_threshold_is_exclusive() {
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }

    #[test]
    fn test_counter_small_target_steps_by_one() {
        let mut counter = CounterAnimation::new(15, 200);
        let mut frames = 0;
        while !counter.is_finished() {
            counter.step();
            frames += 1;
        }
        assert_eq!(frames, 15);
        assert_eq!(counter.current(), 15);
    }

    #[test]
    fn test_counter_never_overshoots() {
        let mut counter = CounterAnimation::new(450, 200);
        let mut last = 0;
        while !counter.is_finished() {
            let value = counter.step();
            assert!(value > last);
            assert!(value <= 450);
            last = value;
        }
        assert_eq!(counter.current(), 450);
    }

    #[test]
    fn test_counter_zero_target_is_finished() {
        let mut counter = CounterAnimation::new(0, 200);
        assert!(counter.is_finished());
        assert_eq!(counter.step(), 0);
    }
}
