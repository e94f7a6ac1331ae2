//! News Carousel Component
//!
//! Loads news once on mount, shows three cards per slide and cycles slides
//! on a timer or via prev/next buttons and dots.

use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{NewsCard, Tr};
use crate::api;
use crate::carousel::{AutoplayTimer, CarouselController, Slide};
use crate::context::use_site_context;
use crate::models::NewsItem;
use crate::news::{self, NewsOrigin};

/// Autoplay backed by a browser interval
struct IntervalTimer {
    handle: Option<Interval>,
    on_tick: Rc<dyn Fn()>,
}

impl IntervalTimer {
    fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            handle: None,
            on_tick: Rc::new(on_tick),
        }
    }
}

impl AutoplayTimer for IntervalTimer {
    fn start(&mut self, period_ms: u32) {
        let on_tick = Rc::clone(&self.on_tick);
        self.handle = Some(Interval::new(period_ms, move || on_tick()));
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

type NewsController = CarouselController<NewsItem, IntervalTimer>;

#[derive(Clone, Copy)]
enum Navigation {
    Next,
    Previous,
    GoTo(usize),
    Tick,
}

#[component]
pub fn NewsCarousel() -> impl IntoView {
    let ctx = use_site_context();
    let config = ctx.config();
    let per_slide = config.news_per_slide;

    // None while loading
    let (slides, set_slides) = signal(None::<Vec<Slide<NewsItem>>>);
    let (current, set_current) = signal(0usize);
    let (controls, set_controls) = signal(false);
    let (offset, set_offset) = signal(0usize);
    let controller = StoredValue::new_local(None::<NewsController>);

    let navigate = move |nav: Navigation| {
        controller.update_value(|slot| {
            let Some(c) = slot.as_mut() else { return };
            match nav {
                Navigation::Next => c.next(),
                Navigation::Previous => c.previous(),
                Navigation::GoTo(index) => c.go_to(index),
                Navigation::Tick => c.tick(),
            }
            set_current.set(c.current_index());
            set_offset.set(c.offset_percent());
        });
    };

    // `current` is tracked so dots refresh after every navigation
    let is_current = move |index: usize| {
        current.track();
        controller.with_value(|slot| slot.as_ref().is_some_and(|c| c.carousel().is_active(index)))
    };

    let endpoint = config.news_endpoint.clone();
    let period = config.autoplay_interval_ms;
    spawn_local(async move {
        let feed = news::resolve_feed(api::fetch_news(&endpoint).await, Utc::now());
        if feed.origin == NewsOrigin::Fallback {
            log::info!("[news] showing {} fallback items", feed.items.len());
        }
        let timer = IntervalTimer::new(move || navigate(Navigation::Tick));
        let loaded = CarouselController::new(&feed.items, per_slide, timer, period);
        if loaded.autoplay_active() {
            log::debug!("[news] autoplay every {} ms", period);
        }
        let has_controls = loaded.has_controls();
        let shown = loaded.slides().to_vec();
        // A controller that arrives after unmount is dropped here, stopping its timer
        if controller.try_update_value(|slot| *slot = Some(loaded)).is_none() {
            return;
        }
        set_controls.set(has_controls);
        set_slides.set(Some(shown));
    });

    on_cleanup(move || {
        let _ = controller.try_update_value(|slot| {
            if let Some(mut c) = slot.take() {
                c.teardown();
            }
        });
    });

    view! {
        <div class="news-carousel-container">
            {move || match slides.get() {
                None => view! {
                    <div class="news-loading"><Tr key="news.loading" /></div>
                }.into_any(),
                Some(loaded) if loaded.is_empty() => view! {
                    <div class="news-no-content"><Tr key="news.noNews" /></div>
                }.into_any(),
                Some(loaded) => {
                    let count = loaded.len();
                    let show_controls = controls.get();
                    view! {
                        <div class="news-carousel">
                            <div
                                class="news-slider"
                                id="news-slider"
                                style:transform=move || format!("translateX(-{}%)", offset.get())
                            >
                                {loaded.into_iter().enumerate().map(|(index, slide)| view! {
                                    <NewsSlide slide=slide index=index per_slide=per_slide />
                                }).collect_view()}
                            </div>
                        </div>
                        {show_controls.then(move || view! {
                            <div class="news-carousel-controls">
                                <button
                                    type="button"
                                    class="carousel-btn"
                                    id="prev-btn"
                                    on:click=move |_| navigate(Navigation::Previous)
                                >
                                    <i class="fas fa-chevron-left"></i>
                                </button>
                                <div class="carousel-dots">
                                    {(0..count).map(move |index| view! {
                                        <div
                                            class="carousel-dot"
                                            class:active=move || is_current(index)
                                            data-slide=index.to_string()
                                            on:click=move |_| navigate(Navigation::GoTo(index))
                                        ></div>
                                    }).collect_view()}
                                </div>
                                <button
                                    type="button"
                                    class="carousel-btn"
                                    id="next-btn"
                                    on:click=move |_| navigate(Navigation::Next)
                                >
                                    <i class="fas fa-chevron-right"></i>
                                </button>
                            </div>
                        })}
                    }.into_any()
                }
            }}
        </div>
    }
}

/// One slide; short slides are padded with hidden placeholder cards
#[component]
fn NewsSlide(slide: Slide<NewsItem>, index: usize, per_slide: usize) -> impl IntoView {
    let cells = slide
        .cells(per_slide)
        .map(|cell| match cell {
            Some(item) => view! { <NewsCard item=item.clone() /> }.into_any(),
            None => view! {
                <div class="news-card news-card-placeholder" style="visibility: hidden;"></div>
            }.into_any(),
        })
        .collect_view();

    view! {
        <div class="news-slide" data-slide=index.to_string()>
            {cells}
        </div>
    }
}

#[component]
pub fn NewsSection() -> impl IntoView {
    view! {
        <section id="news" class="news-section">
            <div class="container">
                <h2 class="section-title fade-in"><Tr key="news.title" /></h2>
                <div id="news-grid-container">
                    <NewsCarousel />
                </div>
            </div>
        </section>
    }
}
