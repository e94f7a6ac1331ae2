//! News Carousel
//!
//! Slide partitioning, cyclic navigation and the autoplay-driving controller.

/// A fixed-size group of items shown together in the carousel viewport
#[derive(Debug, Clone, PartialEq)]
pub struct Slide<T> {
    items: Vec<T>,
}

impl<T> Slide<T> {
    /// Real items followed by `None` placeholders up to `per_slide`
    pub fn cells(&self, per_slide: usize) -> impl Iterator<Item = Option<&T>> {
        let padding = per_slide.saturating_sub(self.items.len());
        self.items
            .iter()
            .map(Some)
            .chain(std::iter::repeat_with(|| None).take(padding))
    }
}

/// Split `items` in order into slides of `per_slide` items (last may be short)
pub fn partition<T: Clone>(items: &[T], per_slide: usize) -> Vec<Slide<T>> {
    items
        .chunks(per_slide.max(1))
        .map(|chunk| Slide { items: chunk.to_vec() })
        .collect()
}

/// Slides plus the index of the visible one.
///
/// The index always stays within `0..slides.len()`; with no slides it stays 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    current: usize,
    slides: Vec<Slide<T>>,
}

impl<T: Clone> Carousel<T> {
    pub fn new(items: &[T], per_slide: usize) -> Self {
        Self {
            current: 0,
            slides: partition(items, per_slide),
        }
    }
}

impl<T> Carousel<T> {
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slides(&self) -> &[Slide<T>] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.slides.is_empty() && index == self.current
    }

    /// Move to the next slide, wrapping to the first after the last
    pub fn advance(&mut self) {
        if !self.slides.is_empty() {
            self.current = (self.current + 1) % self.slides.len();
        }
    }

    /// Move to the previous slide, wrapping to the last before the first
    pub fn retreat(&mut self) {
        if !self.slides.is_empty() {
            self.current = self.current.checked_sub(1).unwrap_or(self.slides.len() - 1);
        }
    }

    /// Jump to `index` (out-of-range indices wrap around)
    pub fn go_to(&mut self, index: usize) {
        if !self.slides.is_empty() {
            self.current = index % self.slides.len();
        }
    }

    /// Horizontal translation revealing the current slide, in percent
    pub fn offset_percent(&self) -> usize {
        self.current * 100
    }
}

/// Repeating timer driving autoplay
pub trait AutoplayTimer {
    /// Start (or restart) ticking every `period_ms`
    fn start(&mut self, period_ms: u32);
    /// Stop ticking; no-op when already stopped
    fn stop(&mut self);
}

/// Owns the carousel and its autoplay timer.
///
/// Manual navigation restarts the timer so it does not fire right after a
/// click; timer ticks advance without restarting.
pub struct CarouselController<T, Timer: AutoplayTimer> {
    carousel: Carousel<T>,
    timer: Timer,
    period_ms: u32,
    autoplay_active: bool,
}

impl<T: Clone, Timer: AutoplayTimer> CarouselController<T, Timer> {
    pub fn new(items: &[T], per_slide: usize, timer: Timer, period_ms: u32) -> Self {
        let mut this = Self {
            carousel: Carousel::new(items, per_slide),
            timer,
            period_ms,
            autoplay_active: false,
        };
        if this.has_controls() {
            this.timer.start(period_ms);
            this.autoplay_active = true;
        }
        log::debug!(
            "[carousel] {} items in {} slides, autoplay={}",
            items.len(),
            this.carousel.len(),
            this.autoplay_active
        );
        this
    }
}

impl<T, Timer: AutoplayTimer> CarouselController<T, Timer> {
    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    pub fn slides(&self) -> &[Slide<T>] {
        self.carousel.slides()
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current()
    }

    pub fn offset_percent(&self) -> usize {
        self.carousel.offset_percent()
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay_active
    }

    /// Prev/next buttons and dots are only shown for more than one slide
    pub fn has_controls(&self) -> bool {
        self.carousel.len() > 1
    }

    pub fn next(&mut self) {
        self.carousel.advance();
        self.reset_autoplay();
    }

    pub fn previous(&mut self) {
        self.carousel.retreat();
        self.reset_autoplay();
    }

    pub fn go_to(&mut self, index: usize) {
        self.carousel.go_to(index);
        self.reset_autoplay();
    }

    /// Autoplay timer callback
    pub fn tick(&mut self) {
        self.carousel.advance();
    }

    /// Stop autoplay for good
    pub fn teardown(&mut self) {
        if self.autoplay_active {
            self.timer.stop();
            self.autoplay_active = false;
        }
    }

    fn reset_autoplay(&mut self) {
        if self.autoplay_active {
            self.timer.stop();
            self.timer.start(self.period_ms);
        }
    }
}

impl<T, Timer: AutoplayTimer> Drop for CarouselController<T, Timer> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum TimerCall {
        Start(u32),
        Stop,
    }

    /// Timer that records calls into a shared log
    #[derive(Clone, Default)]
    struct RecordingTimer {
        calls: Rc<RefCell<Vec<TimerCall>>>,
    }

    impl AutoplayTimer for RecordingTimer {
        fn start(&mut self, period_ms: u32) {
            self.calls.borrow_mut().push(TimerCall::Start(period_ms));
        }

        fn stop(&mut self) {
            self.calls.borrow_mut().push(TimerCall::Stop);
        }
    }

    fn items(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[test]
    fn test_partition_count_is_ceil() {
        for n in 0..=10u32 {
            let slides = partition(&items(n), 3);
            assert_eq!(slides.len(), (n as usize + 2) / 3, "n={}", n);
            assert!(slides.iter().all(|s| s.cells(3).count() == 3 && s.cells(3).flatten().next().is_some()));
        }
    }

    #[test]
    fn test_partition_preserves_order() {
        let slides = partition(&items(7), 3);
        let flat: Vec<u32> = slides.iter().flat_map(|s| s.cells(3).flatten().copied()).collect();
        assert_eq!(flat, items(7));
        assert_eq!(slides[2].cells(3).collect::<Vec<_>>(), vec![Some(&7), None, None]);
    }

    #[test]
    fn test_last_slide_is_padded() {
        let slides = partition(&items(4), 3);
        let cells: Vec<Option<&u32>> = slides[1].cells(3).collect();
        assert_eq!(cells, vec![Some(&4), None, None]);
        let full: Vec<Option<&u32>> = slides[0].cells(3).collect();
        assert_eq!(full, vec![Some(&1), Some(&2), Some(&3)]);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut carousel = Carousel::new(&items(7), 3);
        carousel.go_to(2);
        carousel.advance();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut carousel = Carousel::new(&items(7), 3);
        carousel.retreat();
        assert_eq!(carousel.current(), 2);
        assert_eq!(carousel.offset_percent(), 200);
    }

    #[test]
    fn test_go_to_out_of_range_wraps() {
        let mut carousel = Carousel::new(&items(6), 3);
        carousel.go_to(5);
        assert_eq!(carousel.current(), 1);
        assert!(carousel.is_active(1));
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn test_empty_carousel_navigation_is_noop() {
        let mut carousel: Carousel<u32> = Carousel::new(&[], 3);
        carousel.advance();
        carousel.retreat();
        carousel.go_to(4);
        assert_eq!(carousel.current(), 0);
        assert!(carousel.is_empty());
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn test_controller_starts_autoplay_for_multiple_slides() {
        let timer = RecordingTimer::default();
        let controller = CarouselController::new(&items(6), 3, timer.clone(), 5000);
        assert!(controller.autoplay_active());
        assert!(controller.has_controls());
        assert_eq!(*timer.calls.borrow(), vec![TimerCall::Start(5000)]);
    }

    #[test]
    fn test_controller_single_slide_has_no_autoplay() {
        let timer = RecordingTimer::default();
        let mut controller = CarouselController::new(&items(3), 3, timer.clone(), 5000);
        assert!(!controller.autoplay_active());
        assert!(!controller.has_controls());
        controller.next();
        assert_eq!(controller.current_index(), 0);
        assert!(timer.calls.borrow().is_empty());
    }

    #[test]
    fn test_manual_navigation_resets_timer() {
        let timer = RecordingTimer::default();
        let mut controller = CarouselController::new(&items(9), 3, timer.clone(), 5000);
        timer.calls.borrow_mut().clear();

        controller.next();
        controller.previous();
        controller.go_to(2);

        assert_eq!(controller.current_index(), 2);
        assert_eq!(
            *timer.calls.borrow(),
            vec![
                TimerCall::Stop, TimerCall::Start(5000),
                TimerCall::Stop, TimerCall::Start(5000),
                TimerCall::Stop, TimerCall::Start(5000),
            ]
        );
    }

    #[test]
    fn test_tick_advances_without_reset() {
        let timer = RecordingTimer::default();
        let mut controller = CarouselController::new(&items(6), 3, timer.clone(), 5000);
        controller.tick();
        assert_eq!(controller.current_index(), 1);
        controller.tick();
        assert_eq!(controller.current_index(), 0);
        assert_eq!(*timer.calls.borrow(), vec![TimerCall::Start(5000)]);
    }

    #[test]
    fn test_teardown_stops_once() {
        let timer = RecordingTimer::default();
        let mut controller = CarouselController::new(&items(6), 3, timer.clone(), 5000);
        controller.teardown();
        assert!(!controller.autoplay_active());
        controller.next();
        drop(controller);
        assert_eq!(*timer.calls.borrow(), vec![TimerCall::Start(5000), TimerCall::Stop]);
    }

    #[test]
    fn test_drop_stops_timer() {
        let timer = RecordingTimer::default();
        {
            let _controller = CarouselController::new(&items(4), 3, timer.clone(), 1000);
        }
        assert_eq!(*timer.calls.borrow(), vec![TimerCall::Start(1000), TimerCall::Stop]);
    }
}
