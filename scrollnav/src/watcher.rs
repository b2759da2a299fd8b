use crate::config::{DEFAULT_HIDDEN_OFFSET, WatcherConfig};
use crate::state::{NavState, ScrollDirection};
use crate::target::NavTarget;

/// Hides the navigation bar while the page scrolls down and reveals it as soon
/// as the page scrolls up.
///
/// The last observed offset lives here and nowhere else. Whoever dispatches
/// scroll events owns the watcher and feeds it samples through [`on_scroll`].
///
/// [`on_scroll`]: ScrollDirectionWatcher::on_scroll
#[derive(Debug)]
pub struct ScrollDirectionWatcher<T> {
    previous_offset: f64,
    hidden_offset: f64,
    state: NavState,
    target: T,
}

impl<T: NavTarget> ScrollDirectionWatcher<T> {
    /// Starts visible; nothing is written to `target` until the first sample.
    pub fn new(initial_offset: f64, target: T) -> Self {
        Self {
            previous_offset: initial_offset,
            hidden_offset: DEFAULT_HIDDEN_OFFSET,
            state: NavState::Visible,
            target,
        }
    }

    pub fn with_config(initial_offset: f64, target: T, config: &WatcherConfig) -> Self {
        Self {
            hidden_offset: config.hidden_offset,
            ..Self::new(initial_offset, target)
        }
    }

    pub fn on_scroll(&mut self, current: f64) {
        let direction = ScrollDirection::between(self.previous_offset, current);
        let next = NavState::after(direction);

        tracing::trace!(
            previous = self.previous_offset,
            current,
            ?direction,
            "scroll sample"
        );
        if next != self.state {
            tracing::debug!("navigation {:?} -> {:?} at offset {}", self.state, next, current);
        }

        self.target.apply(next, &next.top_style(self.hidden_offset));
        self.state = next;
        self.previous_offset = current;
    }

    pub fn previous_offset(&self) -> f64 {
        self.previous_offset
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingNav {
        applied: Vec<(NavState, String)>,
    }

    impl NavTarget for RecordingNav {
        fn apply(&mut self, state: NavState, top: &str) {
            self.applied.push((state, top.to_string()));
        }
    }

    impl RecordingNav {
        fn last_top(&self) -> Option<&str> {
            self.applied.last().map(|(_, top)| top.as_str())
        }
    }

    fn watcher_at(offset: f64) -> ScrollDirectionWatcher<RecordingNav> {
        ScrollDirectionWatcher::new(offset, RecordingNav::default())
    }

    #[test]
    fn test_starts_visible_without_touching_target() {
        let watcher = watcher_at(250.0);
        assert_eq!(watcher.state(), NavState::Visible);
        assert_eq!(watcher.previous_offset(), 250.0);
        assert!(watcher.target().applied.is_empty());
    }

    #[test]
    fn test_scroll_down_hides() {
        let mut watcher = watcher_at(0.0);
        watcher.on_scroll(100.0);

        assert_eq!(watcher.state(), NavState::Hidden);
        assert_eq!(watcher.target().last_top(), Some("-80px"));
        assert_eq!(watcher.previous_offset(), 100.0);
    }

    #[test]
    fn test_scroll_up_reveals() {
        let mut watcher = watcher_at(0.0);
        watcher.on_scroll(100.0);
        watcher.on_scroll(50.0);

        assert_eq!(watcher.state(), NavState::Visible);
        assert_eq!(watcher.target().last_top(), Some("0"));
        assert_eq!(watcher.previous_offset(), 50.0);
    }

    #[test]
    fn test_unchanged_offset_hides() {
        let mut watcher = watcher_at(100.0);
        watcher.on_scroll(50.0);
        assert_eq!(watcher.state(), NavState::Visible);

        watcher.on_scroll(50.0);
        assert_eq!(watcher.state(), NavState::Hidden);
        assert_eq!(watcher.target().last_top(), Some("-80px"));
        assert_eq!(watcher.previous_offset(), 50.0);

        // Staying put keeps it hidden
        watcher.on_scroll(50.0);
        assert_eq!(watcher.state(), NavState::Hidden);
    }

    #[test]
    fn test_monotonic_sequences() {
        let mut watcher = watcher_at(1000.0);
        for offset in [900.0, 700.0, 400.0, 10.0, 0.0] {
            watcher.on_scroll(offset);
            assert_eq!(watcher.previous_offset(), offset);
        }
        assert_eq!(watcher.state(), NavState::Visible);

        let mut watcher = watcher_at(0.0);
        for offset in [1.0, 2.0, 300.0, 301.5, 5000.0] {
            watcher.on_scroll(offset);
            assert_eq!(watcher.previous_offset(), offset);
        }
        assert_eq!(watcher.state(), NavState::Hidden);
    }

    #[test]
    fn test_style_written_on_every_sample() {
        let mut watcher = watcher_at(0.0);
        watcher.on_scroll(10.0);
        watcher.on_scroll(20.0);
        watcher.on_scroll(5.0);

        let states: Vec<NavState> = watcher.target().applied.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            states,
            vec![NavState::Hidden, NavState::Hidden, NavState::Visible]
        );
    }

    #[test]
    fn test_missing_target_is_noop() {
        let mut watcher = ScrollDirectionWatcher::new(0.0, None::<RecordingNav>);
        watcher.on_scroll(100.0);
        watcher.on_scroll(50.0);
        watcher.on_scroll(50.0);

        assert!(watcher.target().is_none());
        assert_eq!(watcher.previous_offset(), 50.0);
    }

    #[test]
    fn test_configured_hidden_offset() {
        let config = WatcherConfig {
            hidden_offset: 64.0,
            ..Default::default()
        };
        let mut watcher = ScrollDirectionWatcher::with_config(0.0, RecordingNav::default(), &config);
        watcher.on_scroll(30.0);
        assert_eq!(watcher.target().last_top(), Some("-64px"));
    }

    #[test]
    fn test_borrowed_target() {
        let mut nav = RecordingNav::default();
        {
            let mut watcher = ScrollDirectionWatcher::new(0.0, &mut nav);
            watcher.on_scroll(40.0);
        }
        assert_eq!(nav.applied, vec![(NavState::Hidden, "-80px".to_string())]);
    }
}
