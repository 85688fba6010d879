//! Catalog page controller: the selection machine plus the timers that drive it.

use std::time::Instant;

use devpath_types::TrackId;

use crate::catalog::Catalog;
use crate::selection::{SelectOutcome, SelectionPhase, Timing, ViewState};
use crate::timer::TimerQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTimer {
    TransitionEnd,
    LoadingDone,
}

/// One live catalog page. Dropping it cancels whatever is still scheduled.
#[derive(Debug)]
pub struct CatalogView {
    state: ViewState,
    timers: TimerQueue<ViewTimer>,
    timing: Timing,
}

impl CatalogView {
    /// Enter the page: loading until `timing.loading` has elapsed from `now`
    pub fn new(timing: Timing, now: Instant) -> Self {
        Self::with_state(ViewState::new(), timing, now)
    }

    /// Enter the page with a track carried over from search. Unknown ids are ignored.
    pub fn with_preselected(
        catalog: &Catalog,
        selected: Option<&TrackId>,
        timing: Timing,
        now: Instant,
    ) -> Self {
        let state = match selected {
            Some(id) if catalog.contains(id.as_str()) => ViewState::with_selected(id.clone()),
            Some(id) => {
                tracing::debug!(track = %id, "Ignoring unknown preselected track");
                ViewState::new()
            }
            None => ViewState::new(),
        };
        Self::with_state(state, timing, now)
    }

    fn with_state(state: ViewState, timing: Timing, now: Instant) -> Self {
        let mut timers = TimerQueue::new();
        timers.schedule(ViewTimer::LoadingDone, now + timing.loading);
        Self {
            state,
            timers,
            timing,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn phase(&self) -> SelectionPhase {
        self.state.phase()
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn select_track(&mut self, id: &TrackId, now: Instant) -> SelectOutcome {
        let outcome = self.state.select_track(id);
        if outcome.is_accepted() {
            self.timers
                .schedule(ViewTimer::TransitionEnd, now + self.timing.transition);
        }
        outcome
    }

    pub fn toggle_technology(&mut self, catalog: &Catalog, name: &str) -> bool {
        self.state.toggle_technology(catalog, name)
    }

    /// Apply every timer due at `now`; returns what fired, in order
    pub fn advance(&mut self, now: Instant) -> Vec<ViewTimer> {
        let fired = self.timers.pop_expired(now);
        for timer in &fired {
            match timer {
                ViewTimer::TransitionEnd => self.state.finish_transition(),
                ViewTimer::LoadingDone => self.state.finish_loading(),
            }
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Cancel pending timers so none can touch this view after it is gone
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            tracing::debug!(cancelled, "Cancelled pending catalog view timers");
        }
        cancelled
    }
}

impl Drop for CatalogView {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_loading_flips_after_delay() {
        let start = Instant::now();
        let mut view = CatalogView::new(Timing::default(), start);
        assert!(view.state().is_loading());

        assert!(view.advance(start + ms(999)).is_empty());
        assert!(view.state().is_loading());

        assert_eq!(view.advance(start + ms(1000)), vec![ViewTimer::LoadingDone]);
        assert!(!view.state().is_loading());
    }

    #[test]
    fn test_transition_ends_after_delay_regardless_of_input() {
        let start = Instant::now();
        let mut view = CatalogView::new(Timing::default(), start);
        let frontend = TrackId::new("frontend");
        let backend = TrackId::new("backend");

        view.select_track(&frontend, start);
        assert_eq!(
            view.select_track(&backend, start + ms(100)),
            SelectOutcome::Ignored
        );
        assert_eq!(view.pending_timers(), 2);

        view.advance(start + ms(300));
        assert_eq!(view.phase(), SelectionPhase::Selected(frontend));
    }

    #[test]
    fn test_teardown_cancels_pending_timers() {
        let start = Instant::now();
        let mut view = CatalogView::new(Timing::default(), start);
        view.select_track(&TrackId::new("cloud"), start);

        assert_eq!(view.teardown(), 2);
        assert!(view.advance(start + ms(5000)).is_empty());
        assert!(view.state().is_transitioning());
        assert!(view.state().is_loading());
        assert_eq!(view.next_deadline(), None);
    }

    #[test]
    fn test_preselection_skips_transition() {
        let catalog = Catalog::builtin();
        let start = Instant::now();
        let id = TrackId::new("blockchain");

        let view =
            CatalogView::with_preselected(&catalog, Some(&id), Timing::default(), start);
        assert_eq!(view.phase(), SelectionPhase::Selected(id));
        assert_eq!(view.pending_timers(), 1);

        let unknown = TrackId::new("nope");
        let view =
            CatalogView::with_preselected(&catalog, Some(&unknown), Timing::default(), start);
        assert_eq!(view.phase(), SelectionPhase::Idle);
    }

    #[test]
    fn test_custom_timing() {
        let start = Instant::now();
        let mut view = CatalogView::new(Timing::from_millis(50, 0), start);
        assert_eq!(view.next_deadline(), Some(start));
        view.advance(start);
        assert!(!view.state().is_loading());

        view.select_track(&TrackId::new("ui-ux"), start);
        assert_eq!(view.next_deadline(), Some(start + ms(50)));
    }
}
