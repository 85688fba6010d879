//! Selection / transition state machine of the catalog page.
//!
//! ```text
//!   idle ──select(A)──▶ transitioning ──delay──▶ selected(A)
//!   selected(A) ──select(B)──▶ transitioning ──delay──▶ selected(B)
//!   selected(A) ──select(A)──▶ transitioning ──delay──▶ idle
//! ```
//!
//! The state change itself is applied synchronously; `transitioning` only
//! marks the window during which further track selections are ignored.
//! Technology expansion is a separate single-slot toggle that does not look at
//! the transition flag. Page loading is a one-shot flag of its own.

use std::time::Duration;

use devpath_types::TrackId;

use crate::catalog::Catalog;

/// Delay policy for the catalog page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub transition: Duration,
    pub loading: Duration,
}

impl Timing {
    pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);
    pub const DEFAULT_LOADING: Duration = Duration::from_millis(1000);

    pub fn from_millis(transition_ms: u64, loading_ms: u64) -> Self {
        Self {
            transition: Duration::from_millis(transition_ms),
            loading: Duration::from_millis(loading_ms),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            transition: Self::DEFAULT_TRANSITION,
            loading: Self::DEFAULT_LOADING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    Deselected,
    /// A transition was already in flight
    Ignored,
}

impl SelectOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SelectOutcome::Ignored)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPhase {
    Idle,
    /// `target` is where the transition lands: a track, or `None` for idle
    Transitioning { target: Option<TrackId> },
    Selected(TrackId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selected: Option<TrackId>,
    expanded: Option<String>,
    transitioning: bool,
    loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected: None,
            expanded: None,
            transitioning: false,
            loading: true,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `id` already selected and no transition in flight
    pub fn with_selected(id: TrackId) -> Self {
        Self {
            selected: Some(id),
            ..Self::default()
        }
    }

    pub fn selected(&self) -> Option<&TrackId> {
        self.selected.as_ref()
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_selected(&self, id: &TrackId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn phase(&self) -> SelectionPhase {
        match (&self.selected, self.transitioning) {
            (target, true) => SelectionPhase::Transitioning {
                target: target.clone(),
            },
            (Some(id), false) => SelectionPhase::Selected(id.clone()),
            (None, false) => SelectionPhase::Idle,
        }
    }

    /// Choose a track: selecting the current one toggles it off.
    pub fn select_track(&mut self, id: &TrackId) -> SelectOutcome {
        if self.transitioning {
            tracing::trace!(track = %id, "Selection ignored while transitioning");
            return SelectOutcome::Ignored;
        }

        let outcome = if self.is_selected(id) {
            self.selected = None;
            SelectOutcome::Deselected
        } else {
            self.selected = Some(id.clone());
            SelectOutcome::Selected
        };
        self.expanded = None;
        self.transitioning = true;

        tracing::debug!(track = %id, ?outcome, "Track selection changed");
        outcome
    }

    pub fn finish_transition(&mut self) {
        self.transitioning = false;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Expand `name` under the selected track, or collapse it if it is the
    /// expanded one. Returns false when there is no selected track carrying
    /// that technology.
    pub fn toggle_technology(&mut self, catalog: &Catalog, name: &str) -> bool {
        let Some(track) = self
            .selected
            .as_ref()
            .and_then(|id| catalog.get(id.as_str()))
        else {
            return false;
        };
        if !track.has_technology(name) {
            return false;
        }

        if self.expanded.as_deref() == Some(name) {
            self.expanded = None;
        } else {
            self.expanded = Some(name.to_string());
        }
        true
    }
}
