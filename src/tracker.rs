//! Selection tracker: applies row events, persists, and re-renders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every handler runs the same sequence on the UI thread: read the persisted
//! selection, apply the event, write through to storage, then push the new
//! state to the [`CompareSurface`]. Storage failures degrade to in-memory
//! behavior; they never reach the user.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use crate::config::PageConfig;
use crate::state::projection::FormProjection;
use crate::state::selection::{Selection, SelectionEvent, Transition};
use crate::storage::{SelectionStore, StoreError};

/// Rendering target for the tracker: row checkboxes, compare form, alerts.
pub trait CompareSurface {
    /// Check every row whose id is in `selection` and uncheck the rest.
    fn sync_rows(&mut self, selection: &Selection);
    /// Revert a single row control after a rejected selection.
    fn uncheck_row(&mut self, id: &str);
    /// Show the compare button state and hidden fields.
    fn render(&mut self, projection: &FormProjection);
    /// Blocking user notification.
    fn warn(&mut self, message: &str);
}

/// What a [`SelectionTracker::toggle`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Changed,
    Unchanged,
    CapExceeded,
}

/// Owns the selection and keeps storage and the surface in step with it.
pub struct SelectionTracker<S, V> {
    store: S,
    surface: V,
    cap: usize,
    field_name: String,
    cap_warning: String,
    current: Selection,
}

impl<S: SelectionStore, V: CompareSurface> SelectionTracker<S, V> {
    pub fn new(store: S, surface: V, config: &PageConfig) -> Self {
        Self {
            store,
            surface,
            cap: config.max_selected,
            field_name: config.field_name.clone(),
            cap_warning: config.cap_warning.clone(),
            current: Selection::default(),
        }
    }

    /// Restore the persisted selection onto the page.
    pub fn load(&mut self) -> Selection {
        let selection = match self.store.get() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("could not restore selection, starting empty: {e}");
                Selection::default()
            }
        };
        self.current = selection.clone();
        self.surface.sync_rows(&self.current);
        self.render();
        selection
    }

    /// Handle a row checkbox changing to `want_selected`.
    pub fn toggle(&mut self, id: &str, want_selected: bool) -> ToggleOutcome {
        let current = self.read_current();
        // Storage moved under us (another tab, a cleared entry): show it first.
        let drifted = current != self.current;
        if drifted {
            log::debug!("stored selection drifted {:?} -> {:?}", self.current.ids(), current.ids());
            self.current = current.clone();
            self.surface.sync_rows(&self.current);
            self.render();
        }

        let event = SelectionEvent::Toggle { id: id.to_owned(), selected: want_selected };
        match current.apply(&event, self.cap) {
            Transition::Changed(next) => {
                log::debug!("selection {:?} -> {:?}", current.ids(), next.ids());
                if let Err(e) = self.store.set(&next) {
                    log::warn!("could not persist selection: {e}");
                }
                self.current = next;
                if drifted {
                    self.surface.sync_rows(&self.current);
                }
                self.render();
                ToggleOutcome::Changed
            }
            Transition::Unchanged => ToggleOutcome::Unchanged,
            Transition::CapExceeded => {
                self.surface.uncheck_row(id);
                self.surface.warn(&self.cap_warning);
                ToggleOutcome::CapExceeded
            }
        }
    }

    /// Forget the selection and reset the page.
    pub fn clear(&mut self) {
        if let Err(e) = self.store.remove() {
            log::warn!("could not remove persisted selection: {e}");
        }
        self.current = Selection::default();
        self.surface.sync_rows(&self.current);
        self.surface.render(&FormProjection::empty());
    }

    pub fn selection(&self) -> &Selection {
        &self.current
    }

    pub fn projection(&self) -> FormProjection {
        FormProjection::from_selection(&self.current, &self.field_name, self.cap)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Selection as persisted right now; falls back to memory when storage
    /// is unreachable and to empty when its contents are unreadable.
    fn read_current(&self) -> Selection {
        match self.store.get() {
            Ok(s) => s,
            Err(StoreError::Malformed(e)) => {
                log::warn!("discarding malformed stored selection: {e}");
                Selection::default()
            }
            Err(e) => {
                log::warn!("using in-memory selection: {e}");
                self.current.clone()
            }
        }
    }

    fn render(&mut self) {
        let projection = self.projection();
        self.surface.render(&projection);
    }
}
