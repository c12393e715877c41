//! Row selection model for the comparison form.
//!
//! DESIGN
//! ======
//! `Selection::apply` is the whole state machine: a total, side-effect-free
//! function from (selection, event) to a [`Transition`]. Persisting and
//! rendering happen in `tracker`, after a transition is known.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::Serialize;

/// Ordered, duplicate-free list of selected row ids.
///
/// Order is selection order, not document order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<String>,
}

/// User-driven change to a [`Selection`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A row checkbox changed; `selected` is its new checked state.
    Toggle { id: String, selected: bool },
    /// The reset control was used.
    Clear,
}

/// Result of applying a [`SelectionEvent`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The selection changed to the contained value.
    Changed(Selection),
    /// The event had no effect.
    Unchanged,
    /// A selection was refused because the cap is reached.
    CapExceeded,
}

impl Selection {
    /// Build a selection from arbitrary ids, keeping the first occurrence of
    /// each id and at most `cap` ids.
    pub fn normalized<I>(ids: I, cap: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut out: Vec<String> = Vec::with_capacity(cap);
        for id in ids {
            if out.len() == cap {
                break;
            }
            if !out.contains(&id) {
                out.push(id);
            }
        }
        Self { ids: out }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Compute the effect of `event` with at most `cap` selected ids.
    #[must_use]
    pub fn apply(&self, event: &SelectionEvent, cap: usize) -> Transition {
        match event {
            SelectionEvent::Toggle { id, selected: true } => {
                if self.contains(id) {
                    Transition::Unchanged
                } else if self.ids.len() >= cap {
                    Transition::CapExceeded
                } else {
                    let mut ids = self.ids.clone();
                    ids.push(id.clone());
                    Transition::Changed(Self { ids })
                }
            }
            SelectionEvent::Toggle { id, selected: false } => {
                if self.contains(id) {
                    let ids = self.ids.iter().filter(|s| *s != id).cloned().collect();
                    Transition::Changed(Self { ids })
                } else {
                    Transition::Unchanged
                }
            }
            SelectionEvent::Clear => {
                if self.is_empty() {
                    Transition::Unchanged
                } else {
                    Transition::Changed(Self::default())
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
