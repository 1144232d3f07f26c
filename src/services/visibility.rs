//! Scroll-reveal tracking.
//!
//! Each section starts hidden and latches to visible the first time the host
//! reports it intersecting the viewport. Non-intersecting entries are never
//! written, so a revealed section stays revealed for the life of the page.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use leptos::logging::{debug_warn, warn};
use thiserror::Error;

use crate::models::SectionId;
use crate::services::host::{EntrySink, ObserverHost, SectionObserver};

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "0px";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("intersection threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),
}

/// Observer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerOptions {
    threshold: f64,
    root_margin: String,
}

impl TrackerOptions {
    pub fn new(threshold: f64) -> Result<Self, TrackerError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(TrackerError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            root_margin: DEFAULT_ROOT_MARGIN.into(),
        })
    }

    pub fn with_root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }

    /// Fraction of a section that must be on screen to count as intersecting.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> &str {
        &self.root_margin
    }
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.into(),
        }
    }
}

/// One element's transition as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target_id: String,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target_id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            target_id: target_id.into(),
            is_intersecting,
        }
    }
}

/// Which sections have been revealed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityState {
    revealed: BTreeSet<SectionId>,
}

impl VisibilityState {
    pub fn is_visible(&self, section: SectionId) -> bool {
        self.revealed.contains(&section)
    }

    /// Latches `section` to visible. Returns `true` if it was hidden before.
    pub fn reveal(&mut self, section: SectionId) -> bool {
        self.revealed.insert(section)
    }

    /// Reveals every known section, returning how many were newly revealed.
    pub fn reveal_all(&mut self) -> usize {
        SectionId::ALL
            .into_iter()
            .filter(|section| self.reveal(*section))
            .count()
    }

    pub fn revealed(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.revealed.iter().copied()
    }
}

/// Where revealed sections are recorded.
///
/// Reads must not subscribe the caller to changes; the tracker only uses them
/// to skip writes that would not change anything.
pub trait VisibilityStore {
    fn is_visible(&self, section: SectionId) -> bool;
    fn reveal(&self, sections: &[SectionId]);
    fn reveal_all(&self);
}

impl VisibilityStore for Rc<RefCell<VisibilityState>> {
    fn is_visible(&self, section: SectionId) -> bool {
        self.borrow().is_visible(section)
    }

    fn reveal(&self, sections: &[SectionId]) {
        let mut state = self.borrow_mut();
        for section in sections {
            state.reveal(*section);
        }
    }

    fn reveal_all(&self) {
        self.borrow_mut().reveal_all();
    }
}

/// Sections in `entries` that are intersecting and not yet revealed, without
/// duplicates. Unknown target ids are skipped.
pub fn pending_reveals<S: VisibilityStore>(store: &S, entries: &[IntersectionEntry]) -> Vec<SectionId> {
    let mut pending = Vec::new();
    for entry in entries.iter().filter(|e| e.is_intersecting) {
        let Some(section) = SectionId::from_dom_id(&entry.target_id) else {
            debug_warn!("ignoring intersection for untracked element {:?}", entry.target_id);
            continue;
        };
        if !store.is_visible(section) && !pending.contains(&section) {
            pending.push(section);
        }
    }
    pending
}

/// Applies one batch of entries to `store`. Returns the newly revealed count.
///
/// A batch that reveals nothing performs no write at all.
pub fn deliver<S: VisibilityStore>(store: &S, entries: &[IntersectionEntry]) -> usize {
    let pending = pending_reveals(store, entries);
    if !pending.is_empty() {
        store.reveal(&pending);
    }
    pending.len()
}

/// Owns the page's intersection subscription.
///
/// Tearing down is idempotent and also happens on drop. Entries the host
/// delivers after teardown are discarded.
pub struct VisibilityTracker<O: SectionObserver> {
    observer: Option<O>,
    live: Rc<Cell<bool>>,
}

impl<O: SectionObserver> VisibilityTracker<O> {
    /// Whether entries are still being applied.
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    pub fn teardown(&mut self) {
        self.live.set(false);
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl<O: SectionObserver> Drop for VisibilityTracker<O> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Subscribes to intersection events for every tagged section.
///
/// If the host cannot observe, every section is revealed up front and the
/// returned tracker holds no subscription.
pub fn track<H, S>(host: &H, options: &TrackerOptions, store: S) -> VisibilityTracker<H::Observer>
where
    H: ObserverHost,
    S: VisibilityStore + Clone + 'static,
{
    let live = Rc::new(Cell::new(true));

    let sink: EntrySink = {
        let live = Rc::clone(&live);
        let store = store.clone();
        Rc::new(move |entries: &[IntersectionEntry]| {
            if live.get() {
                deliver(&store, entries);
            }
        })
    };

    match host.connect(options, sink) {
        Ok(observer) => VisibilityTracker {
            observer: Some(observer),
            live,
        },
        Err(err) => {
            warn!("scroll reveal disabled, showing all sections: {err}");
            live.set(false);
            store.reveal_all();
            VisibilityTracker {
                observer: None,
                live,
            }
        }
    }
}
