use leptos::prelude::*;

use crate::content::PROJECTS;
use crate::models::SectionId;
use crate::services::visibility::{VisibilityState, VisibilityStore};

/// The project card currently under the pointer, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hover {
    index: Option<usize>,
}

impl Hover {
    pub fn current(&self) -> Option<usize> {
        self.index
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    /// Hovers `index` out of a list of `len` projects. Returns whether anything changed.
    pub fn enter(&mut self, index: usize, len: usize) -> bool {
        if index >= len || self.is_hovered(index) {
            return false;
        }
        self.index = Some(index);
        true
    }

    /// Clears the hover. Returns whether anything was hovered.
    pub fn leave(&mut self) -> bool {
        self.index.take().is_some()
    }
}

/// Per-page reactive state, created when the landing page mounts and
/// disposed with it.
#[derive(Clone, Copy)]
pub struct PageState {
    pub visibility: RwSignal<VisibilityState>,
    pub hovered: RwSignal<Hover>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            visibility: RwSignal::new(VisibilityState::default()),
            hovered: RwSignal::new(Hover::default()),
        }
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        self.visibility.with(|state| state.is_visible(section))
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered.with(|hover| hover.is_hovered(index))
    }

    pub fn hover_enter(&self, index: usize) {
        self.hovered.maybe_update(|hover| hover.enter(index, PROJECTS.len()));
    }

    pub fn hover_leave(&self) {
        self.hovered.maybe_update(|hover| hover.leave());
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityStore for RwSignal<VisibilityState> {
    fn is_visible(&self, section: SectionId) -> bool {
        // A disposed page reads as fully revealed, so nothing is written.
        self.try_with_untracked(|state| state.is_visible(section))
            .unwrap_or(true)
    }

    fn reveal(&self, sections: &[SectionId]) {
        self.try_update(|state| {
            for section in sections {
                state.reveal(*section);
            }
        });
    }

    fn reveal_all(&self) {
        self.maybe_update(|state| state.reveal_all() > 0);
    }
}

pub fn provide_page_state() -> PageState {
    let state = PageState::new();
    provide_context(state);
    state
}

pub fn use_page_state() -> PageState {
    expect_context::<PageState>()
}
