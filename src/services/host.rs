//! Browser capabilities the page consumes, behind traits so the tracker and
//! the contact dispatcher can run against the real DOM or a recording fake.

use std::rc::Rc;

use thiserror::Error;

use crate::services::visibility::{IntersectionEntry, TrackerOptions};

/// Receives every batch of intersection entries delivered by the host.
pub type EntrySink = Rc<dyn Fn(&[IntersectionEntry])>;

/// Errors raised by the host environment
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("IntersectionObserver is not supported by this browser")]
    ObserverUnsupported,
    #[error("the browser blocked opening a new window")]
    PopupBlocked,
    #[error("JavaScript error: {0}")]
    Js(String),
}

/// A live intersection subscription.
pub trait SectionObserver {
    /// Stops delivery of further entries. Only ever called once per observer.
    fn disconnect(&mut self);
}

/// Creates intersection subscriptions over the page's tagged sections.
pub trait ObserverHost {
    type Observer: SectionObserver;

    /// Registers an observer with `options` and starts observing every
    /// element tagged as a section. Entries are forwarded to `sink`.
    fn connect(&self, options: &TrackerOptions, sink: EntrySink)
        -> Result<Self::Observer, HostError>;
}

/// Window navigation used by the contact buttons.
pub trait Navigator {
    /// Opens `uri` in a new browsing context.
    fn open_in_new_context(&self, uri: &str) -> Result<(), HostError>;

    /// Points the current browsing context at `uri`.
    fn navigate(&self, uri: &str) -> Result<(), HostError>;
}
