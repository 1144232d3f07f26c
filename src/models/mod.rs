pub mod content;
pub mod section;

pub use content::{Benefit, Icon, Project, Service, NO_LINK};
pub use section::{SectionId, SECTION_PREFIX};
