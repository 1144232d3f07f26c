//! Landing page regions.
//!
//! ```text
//! LandingPage
//! ├── Hero
//! ├── BenefitsSection   (RevealSection: section-benefits)
//! ├── PortfolioSection  (RevealSection: section-portfolio)
//! │   └── ProjectCard
//! ├── ServicesSection   (RevealSection: section-services)
//! ├── CallToAction      (RevealSection: section-cta)
//! └── Footer
//! ```

mod benefits;
mod contact;
mod cta;
mod footer;
mod hero;
mod icons;
mod portfolio;
mod reveal;
mod services_panel;

pub use benefits::BenefitsSection;
pub use contact::ContactButton;
pub use cta::CallToAction;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::IconView;
pub use portfolio::{PortfolioSection, ProjectCard};
pub use reveal::{reveal_class, RevealSection};
pub use services_panel::ServicesSection;
