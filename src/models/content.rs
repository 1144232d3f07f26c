/// Sentinel url meaning "no external link".
pub const NO_LINK: &str = "#";

/// Line icons used across the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Bot,
    CheckCircle,
    Clock,
    Code,
    DollarSign,
    Mail,
    MessageCircle,
    Sparkles,
    Zap,
}

/// A portfolio project shown in the "Success Stories" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

impl Project {
    /// External link for the "View Project" affordance, if the project has one.
    pub fn link(&self) -> Option<&'static str> {
        (self.url != NO_LINK).then_some(self.url)
    }
}

/// A card in the "Why Automate" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// An item in the "What We Do" panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}
