use std::fmt;

/// DOM id prefix shared by every trackable section.
pub const SECTION_PREFIX: &str = "section-";

/// A page region that fades in the first time it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Benefits,
    Portfolio,
    Services,
    Cta,
}

impl SectionId {
    /// Every trackable section, in page order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Benefits,
        SectionId::Portfolio,
        SectionId::Services,
        SectionId::Cta,
    ];

    /// The `id` attribute rendered on the section's root element.
    pub fn dom_id(&self) -> &'static str {
        match self {
            SectionId::Benefits => "section-benefits",
            SectionId::Portfolio => "section-portfolio",
            SectionId::Services => "section-services",
            SectionId::Cta => "section-cta",
        }
    }

    /// Maps a DOM id back to its section. Ids outside the known set yield `None`.
    pub fn from_dom_id(id: &str) -> Option<Self> {
        let key = id.strip_prefix(SECTION_PREFIX)?;
        match key {
            "benefits" => Some(SectionId::Benefits),
            "portfolio" => Some(SectionId::Portfolio),
            "services" => Some(SectionId::Services),
            "cta" => Some(SectionId::Cta),
            _ => None,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}
