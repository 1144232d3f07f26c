//! Fixed copy and content tables rendered by the landing page.

use crate::models::{Benefit, Icon, Project, Service};

pub const BRAND_NAME: &str = "Workflow Automation Solutions";
pub const TAGLINE: &str = "Empowering SMBs through intelligent automation";
pub const PHONE_DISPLAY: &str = "+65 9834 6866";
pub const CONTACT_EMAIL: &str = "Leonard.koo.automateworkflows@gmail.com";
pub const COPYRIGHT: &str = "© 2025 Workflow Automation Solutions. All rights reserved.";

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Pause & View",
        url: "https://pauseandview.com",
        description: "Streamlined content management and viewing platform",
        icon: Icon::Sparkles,
    },
    Project {
        name: "Interview Prep 360",
        url: "http://www.interviewprep360.com",
        description: "Comprehensive interview preparation automation",
        icon: Icon::Code,
    },
    Project {
        name: "TaskHarbor",
        url: "https://taskharbor.co",
        description: "Intelligent task management and workflow optimization",
        icon: Icon::CheckCircle,
    },
    Project {
        name: "AI Personal Assistant",
        url: "#",
        description: "Email management, scheduling, and contact automation",
        icon: Icon::Bot,
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: Icon::Clock,
        title: "Save Time",
        description: "Automate repetitive tasks and focus on what matters most",
    },
    Benefit {
        icon: Icon::DollarSign,
        title: "Cut Costs",
        description: "Reduce operational expenses with intelligent automation",
    },
    Benefit {
        icon: Icon::Zap,
        title: "Boost Efficiency",
        description: "Streamline workflows and maximize productivity",
    },
];

// Rendered as two columns of two.
pub const SERVICES: &[Service] = &[
    Service {
        title: "Discovery & Analysis",
        description: "We identify automation opportunities in your workflows",
    },
    Service {
        title: "Custom Solutions",
        description: "Tailored automation strategies for your specific needs",
    },
    Service {
        title: "Implementation",
        description: "Seamless integration with your existing systems",
    },
    Service {
        title: "Ongoing Support",
        description: "Continuous optimization and assistance",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn projects_keep_their_order() {
        let names: Vec<_> = PROJECTS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "Pause & View",
                "Interview Prep 360",
                "TaskHarbor",
                "AI Personal Assistant"
            ]
        );
    }

    #[test]
    fn only_the_assistant_is_unlinked() {
        let unlinked: Vec<_> = PROJECTS
            .iter()
            .filter(|p| p.link().is_none())
            .map(|p| p.name)
            .collect();
        assert_eq!(unlinked, vec!["AI Personal Assistant"]);
    }

    #[test]
    fn tables_are_populated() {
        assert_eq!(BENEFITS.len(), 3);
        assert_eq!(SERVICES.len(), 4);
        assert!(BENEFITS.iter().all(|b| !b.title.is_empty()));
    }
}
