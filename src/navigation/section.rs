//! Dashboard sections

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::NavigationError;

/// One mutually-exclusive view of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Appointments,
    Patients,
    Treatments,
    Billing,
    Staff,
    Services,
    Communications,
    Reports,
}

impl Section {
    /// All sections in sidebar order
    pub const ALL: [Section; 9] = [
        Section::Dashboard,
        Section::Appointments,
        Section::Patients,
        Section::Treatments,
        Section::Billing,
        Section::Staff,
        Section::Services,
        Section::Communications,
        Section::Reports,
    ];

    /// Identifier used in URLs, element ids and storage
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Appointments => "appointments",
            Section::Patients => "patients",
            Section::Treatments => "treatments",
            Section::Billing => "billing",
            Section::Staff => "staff",
            Section::Services => "services",
            Section::Communications => "communications",
            Section::Reports => "reports",
        }
    }

    /// Page header text: the identifier with its first letter capitalised
    pub fn title(&self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Font Awesome icon shown next to the sidebar entry
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "fa-tachometer-alt",
            Section::Appointments => "fa-calendar-check",
            Section::Patients => "fa-user-injured",
            Section::Treatments => "fa-tooth",
            Section::Billing => "fa-file-invoice-dollar",
            Section::Staff => "fa-user-md",
            Section::Services => "fa-concierge-bell",
            Section::Communications => "fa-comments",
            Section::Reports => "fa-chart-line",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.id() == s)
            .ok_or_else(|| NavigationError::UnknownSection(s.to_string()))
    }
}
