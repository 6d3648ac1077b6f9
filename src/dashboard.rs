//! Dashboard Data
//!
//! Plain values the chart and stat widgets render. The widgets themselves
//! are opaque renderers; everything they show comes from here.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Period selector on the appointments card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentPeriod {
    #[default]
    Today,
    Week,
    Month,
}

impl FromStr for AppointmentPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(AppointmentPeriod::Today),
            "week" => Ok(AppointmentPeriod::Week),
            "month" => Ok(AppointmentPeriod::Month),
            _ => Err(format!("Unknown appointment period: {}", s)),
        }
    }
}

/// Appointment counts by status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentStats {
    pub completed: u32,
    pub pending: u32,
    pub confirmed: u32,
    pub cancelled: u32,
}

impl AppointmentStats {
    pub fn for_period(period: AppointmentPeriod) -> Self {
        match period {
            AppointmentPeriod::Today => Self {
                completed: 45,
                pending: 12,
                confirmed: 25,
                cancelled: 3,
            },
            AppointmentPeriod::Week => Self {
                completed: 165,
                pending: 28,
                confirmed: 42,
                cancelled: 8,
            },
            AppointmentPeriod::Month => Self {
                completed: 520,
                pending: 85,
                confirmed: 120,
                cancelled: 15,
            },
        }
    }

    pub fn total(&self) -> u32 {
        self.completed + self.pending + self.confirmed + self.cancelled
    }

    /// Doughnut chart slices in display order
    pub fn chart_slices(&self) -> [(&'static str, u32); 4] {
        [
            ("Completed", self.completed),
            ("Pending", self.pending),
            ("Cancelled", self.cancelled),
            ("Confirmed", self.confirmed),
        ]
    }
}

/// Period selector on the revenue card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RevenuePeriod {
    #[default]
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "all")]
    All,
}

impl FromStr for RevenuePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "6m" => Ok(RevenuePeriod::SixMonths),
            "year" => Ok(RevenuePeriod::Year),
            "all" => Ok(RevenuePeriod::All),
            _ => Err(format!("Unknown revenue period: {}", s)),
        }
    }
}

/// Revenue line chart plus the three summary figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub this_month: f64,
    pub last_month: f64,
    pub average: f64,
}

impl RevenueSeries {
    pub fn for_period(period: RevenuePeriod) -> Self {
        let (labels, values, average): (Vec<&str>, Vec<f64>, f64) = match period {
            RevenuePeriod::SixMonths => (
                vec!["Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
                vec![18000.0, 19000.0, 22000.0, 20000.0, 24000.0, 25000.0],
                21000.0,
            ),
            RevenuePeriod::Year => (
                vec![
                    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                    "Dec",
                ],
                vec![
                    12000.0, 15000.0, 13000.0, 17000.0, 16000.0, 18000.0, 19000.0, 22000.0,
                    20000.0, 24000.0, 23000.0, 25000.0,
                ],
                18500.0,
            ),
            RevenuePeriod::All => (
                vec![
                    "2023 Q1", "2023 Q2", "2023 Q3", "2023 Q4", "Jan", "Feb", "Mar", "Apr", "May",
                    "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                ],
                vec![
                    8000.0, 12000.0, 15000.0, 13000.0, 17000.0, 16000.0, 18000.0, 19000.0,
                    22000.0, 20000.0, 24000.0, 23000.0, 25000.0, 28000.0, 26000.0,
                ],
                19200.0,
            ),
        };

        let last_month = match period {
            RevenuePeriod::SixMonths => 24000.0,
            RevenuePeriod::Year | RevenuePeriod::All => 23000.0,
        };

        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            values,
            this_month: 25000.0,
            last_month,
            average,
        }
    }
}

/// Colour scheme of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon on the toggle button (offers the other theme)
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "fa-sun",
            Theme::Light => "fa-moon",
        }
    }

    /// Class applied to `<body>`
    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Dark => "",
            Theme::Light => "light-theme",
        }
    }
}

/// Format a dollar amount as `$25,000.00`
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100);
    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        dollars,
        cents % 100
    )
}

/// `1234567` → `"1,234,567"`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Easing curve used by the count-up stat animation
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Value shown `progress` (0..=1) of the way through a count-up
pub fn animate_value(start: u64, end: u64, progress: f64) -> u64 {
    let eased = ease_out_quart(progress);
    let value = start as f64 + (end as f64 - start as f64) * eased;
    value.floor().max(0.0) as u64
}

/// Value shown on frame `frame` of a `frames`-frame count-up from zero
///
/// Frames are evenly spaced in time; the easing comes from [`animate_value`].
pub fn count_up_frame(target: u64, frame: u32, frames: u32) -> u64 {
    if frames == 0 {
        return target;
    }
    animate_value(0, target, f64::from(frame) / f64::from(frames))
}

/// Bookable treatment on the services page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    Cleaning,
    Filling,
    RootCanal,
    Crown,
    Extraction,
    Whitening,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Cleaning,
        ServiceKind::Filling,
        ServiceKind::RootCanal,
        ServiceKind::Crown,
        ServiceKind::Extraction,
        ServiceKind::Whitening,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ServiceKind::Cleaning => "cleaning",
            ServiceKind::Filling => "filling",
            ServiceKind::RootCanal => "root-canal",
            ServiceKind::Crown => "crown",
            ServiceKind::Extraction => "extraction",
            ServiceKind::Whitening => "whitening",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Cleaning => "Routine Cleaning",
            ServiceKind::Filling => "Dental Filling",
            ServiceKind::RootCanal => "Root Canal Treatment",
            ServiceKind::Crown => "Dental Crown",
            ServiceKind::Extraction => "Tooth Extraction",
            ServiceKind::Whitening => "Teeth Whitening",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| format!("Unknown service: {}", s))
    }
}

/// Display name for a service id; unknown ids get a generic name
pub fn service_name(id: &str) -> &'static str {
    id.parse::<ServiceKind>()
        .map(|kind| kind.name())
        .unwrap_or("Dental Service")
}

/// Info notice raised by a service's "Book" button
pub fn booking_message(id: &str) -> String {
    format!(
        "Booking {}. Please complete the appointment form.",
        service_name(id)
    )
}

/// Entry on the staff page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaffMember {
    pub id: &'static str,
    pub name: &'static str,
}

pub const STAFF: [StaffMember; 4] = [
    StaffMember {
        id: "dr-yajnik",
        name: "Dr. Biren N. Yajnik",
    },
    StaffMember {
        id: "nurse-edith",
        name: "Nurse Edith",
    },
    StaffMember {
        id: "pamela",
        name: "Pamela",
    },
    StaffMember {
        id: "dr-smith",
        name: "Dr. Sarah Smith",
    },
];

/// Display name for a staff id; unknown ids get a generic name
pub fn staff_name(id: &str) -> &'static str {
    STAFF
        .iter()
        .find(|member| member.id == id)
        .map(|member| member.name)
        .unwrap_or("Staff Member")
}

/// Info notice raised by a staff card's "Schedule" button
pub fn staff_schedule_message(id: &str) -> String {
    format!("Loading schedule for {}...", staff_name(id))
}

/// Info notice raised by a staff card's "Edit" button
pub fn staff_edit_message(id: &str) -> String {
    format!("Opening edit form for {}...", staff_name(id))
}

/// Indices of rows whose text contains `query`, case-insensitively
///
/// An empty query matches every row.
pub fn filter_rows<S: AsRef<str>>(rows: &[S], query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.as_ref().to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}
