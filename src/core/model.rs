/// Domain model for the monitoring dashboard
///
/// Status, severity, and priority are independent enumerations, each
/// driving its own display mapping.

use ratatui::style::{Color, Modifier, Style};
use serde::Serialize;

/// Top-level account metrics shown in the overview cards
#[derive(Debug, Clone, Serialize)]
pub struct OverviewMetrics {
    pub total_cost: f64,
    pub monthly_cost_change: f64,
    pub active_resources: u32,
    pub resource_change: i32,
    pub efficiency: u8,
    pub efficiency_change: f64,
    pub alerts: u32,
}

/// One monitored service category with utilization and monthly cost
#[derive(Debug, Clone, Serialize)]
pub struct ResourceUsage {
    pub name: &'static str,
    pub usage: f64,
    pub cost: f64,
    pub instances: u32,
    pub status: ResourceStatus,
}

/// A suggested cost-saving action with estimated monthly savings
#[derive(Debug, Clone, Serialize)]
pub struct Optimization {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub potential: f64,
    pub priority: Priority,
}

/// A detected issue with a severity tier and free-text message
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub severity: Severity,
    pub message: &'static str,
    pub time: &'static str,
}

/// Spending trend figures shown on the costs tab
#[derive(Debug, Clone, Serialize)]
pub struct CostTrends {
    pub savings: f64,
    pub avg_daily_spend: f64,
    pub projected_monthly: f64,
    pub budget_remaining: f64,
}

/// Aggregate health of one infrastructure service group
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    pub name: &'static str,
    pub state: HealthState,
}

/// Utilization status of a resource
///
/// Conversions from free-form strings never fail; anything unrecognized
/// maps to `Unknown` and renders with the neutral color and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Optimal,
    Warning,
    Underutilized,
    Unknown,
}

impl From<&str> for ResourceStatus {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "optimal" => ResourceStatus::Optimal,
            "warning" => ResourceStatus::Warning,
            "underutilized" => ResourceStatus::Underutilized,
            _ => ResourceStatus::Unknown,
        }
    }
}

impl ResourceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceStatus::Optimal => "optimal",
            ResourceStatus::Warning => "warning",
            ResourceStatus::Underutilized => "underutilized",
            ResourceStatus::Unknown => "unknown",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ResourceStatus::Optimal => Color::Green,
            ResourceStatus::Warning => Color::Yellow,
            ResourceStatus::Underutilized => Color::Blue,
            ResourceStatus::Unknown => Color::Gray,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ResourceStatus::Optimal => "✓",
            ResourceStatus::Warning => "⚠",
            ResourceStatus::Underutilized => "↓",
            ResourceStatus::Unknown => "·",
        }
    }
}

/// Priority tier of an optimization recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Priority::High => BadgeVariant::Destructive,
            Priority::Medium => BadgeVariant::Default,
            Priority::Low => BadgeVariant::Secondary,
        }
    }
}

/// Severity tier of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            _ => Severity::Low,
        }
    }
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Severity::High => BadgeVariant::Destructive,
            Severity::Medium => BadgeVariant::Default,
            Severity::Low => BadgeVariant::Secondary,
        }
    }

    /// Border color for alert panels
    pub fn color(&self) -> Color {
        match self {
            Severity::High => Color::Red,
            Severity::Medium => Color::Yellow,
            Severity::Low => Color::Blue,
        }
    }
}

/// Visual variant for badge spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Destructive,
    Default,
    Secondary,
}

impl BadgeVariant {
    pub fn style(&self) -> Style {
        match self {
            BadgeVariant::Destructive => Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            BadgeVariant::Default => Style::default().bg(Color::Blue).fg(Color::White),
            BadgeVariant::Secondary => Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }
}

/// Aggregate health state of a service group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Warning,
}

impl HealthState {
    pub fn label(&self) -> &'static str {
        match self {
            HealthState::Healthy => "Healthy",
            HealthState::Warning => "Warning",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            HealthState::Healthy => Color::Green,
            HealthState::Warning => Color::Yellow,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            HealthState::Healthy => "✓",
            HealthState::Warning => "⚠",
        }
    }

    pub fn badge_style(&self) -> Style {
        match self {
            HealthState::Healthy => Style::default().bg(Color::Green).fg(Color::Black),
            HealthState::Warning => Style::default().bg(Color::Yellow).fg(Color::Black),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classifier_is_total() {
        for input in ["optimal", "warning", "underutilized", "decommissioned", ""] {
            let status = ResourceStatus::from(input);
            assert!(!status.label().is_empty());
            assert!(!status.icon().is_empty());
            // color() is exhaustive over the enum, so reaching here is enough
            let _ = status.color();
        }
        assert_eq!(ResourceStatus::from("optimal"), ResourceStatus::Optimal);
        assert_eq!(ResourceStatus::from("WARNING"), ResourceStatus::Warning);
        assert_eq!(ResourceStatus::from("underutilized"), ResourceStatus::Underutilized);
        assert_eq!(ResourceStatus::from("decommissioned"), ResourceStatus::Unknown);
        assert_eq!(ResourceStatus::Unknown.color(), Color::Gray);
        assert_eq!(ResourceStatus::Unknown.icon(), "·");
    }

    #[test]
    fn test_priority_badge_mapping() {
        assert_eq!(Priority::from("high").badge(), BadgeVariant::Destructive);
        assert_eq!(Priority::from("medium").badge(), BadgeVariant::Default);
        assert_eq!(Priority::from("low").badge(), BadgeVariant::Secondary);
        // Anything unrecognized falls into the secondary branch
        assert_eq!(Priority::from("urgent").badge(), BadgeVariant::Secondary);
    }

    #[test]
    fn test_severity_badge_mapping() {
        assert_eq!(Severity::from("high").badge(), BadgeVariant::Destructive);
        assert_eq!(Severity::from("medium").badge(), BadgeVariant::Default);
        assert_eq!(Severity::from("low").badge(), BadgeVariant::Secondary);
        assert_eq!(Severity::from("informational").badge(), BadgeVariant::Secondary);
    }

    #[test]
    fn test_severity_colors_are_distinct() {
        assert_eq!(Severity::High.color(), Color::Red);
        assert_eq!(Severity::Medium.color(), Color::Yellow);
        assert_eq!(Severity::Low.color(), Color::Blue);
    }
}
