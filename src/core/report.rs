/// Monitoring report assembly for the CLI surface

use chrono::Local;
use serde::Serialize;

use crate::core::data::Dataset;
use crate::core::metrics::{cost_share, total_potential};
use crate::core::model::{
    Alert, CostTrends, Optimization, OverviewMetrics, ResourceUsage, ServiceHealth,
};

/// One line of the cost breakdown with its share of the monthly total
#[derive(Debug, Serialize)]
pub struct CostLine {
    pub name: &'static str,
    pub cost: f64,
    pub share_percent: Option<f64>,
}

/// Snapshot of the full dashboard dataset plus derived values
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub overview: OverviewMetrics,
    pub resources: Vec<ResourceUsage>,
    pub cost_breakdown: Vec<CostLine>,
    pub cost_trends: CostTrends,
    pub optimizations: Vec<Optimization>,
    pub total_potential_savings: f64,
    pub alerts: Vec<Alert>,
    pub system_health: Vec<ServiceHealth>,
}

impl Report {
    pub fn build(data: &Dataset) -> Self {
        let cost_breakdown = data
            .resources
            .iter()
            .map(|r| CostLine {
                name: r.name,
                cost: r.cost,
                share_percent: cost_share(r.cost, data.overview.total_cost),
            })
            .collect();

        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            overview: data.overview.clone(),
            resources: data.resources.clone(),
            cost_breakdown,
            cost_trends: data.trends.clone(),
            optimizations: data.optimizations.clone(),
            total_potential_savings: total_potential(&data.optimizations),
            alerts: data.alerts.clone(),
            system_health: data.health.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_covers_dataset() {
        let data = Dataset::demo();
        let report = Report::build(&data);

        assert_eq!(report.resources.len(), data.resources.len());
        assert_eq!(report.cost_breakdown.len(), data.resources.len());
        assert_eq!(report.alerts.len(), data.alerts.len());
        assert!((report.total_potential_savings - 2095.50).abs() < 1e-9);
        assert!(report.cost_breakdown.iter().all(|l| l.share_percent.is_some()));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = Report::build(&Dataset::demo());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"total_potential_savings\":2095.5"));
        assert!(json.contains("\"type\":\"cost\""));
    }
}
