/// Built-in demonstration dataset
///
/// The dashboard renders this dataset as-is; no collector backend is part
/// of this build.

use crate::core::model::{
    Alert, CostTrends, HealthState, Optimization, OverviewMetrics, Priority, ResourceStatus,
    ResourceUsage, ServiceHealth, Severity,
};

/// All collections the dashboard projects into its panels
#[derive(Debug, Clone)]
pub struct Dataset {
    pub overview: OverviewMetrics,
    pub resources: Vec<ResourceUsage>,
    pub optimizations: Vec<Optimization>,
    pub alerts: Vec<Alert>,
    pub trends: CostTrends,
    pub health: Vec<ServiceHealth>,
}

impl Dataset {
    pub fn demo() -> Self {
        Self {
            overview: OverviewMetrics {
                total_cost: 12847.32,
                monthly_cost_change: -8.2,
                active_resources: 247,
                resource_change: 12,
                efficiency: 87,
                efficiency_change: 5.3,
                alerts: 3,
            },
            resources: vec![
                ResourceUsage {
                    name: "Compute (EC2)",
                    usage: 78.0,
                    cost: 4250.00,
                    instances: 45,
                    status: ResourceStatus::Optimal,
                },
                ResourceUsage {
                    name: "Storage (S3)",
                    usage: 65.0,
                    cost: 2100.50,
                    instances: 12,
                    status: ResourceStatus::Warning,
                },
                ResourceUsage {
                    name: "Database (RDS)",
                    usage: 82.0,
                    cost: 3200.75,
                    instances: 8,
                    status: ResourceStatus::Optimal,
                },
                ResourceUsage {
                    name: "Network (CloudFront)",
                    usage: 45.0,
                    cost: 890.25,
                    instances: 15,
                    status: ResourceStatus::Optimal,
                },
                ResourceUsage {
                    name: "Lambda Functions",
                    usage: 35.0,
                    cost: 156.80,
                    instances: 128,
                    status: ResourceStatus::Underutilized,
                },
            ],
            optimizations: vec![
                Optimization {
                    kind: "Right-sizing",
                    description: "3 EC2 instances are over-provisioned",
                    potential: 450.00,
                    priority: Priority::High,
                },
                Optimization {
                    kind: "Reserved Instances",
                    description: "Convert 12 on-demand instances to reserved",
                    potential: 1200.00,
                    priority: Priority::High,
                },
                Optimization {
                    kind: "Storage Optimization",
                    description: "Move infrequently accessed data to cheaper storage",
                    potential: 320.50,
                    priority: Priority::Medium,
                },
                Optimization {
                    kind: "Unused Resources",
                    description: "5 idle load balancers detected",
                    potential: 125.00,
                    priority: Priority::Low,
                },
            ],
            alerts: vec![
                Alert {
                    kind: "cost",
                    severity: Severity::High,
                    message: "Monthly spend projected to exceed budget by 15%",
                    time: "2 hours ago",
                },
                Alert {
                    kind: "performance",
                    severity: Severity::Medium,
                    message: "Database CPU utilization above 85% for 30 minutes",
                    time: "4 hours ago",
                },
                Alert {
                    kind: "security",
                    severity: Severity::Low,
                    message: "3 security groups with overly permissive rules",
                    time: "1 day ago",
                },
            ],
            trends: CostTrends {
                savings: -1127.00,
                avg_daily_spend: 428.24,
                projected_monthly: 12847.00,
                budget_remaining: 2153.00,
            },
            health: vec![
                ServiceHealth {
                    name: "Compute Services",
                    state: HealthState::Healthy,
                },
                ServiceHealth {
                    name: "Storage Services",
                    state: HealthState::Warning,
                },
                ServiceHealth {
                    name: "Network Services",
                    state: HealthState::Healthy,
                },
                ServiceHealth {
                    name: "Database Services",
                    state: HealthState::Healthy,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_usage_within_bounds() {
        for resource in Dataset::demo().resources {
            assert!(
                (0.0..=100.0).contains(&resource.usage),
                "{} usage out of range",
                resource.name
            );
        }
    }

    #[test]
    fn test_demo_costs_non_negative() {
        let data = Dataset::demo();
        assert!(data.overview.total_cost >= 0.0);
        assert!(data.resources.iter().all(|r| r.cost >= 0.0));
        assert!(data.optimizations.iter().all(|o| o.potential >= 0.0));
    }

    #[test]
    fn test_demo_efficiency_within_bounds() {
        assert!(Dataset::demo().overview.efficiency <= 100);
    }

    #[test]
    fn test_demo_alert_count_matches_overview() {
        let data = Dataset::demo();
        assert_eq!(data.overview.alerts as usize, data.alerts.len());
    }
}
