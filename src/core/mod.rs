pub mod data;
pub mod metrics;
pub mod model;
pub mod report;

pub use data::Dataset;
pub use model::{
    Alert, BadgeVariant, CostTrends, HealthState, Optimization, OverviewMetrics, Priority,
    ResourceStatus, ResourceUsage, ServiceHealth, Severity,
};
pub use report::Report;
