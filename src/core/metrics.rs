/// Derived display values
///
/// Everything here is computed from the dataset at render time; nothing is
/// cached or persisted.

use crate::core::model::Optimization;

/// Share of the total monthly cost attributed to one resource, in percent.
///
/// Returns `None` when the total is zero or negative, so callers render a
/// sentinel instead of NaN or infinity.
pub fn cost_share(cost: f64, total: f64) -> Option<f64> {
    if total > 0.0 {
        Some(cost / total * 100.0)
    } else {
        None
    }
}

/// Sum of the estimated monthly savings across all recommendations
pub fn total_potential(optimizations: &[Optimization]) -> f64 {
    optimizations.iter().map(|o| o.potential).sum()
}

/// Clamp a percentage to [0, 100] for gauge rendering
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::Dataset;

    #[test]
    fn test_cost_shares_sum_to_total() {
        let resources = Dataset::demo().resources;
        let total: f64 = resources.iter().map(|r| r.cost).sum();
        assert!((total - 8598.30).abs() < 1e-9);

        let share_sum: f64 = resources
            .iter()
            .map(|r| cost_share(r.cost, total).unwrap())
            .sum();
        assert!((share_sum - 100.0).abs() < 0.1);
    }

    #[test]
    fn test_cost_share_guards_zero_total() {
        assert_eq!(cost_share(4250.0, 0.0), None);
        assert_eq!(cost_share(4250.0, -1.0), None);
        assert!(cost_share(0.0, 100.0).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_potential_savings() {
        let optimizations = Dataset::demo().optimizations;
        let total = total_potential(&optimizations);
        assert!((total - 2095.50).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(50.0), 50.0);
        assert_eq!(clamp_percent(130.0), 100.0);
    }
}
