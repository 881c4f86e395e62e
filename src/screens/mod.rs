pub mod dashboard;

// The whole view is implemented in dashboard.rs as a single tabbed screen:
// - Tab 1: Resource Usage (utilization gauges per service)
// - Tab 2: Cost Analysis (breakdown table + spending trends)
// - Tab 3: Optimization (recommendations with priority badges)
// - Tab 4: Alerts & Monitoring (active alerts + system health)
//
// Above the tabs sits a fixed overview card row; below them a footer with
// key hints or the current status message. A help overlay can be toggled
// from any tab.

pub use dashboard::Dashboard;
