mod app;
mod cli;
mod core;
mod screens;
mod utils;
mod widgets;

use anyhow::Result;
use clap::Parser;

use crate::app::App;
use crate::cli::{Cli, Commands};
use crate::core::metrics::{cost_share, total_potential};
use crate::core::{Dataset, Report};
use crate::utils::{capitalize, format_currency, format_share, truncate_string};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No command - run interactive TUI
            let mut app = App::new()?;
            app.run()?;
        }
        Some(Commands::Status) => {
            handle_status();
        }
        Some(Commands::Resources { json }) => {
            handle_resources(json)?;
        }
        Some(Commands::Costs { json }) => {
            handle_costs(json)?;
        }
        Some(Commands::Optimization { json }) => {
            handle_optimization(json)?;
        }
        Some(Commands::Alerts { json }) => {
            handle_alerts(json)?;
        }
        Some(Commands::Report { json }) => {
            handle_report(json)?;
        }
    }

    Ok(())
}

fn handle_status() {
    let data = Dataset::demo();
    let m = &data.overview;

    println!("Cloud Resource Monitor\n");
    println!("Total monthly cost:  ${}", format_currency(m.total_cost));
    println!(
        "Cost change:         {}{:.1}% from last month",
        if m.monthly_cost_change <= 0.0 { "-" } else { "+" },
        m.monthly_cost_change.abs()
    );
    println!(
        "Active resources:    {} ({:+} this week)",
        m.active_resources, m.resource_change
    );
    println!(
        "Efficiency score:    {}% ({:+.1}% improvement)",
        m.efficiency, m.efficiency_change
    );
    println!("Active alerts:       {}", m.alerts);
}

fn handle_resources(json: bool) -> Result<()> {
    let data = Dataset::demo();

    if json {
        println!("{}", serde_json::to_string_pretty(&data.resources)?);
        return Ok(());
    }

    println!("Resource Utilization\n");
    println!(
        "{:<22} {:>6} {:>12} {:>10}  {:<15}",
        "Resource", "Usage", "Cost", "Instances", "Status"
    );
    println!("{}", "-".repeat(70));

    for r in &data.resources {
        println!(
            "{:<22} {:>5.0}% {:>12} {:>10}  {:<15}",
            r.name,
            r.usage,
            format!("${}", format_currency(r.cost)),
            r.instances,
            r.status.label()
        );
    }

    Ok(())
}

fn handle_costs(json: bool) -> Result<()> {
    let data = Dataset::demo();

    if json {
        let report = Report::build(&data);
        println!("{}", serde_json::to_string_pretty(&report.cost_breakdown)?);
        return Ok(());
    }

    let total = data.overview.total_cost;

    println!("Cost Breakdown by Service\n");
    println!("{:<22} {:>12} {:>8}", "Service", "Cost", "Share");
    println!("{}", "-".repeat(45));

    for r in &data.resources {
        println!(
            "{:<22} {:>12} {:>8}",
            r.name,
            format!("${}", format_currency(r.cost)),
            format_share(cost_share(r.cost, total))
        );
    }

    let t = &data.trends;
    println!();
    println!("Average daily spend:     ${}", format_currency(t.avg_daily_spend));
    println!("Projected monthly total: ${}", format_currency(t.projected_monthly));
    println!("Budget remaining:        ${}", format_currency(t.budget_remaining));

    Ok(())
}

fn handle_optimization(json: bool) -> Result<()> {
    let data = Dataset::demo();

    if json {
        println!("{}", serde_json::to_string_pretty(&data.optimizations)?);
        return Ok(());
    }

    println!(
        "Cost Optimization Recommendations (potential savings: ${}/month)\n",
        format_currency(total_potential(&data.optimizations))
    );
    println!(
        "{:<22} {:<8} {:>12}  {:<48}",
        "Type", "Priority", "Savings/mo", "Description"
    );
    println!("{}", "-".repeat(95));

    for o in &data.optimizations {
        println!(
            "{:<22} {:<8} {:>12}  {:<48}",
            o.kind,
            o.priority.label(),
            format!("${}", format_currency(o.potential)),
            truncate_string(o.description, 48)
        );
    }

    Ok(())
}

fn handle_alerts(json: bool) -> Result<()> {
    let data = Dataset::demo();

    if json {
        println!("{}", serde_json::to_string_pretty(&data.alerts)?);
        return Ok(());
    }

    println!("Active Alerts\n");

    for alert in &data.alerts {
        println!(
            "[{}] {} Alert ({})",
            alert.severity.label().to_uppercase(),
            capitalize(alert.kind),
            alert.time
        );
        println!("  {}", alert.message);
    }

    println!("\nSystem Health\n");
    for service in &data.health {
        println!("{:<20} {}", service.name, service.state.label());
    }

    Ok(())
}

fn handle_report(json: bool) -> Result<()> {
    let data = Dataset::demo();

    if json {
        let report = Report::build(&data);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let report = Report::build(&data);
    println!("=== Cloud Monitoring Report ({}) ===\n", report.generated_at);

    handle_status();
    println!();
    handle_resources(false)?;
    println!();
    handle_costs(false)?;
    println!();
    handle_optimization(false)?;
    println!();
    handle_alerts(false)?;

    Ok(())
}
