//! Daycare Simulator CLI
//!
//! Command-line interface for running pro-forma projections

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use daycare_simulator::dashboard::{DashboardClientConfig, DashboardService, HttpDashboardClient};
use daycare_simulator::input::{load_input, load_inputs};
use daycare_simulator::insights::KeyMetrics;
use daycare_simulator::projection::export::{save_monthly_csv, save_yearly_csv};
use daycare_simulator::{FinancialInput, ProFormaEngine, ProjectionConfig, ProjectionResult, ScenarioRunner};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "daycare_simulator", version, about = "Daycare Operations Simulator pro-forma tools")]
struct Cli {
    /// Calendar year of the first projected month (defaults to the current year)
    #[arg(long, global = true)]
    year: Option<i32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project one saved wizard snapshot
    Project {
        /// Wizard snapshot (JSON)
        input: PathBuf,

        /// Backend base URL; the local projection is used when absent or unreachable
        #[arg(long, env = "SIMULATOR_BACKEND_URL")]
        endpoint: Option<String>,

        #[arg(long, env = "SIMULATOR_ACCESS_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Write the monthly series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the yearly comparison to this CSV file
        #[arg(long)]
        yearly_csv: Option<PathBuf>,

        /// Print the tagged dashboard JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Project a JSON array of snapshots in parallel
    Batch {
        inputs: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match cli.year {
        Some(year) => ProjectionConfig::for_year(year),
        None => ProjectionConfig::default(),
    };

    match cli.command {
        Command::Project { input, endpoint, token, csv, yearly_csv, json } => {
            let snapshot = load_input(&input)
                .with_context(|| format!("failed to load {}", input.display()))?;

            let remote = match endpoint {
                Some(url) => {
                    let mut client_config = DashboardClientConfig::new(url);
                    client_config.access_token = token;
                    Some(HttpDashboardClient::new(client_config).context("failed to build backend client")?)
                }
                None => None,
            };

            let service = DashboardService::new(remote, ProFormaEngine::new(config));
            let dashboard = service.load(&snapshot).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&dashboard)?);
            } else {
                println!("Daycare Simulator v{}", env!("CARGO_PKG_VERSION"));
                println!("======================\n");
                println!("Source: {}", dashboard.kind());
                print_report(&snapshot, dashboard.projection());
            }

            if let Some(path) = csv {
                save_monthly_csv(&path, dashboard.projection())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("\nMonthly series written to: {}", path.display());
            }

            if let Some(path) = yearly_csv {
                save_yearly_csv(&path, dashboard.projection())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Yearly comparison written to: {}", path.display());
            }
        }
        Command::Batch { inputs } => {
            let snapshots = load_inputs(&inputs)
                .with_context(|| format!("failed to load {}", inputs.display()))?;

            let runner = ScenarioRunner::new(config);
            let results = runner.run_batch(&snapshots);

            println!("{:<30} {:>14} {:>14} {:>14} {:>10}", "Business", "Revenue", "Expenses", "Profit", "Util %");
            println!("{}", "-".repeat(86));
            for (snapshot, result) in snapshots.iter().zip(&results) {
                let next = result.summary.next_year;
                println!("{:<30} {:>14.2} {:>14.2} {:>14.2} {:>10.2}",
                    snapshot.business_name, next.revenue, next.expenses, next.profit, next.utilization);
            }
        }
    }

    Ok(())
}

fn print_report(input: &FinancialInput, result: &ProjectionResult) {
    println!("Business: {}", input.business_name);
    println!();

    println!("{:<14} {:>14} {:>14} {:>14} {:>10}", "Period", "Revenue", "Expenses", "Profit", "Util %");
    println!("{}", "-".repeat(70));
    for row in &result.yearly_comparison {
        println!("{:<14} {:>14.2} {:>14.2} {:>14.2} {:>10.2}",
            row.period_label, row.revenue, row.expenses, row.profit, row.utilization);
    }

    let growth = result.summary.growth_rates;
    println!("\nGrowth: revenue {:+.1}%, expenses {:+.1}%, profit {:+.1}%, utilization {:+.1}%",
        growth.revenue, growth.expenses, growth.profit, growth.utilization);

    println!("\nGoals:");
    for goal in &result.goal_progress {
        println!("  {:<22} target {:>6.1}%  achieved {:>6.1}%",
            goal.goal_type, goal.target_percentage, goal.achieved_percentage);
    }

    println!("\nMonthly series:");
    println!("{:>8} {:>12} {:>12} {:>8}", "Month", "Revenue", "Expenses", "Util %");
    for point in &result.monthly_series {
        println!("{:>8} {:>12.2} {:>12.2} {:>8.2}",
            point.month_label, point.revenue, point.expenses, point.utilization);
    }

    let metrics = KeyMetrics::from_input(input);
    println!("\nKey Metrics:");
    println!("  Net Monthly Income: ${:.2}", metrics.net_monthly_income);
    match metrics.break_even_enrollment {
        Some(students) => println!("  Break-even Enrollment: {} students", students),
        None => println!("  Break-even Enrollment: n/a"),
    }
    if let Some(largest) = &metrics.largest_expense {
        println!("  Largest Expense: {} ({:.1}% of expenses)",
            largest.category.as_str(), largest.percentage_of_total_expenses);
    }
    println!("  Capacity Utilization: {:.1}%", metrics.capacity_utilization);
}
