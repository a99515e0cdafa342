//! dashboard-report: financial overview for a set of exported rows.
//!
//! Reads financial entries (and optionally appointments) as JSON, projects
//! recurring expenses up to the reference date and prints the overview as
//! JSON, a text summary or the expense table as CSV.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use salon_dashboard::domain::date_math::{self, CalendarDate};
use salon_dashboard::domain::export_service::{format_money, ExportService};
use salon_dashboard::domain::DashboardService;
use salon_dashboard::DashboardConfig;
use serde::de::DeserializeOwned;
use shared::{Appointment, FinancialEntry, FinancialOverview};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "dashboard-report")]
#[command(about = "Financial overview and expense export for the salon dashboard")]
struct Args {
    /// JSON array of financial entries
    #[arg(short, long)]
    entries: PathBuf,

    /// JSON array of appointments
    #[arg(short, long)]
    appointments: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD), defaults to today in UTC
    #[arg(short, long, value_parser = parse_reference)]
    reference: Option<CalendarDate>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the expense table as CSV instead of JSON
    #[arg(long, conflicts_with = "summary")]
    csv: bool,

    /// Print a short text summary instead of JSON
    #[arg(long)]
    summary: bool,

    /// Also write the CSV export into this directory
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn parse_reference(value: &str) -> std::result::Result<CalendarDate, String> {
    date_math::parse_iso(value).ok_or_else(|| format!("'{}' is not a YYYY-MM-DD date", value))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_summary(overview: &FinancialOverview, config: &DashboardConfig) {
    let money = |value: f64| format_money(value, &config.currency_symbol, config.locale);
    let (year, month) = (overview.year.year, overview.month);

    println!("Referência: {}", date_math::format_iso_for_display(&overview.reference_date, config.locale));
    println!(
        "Mês:  receita {}  despesas {}  lucro {}",
        money(month.revenue),
        money(month.expenses),
        money(month.net_profit)
    );
    println!(
        "{}: receita {}  despesas {}  lucro {}",
        year,
        money(overview.year.total_revenue),
        money(overview.year.total_expenses),
        money(overview.year.net_profit)
    );
    for (label, (revenue, expenses)) in overview
        .year
        .labels
        .iter()
        .zip(overview.year.revenue_data.iter().zip(&overview.year.expense_data))
    {
        println!("  {:<4} {:>16} {:>16}", label, money(*revenue), money(*expenses));
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DashboardConfig::load(path).with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter())).init();

    let entries: Vec<FinancialEntry> = read_json(&args.entries)?;
    let appointments: Vec<Appointment> = match &args.appointments {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    let reference = args.reference.unwrap_or_else(CalendarDate::today_utc);
    info!("🚀 dashboard-report for {} ({} entries)", reference, entries.len());

    let dashboard = DashboardService::new(config);
    let overview = dashboard.overview(&entries, &appointments, reference);

    let exporter = ExportService::new(dashboard.config());
    if args.csv || args.out_dir.is_some() {
        let export = exporter.export_expenses_csv(&overview.expenses, reference)?;
        if let Some(dir) = &args.out_dir {
            exporter
                .save_to_dir(&export, dir)
                .with_context(|| format!("Failed to write export into {}", dir.display()))?;
        }
        if args.csv {
            print!("{}", export.csv_content);
            return Ok(());
        }
    }

    if args.summary {
        print_summary(&overview, dashboard.config());
    } else {
        println!("{}", serde_json::to_string_pretty(&overview)?);
    }
    Ok(())
}
