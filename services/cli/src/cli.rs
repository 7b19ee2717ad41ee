use crate::demo::{run_demo, DemoArgs};
use crate::render;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use esg_scorecard::config::AppConfig;
use esg_scorecard::error::AppError;
use esg_scorecard::import::ActivityLedgerImporter;
use esg_scorecard::scoring::{compute_emissions, AssessmentInput, ScorecardEngine};
use esg_scorecard::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "ESG Scorecard",
    about = "Score sustainability assessments and emissions ledgers from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score an assessment document and print the full report
    Score(ScoreArgs),
    /// Compute greenhouse-gas totals from an activity ledger
    Emissions(EmissionsArgs),
    /// Run a canned end-to-end demo assessment (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Assessment JSON document to score
    #[arg(long)]
    input: PathBuf,
    /// Optional activity ledger CSV to include emissions in the report
    #[arg(long)]
    activity_csv: Option<PathBuf>,
    /// Override the employee count from the assessment profile
    #[arg(long)]
    employees: Option<u32>,
    /// Report date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    report_date: Option<NaiveDate>,
    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct EmissionsArgs {
    /// Activity ledger CSV (Category,Quantity rows)
    #[arg(long)]
    activity_csv: PathBuf,
    /// Employee headcount for intensity metrics
    #[arg(long)]
    employees: u32,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli.command.unwrap_or(Command::Demo(DemoArgs::default()));

    match command {
        Command::Score(args) => run_score(args),
        Command::Emissions(args) => run_emissions(args),
        Command::Demo(args) => run_demo(args),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        activity_csv,
        employees,
        report_date,
        json,
    } = args;

    let document = std::fs::read_to_string(&input)?;
    let mut assessment: AssessmentInput = serde_json::from_str(&document)?;
    if let Some(count) = employees {
        assessment.profile.employee_count = count;
    }

    let report_date = report_date.unwrap_or_else(|| Local::now().date_naive());
    let engine = ScorecardEngine::new();

    let report = match activity_csv {
        Some(path) => {
            let activity = ActivityLedgerImporter::from_path(path)?;
            engine.assess_with_activity(&assessment, &activity, report_date)?
        }
        None => engine.assess(&assessment, report_date),
    };

    info!(
        composite = report.composite.score,
        sector = assessment.profile.sector.label(),
        "assessment scored"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::render_report(&report);
    }

    Ok(())
}

fn run_emissions(args: EmissionsArgs) -> Result<(), AppError> {
    let activity = ActivityLedgerImporter::from_path(&args.activity_csv)?;
    let result = compute_emissions(&activity, args.employees)?;
    render::render_emissions(&result);
    Ok(())
}
