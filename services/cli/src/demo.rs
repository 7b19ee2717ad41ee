use crate::render;
use chrono::{Local, NaiveDate};
use clap::Args;
use esg_scorecard::error::AppError;
use esg_scorecard::import::ActivityLedgerImporter;
use esg_scorecard::scoring::{
    AssessmentInput, EnvironmentalAssessment, GovernanceAssessment, MeasurementLevel,
    OrganizationProfile, OrganizationSize, ScorecardEngine, Sector, SocialAssessment, TargetType,
};
use std::io::Cursor;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reporting date (defaults to today).
    #[arg(long, value_parser = crate::cli::parse_date)]
    pub(crate) report_date: Option<NaiveDate>,
    /// Skip the emissions portion of the demo.
    #[arg(long)]
    pub(crate) skip_emissions: bool,
}

const DEMO_LEDGER: &str = "Category,Quantity\n\
    Natural Gas,50000\n\
    Diesel,2000\n\
    Gasoline,3000\n\
    Refrigerants,50\n\
    Electricity,500000\n\
    Steam,1000\n\
    Business Travel,100000\n\
    Employee Commute,250000\n\
    Waste,50\n\
    Purchased Goods,500\n";

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let report_date = args.report_date.unwrap_or_else(|| Local::now().date_naive());
    let input = demo_assessment();
    let engine = ScorecardEngine::new();

    println!("ESG scorecard demo: mid-size manufacturer, partial program\n");

    let report = if args.skip_emissions {
        engine.assess(&input, report_date)
    } else {
        let activity = ActivityLedgerImporter::from_reader(Cursor::new(DEMO_LEDGER))?;
        engine.assess_with_activity(&input, &activity, report_date)?
    };

    render::render_report(&report);
    Ok(())
}

fn demo_assessment() -> AssessmentInput {
    AssessmentInput {
        profile: OrganizationProfile {
            sector: Sector::Manufacturing,
            size: OrganizationSize::Medium,
            employee_count: 100,
        },
        environmental: EnvironmentalAssessment {
            measurement_level: MeasurementLevel::Scope1And2,
            has_reduction_targets: true,
            target_type: TargetType::Intensity,
            current_progress_pct: 2.0,
            renewable_energy_pct: 15.0,
            energy_efficiency_program: true,
            water_use_tracked: true,
            recycling_program: true,
            waste_diversion_pct: 20.0,
            environmental_policy: true,
            ..EnvironmentalAssessment::default()
        },
        social: SocialAssessment {
            safety_management_coverage_pct: 60.0,
            zero_fatalities: true,
            safety_training: true,
            recordable_injuries: 3,
            hours_worked: 210_000.0,
            workforce_female_pct: 38.0,
            dei_policy: true,
            living_wage_commitment: true,
            grievance_mechanism: true,
            data_privacy_policy: true,
            ..SocialAssessment::default()
        },
        governance: GovernanceAssessment {
            audit_committee: true,
            code_of_conduct: true,
            whistleblower_channel: true,
            risk_framework: true,
            sustainability_reporting: true,
            ..GovernanceAssessment::default()
        },
    }
}
