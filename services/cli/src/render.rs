use esg_scorecard::scoring::report::AssessmentReport;
use esg_scorecard::scoring::EmissionsResult;

pub(crate) fn render_report(report: &AssessmentReport) {
    println!("Sustainability scorecard ({})", report.generated_on);
    println!(
        "Sector: {} | Composite: {} | Risk: {} | Alignment: {}",
        report.benchmark.sector.label(),
        report.composite.score,
        report.composite.risk.label(),
        report.composite.alignment.label()
    );

    println!("\nPillar scores");
    for row in report.pillar_rows() {
        println!(
            "- {}: {} (sector weight {:.0}%)",
            row.label,
            row.total,
            row.weight * 100.0
        );
    }

    println!(
        "\nBenchmark: sector average {}, leaders {} ({} vs average)",
        report.benchmark.benchmark.average,
        report.benchmark.benchmark.leaders,
        signed(report.benchmark.delta_vs_average)
    );

    if let Some(emissions) = &report.emissions {
        println!();
        render_emissions(emissions);
    }

    if report.recommendations.is_empty() {
        println!("\nRecommendations: none");
    } else {
        println!("\nRecommendations");
        for rec in &report.recommendations {
            println!(
                "- [{}] {}: {}",
                rec.priority.label(),
                rec.category.label(),
                rec.issue
            );
            println!("  Action: {}", rec.action);
            if let Some(timeline) = rec.timeline {
                println!("  Timeline: {timeline}");
            }
            println!("  Estimated lift: +{} points", rec.estimated_improvement);
        }
    }
}

pub(crate) fn render_emissions(result: &EmissionsResult) {
    println!("Emissions (metric tons CO2e)");
    println!("- Scope 1 (Direct): {:.2}", result.scope1);
    println!("- Scope 2 (Energy): {:.2}", result.scope2);
    println!("- Scope 3 (Value Chain): {:.2}", result.scope3);
    println!(
        "- Total: {:.2} | Per employee: {:.2} ({} intensity)",
        result.total,
        result.per_employee,
        result.intensity.label()
    );
    println!(
        "- Largest source: {} at {}%",
        result.largest.scope.label(),
        result.largest.share_pct
    );
}

fn signed(value: i16) -> String {
    if value >= 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}
