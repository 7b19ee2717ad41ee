//! Assembles the serializable assessment report the presentation and
//! persistence collaborators consume verbatim.

use super::composite::{score_composite, sector_benchmark, CompositeResult, SectorBenchmark};
use super::domain::{PillarScores, Sector};
use super::emissions::EmissionsResult;
use super::recommendations::{generate_recommendations, Recommendation};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the composite compares to sector reference scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub sector: Sector,
    pub benchmark: SectorBenchmark,
    /// Composite minus the sector average; negative means trailing peers.
    pub delta_vs_average: i16,
}

/// One pillar row for tabular rendering.
#[derive(Debug, Clone, Serialize)]
pub struct PillarRow {
    pub label: &'static str,
    pub total: u8,
    pub weight: f64,
}

/// Full output of one assessment run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub generated_on: NaiveDate,
    pub scores: PillarScores,
    pub composite: CompositeResult,
    pub benchmark: BenchmarkComparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissions: Option<EmissionsResult>,
    pub recommendations: Vec<Recommendation>,
}

impl AssessmentReport {
    pub(super) fn build(
        scores: PillarScores,
        sector: Sector,
        emissions: Option<EmissionsResult>,
        generated_on: NaiveDate,
    ) -> Self {
        let composite = score_composite(
            scores.environmental.total,
            scores.social.total,
            scores.governance.total,
            sector,
        );
        let benchmark = sector_benchmark(sector);
        let recommendations = generate_recommendations(&scores, sector);

        Self {
            generated_on,
            scores,
            composite,
            benchmark: BenchmarkComparison {
                sector,
                benchmark,
                delta_vs_average: i16::from(composite.score) - i16::from(benchmark.average),
            },
            emissions,
            recommendations,
        }
    }

    /// Pillar totals paired with the sector weights that blended them.
    pub fn pillar_rows(&self) -> [PillarRow; 3] {
        [
            PillarRow {
                label: "Environmental",
                total: self.scores.environmental.total,
                weight: self.composite.weights.environmental,
            },
            PillarRow {
                label: "Social",
                total: self.scores.social.total,
                weight: self.composite.weights.social,
            },
            PillarRow {
                label: "Governance",
                total: self.scores.governance.total,
                weight: self.composite.weights.governance,
            },
        ]
    }
}
