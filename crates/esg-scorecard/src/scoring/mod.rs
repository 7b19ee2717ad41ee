//! The scoring core: emissions calculator, pillar scorers, sector-weighted
//! composite, and the recommendation generator, orchestrated by
//! [`ScorecardEngine`]. Raw answers flow one way through the components;
//! nothing here touches shared mutable state.

pub mod composite;
pub mod domain;
pub mod emissions;
pub mod pillars;
pub mod recommendations;
pub mod report;

pub use composite::{
    score_composite, sector_benchmark, sector_weights, AlignmentTier, CompositeResult, RiskLevel,
    SectorBenchmark, SectorWeights,
};
pub use domain::{
    ActivityData, AssessmentInput, EnvironmentalAssessment, EnvironmentalScore,
    GovernanceAssessment, GovernanceScore, MeasurementLevel, OrganizationProfile,
    OrganizationSize, PillarScores, Sector, SocialAssessment, SocialScore, TargetType,
};
pub use emissions::{
    compute_emissions, EmissionFactors, EmissionScope, EmissionsCalculator, EmissionsError,
    EmissionsResult, IntensityClass,
};
pub use pillars::{score_environmental, score_governance, score_social};
pub use recommendations::{
    generate_recommendations, Category, EffortLevel, Priority, Recommendation,
    MAX_RECOMMENDATIONS,
};
pub use report::AssessmentReport;

use chrono::NaiveDate;
use tracing::debug;

/// Stateless orchestrator running one assessment through every component.
///
/// The engine owns nothing but the emission factor table, so one instance
/// can serve concurrent scoring requests.
#[derive(Debug, Clone, Default)]
pub struct ScorecardEngine {
    calculator: EmissionsCalculator,
}

impl ScorecardEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a recalibrated factor table instead of the default.
    pub fn with_factors(factors: EmissionFactors) -> Self {
        Self {
            calculator: EmissionsCalculator::new(factors),
        }
    }

    /// Score the three pillars of one submission.
    pub fn score(&self, input: &AssessmentInput) -> PillarScores {
        PillarScores {
            environmental: score_environmental(&input.environmental),
            social: score_social(&input.social),
            governance: score_governance(&input.governance),
        }
    }

    /// Full report without activity data: pillar scores, composite,
    /// benchmark comparison, and recommendations.
    pub fn assess(&self, input: &AssessmentInput, generated_on: NaiveDate) -> AssessmentReport {
        let scores = self.score(input);
        debug!(
            environmental = scores.environmental.total,
            social = scores.social.total,
            governance = scores.governance.total,
            sector = input.profile.sector.label(),
            "pillars scored"
        );
        AssessmentReport::build(scores, input.profile.sector, None, generated_on)
    }

    /// Full report including emissions computed from an activity ledger.
    /// Requires `profile.employee_count > 0`.
    pub fn assess_with_activity(
        &self,
        input: &AssessmentInput,
        activity: &ActivityData,
        generated_on: NaiveDate,
    ) -> Result<AssessmentReport, EmissionsError> {
        let emissions = self
            .calculator
            .compute(activity, input.profile.employee_count)?;
        let scores = self.score(input);
        Ok(AssessmentReport::build(
            scores,
            input.profile.sector,
            Some(emissions),
            generated_on,
        ))
    }
}
