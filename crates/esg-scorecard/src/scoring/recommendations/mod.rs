//! Rule-based recommendation generator. A fixed, ordered rule set compares
//! pillar totals and sub-scores against thresholds, emits fully-formed
//! recommendations, and the result is sorted and capped deterministically.

mod rules;

use super::domain::{PillarScores, Sector};
use serde::{Deserialize, Serialize};

/// Hard cap on the number of recommendations returned per run.
pub const MAX_RECOMMENDATIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Environmental,
    Emissions,
    Energy,
    Water,
    Waste,
    Social,
    Safety,
    Diversity,
    Labor,
    Governance,
    Board,
    Ethics,
    Transparency,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Environmental => "Environmental Management",
            Self::Emissions => "Emissions",
            Self::Energy => "Energy",
            Self::Water => "Water",
            Self::Waste => "Waste",
            Self::Social => "Social Performance",
            Self::Safety => "Health & Safety",
            Self::Diversity => "Diversity & Inclusion",
            Self::Labor => "Labor Practices",
            Self::Governance => "Governance",
            Self::Board => "Board Composition",
            Self::Ethics => "Ethics & Integrity",
            Self::Transparency => "Transparency & Reporting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortLevel {
    Low,
    Medium,
    High,
}

impl EffortLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One improvement action. Constructed fresh on every scoring run; ordering
/// and truncation are functions of the scores alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: Category,
    pub issue: String,
    pub impact: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<EffortLevel>,
    /// Estimated composite score lift if the action is completed.
    pub estimated_improvement: u8,
}

/// Evaluate the full rule set for one scoring run.
///
/// The returned list is sorted by priority (critical first), then by
/// descending estimated improvement with stable tie order, and never holds
/// more than [`MAX_RECOMMENDATIONS`] entries.
pub fn generate_recommendations(scores: &PillarScores, sector: Sector) -> Vec<Recommendation> {
    let mut collected = rules::evaluate(scores, sector);

    collected.sort_by_key(|rec| {
        (
            rec.priority.rank(),
            std::cmp::Reverse(rec.estimated_improvement),
        )
    });
    collected.truncate(MAX_RECOMMENDATIONS);
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::domain::{EnvironmentalScore, GovernanceScore, SocialScore};

    fn uniform_scores(total: u8, sub: u8) -> PillarScores {
        PillarScores {
            environmental: EnvironmentalScore {
                total,
                emissions: sub,
                energy: sub,
                water: sub,
                waste: sub,
                biodiversity: sub,
                compliance: sub,
            },
            social: SocialScore {
                total,
                safety: sub,
                diversity: sub,
                labor_practices: sub,
                human_rights: sub,
                supply_chain: sub,
                customer_community: sub,
            },
            governance: GovernanceScore {
                total,
                board: sub,
                executive: sub,
                ethics: sub,
                risk: sub,
                transparency: sub,
            },
        }
    }

    #[test]
    fn failing_assessment_yields_all_three_pillar_criticals() {
        let recs = generate_recommendations(&uniform_scores(0, 0), Sector::Other);

        let criticals: Vec<_> = recs
            .iter()
            .filter(|rec| rec.priority == Priority::Critical)
            .collect();
        assert_eq!(criticals.len(), 3);
        assert!(criticals.iter().any(|r| r.category == Category::Environmental));
        assert!(criticals.iter().any(|r| r.category == Category::Social));
        assert!(criticals.iter().any(|r| r.category == Category::Governance));
    }

    #[test]
    fn strong_assessment_yields_nothing() {
        let recs = generate_recommendations(&uniform_scores(90, 90), Sector::Manufacturing);
        assert!(recs.is_empty());
    }

    #[test]
    fn output_is_capped_and_sorted() {
        // Totals above the pillar floor with every sub-dimension weak: all
        // ten sub-dimension rules fire, plus sector and quick-win entries.
        let recs = generate_recommendations(&uniform_scores(35, 5), Sector::Manufacturing);

        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        for pair in recs.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.priority.rank() <= b.priority.rank(), "priority order broken");
            if a.priority == b.priority {
                assert!(
                    a.estimated_improvement >= b.estimated_improvement,
                    "improvement order broken within {:?}",
                    a.priority
                );
            }
        }
    }

    #[test]
    fn issue_text_is_parameterized_with_the_observed_score() {
        let scores = uniform_scores(12, 12);
        let recs = generate_recommendations(&scores, Sector::Other);
        let environmental = recs
            .iter()
            .find(|rec| rec.category == Category::Environmental)
            .expect("critical environmental entry present");
        assert!(environmental.issue.contains("12"));
    }

    #[test]
    fn sub_dimension_rules_hold_fire_below_the_pillar_floor() {
        // Sub-scores are weak, but so is the whole pillar; the critical
        // pillar entry should stand alone rather than piling on.
        let recs = generate_recommendations(&uniform_scores(20, 5), Sector::Other);
        assert_eq!(recs.len(), 3);
        assert!(recs.iter().all(|rec| rec.priority == Priority::Critical));
    }

    #[test]
    fn quick_win_is_suppressed_when_energy_already_flagged() {
        // Energy sub-score below 40 fires the energy rule, which must
        // suppress the renewable quick win for the same category.
        let mut scores = uniform_scores(45, 80);
        scores.environmental.energy = 20;
        let recs = generate_recommendations(&scores, Sector::Other);

        let energy_entries: Vec<_> = recs
            .iter()
            .filter(|rec| rec.category == Category::Energy)
            .collect();
        assert_eq!(energy_entries.len(), 1);
        assert_eq!(energy_entries[0].priority, Priority::Medium);
        assert_eq!(energy_entries[0].estimated_improvement, 12);
    }

    #[test]
    fn quick_win_fires_for_middling_environmental_scores() {
        let recs = generate_recommendations(&uniform_scores(45, 80), Sector::Other);
        let quick_win = recs
            .iter()
            .find(|rec| rec.category == Category::Energy)
            .expect("quick win present");
        assert_eq!(quick_win.priority, Priority::Medium);
        assert_eq!(quick_win.estimated_improvement, 8);
        assert_eq!(quick_win.complexity, Some(EffortLevel::Low));
    }
}
