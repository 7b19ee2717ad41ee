use super::{finalize, weighted_total};
use crate::scoring::domain::{SocialAssessment, SocialScore};

// Sub-dimension weights; must sum to 1.0. Labor and stakeholder each carry
// two output fields, so their underlying weights are split across the pair.
const W_SAFETY: f64 = 0.25;
const W_DIVERSITY: f64 = 0.20;
const W_LABOR_PRACTICES: f64 = 0.15;
const W_HUMAN_RIGHTS: f64 = 0.15;
const W_SUPPLY_CHAIN: f64 = 0.125;
const W_CUSTOMER_COMMUNITY: f64 = 0.125;

/// OSHA-style incident rate normalization: injuries per 100 full-time
/// workers per year (200,000 hours).
const TRIR_HOURS_BASIS: f64 = 200_000.0;

/// Score the social pillar from a (possibly partial) assessment.
///
/// The labor sub-score feeds both `labor_practices` and `human_rights`, and
/// the stakeholder sub-score both `supply_chain` and `customer_community`;
/// downstream consumers rely on all six fields being present.
pub fn score_social(answers: &SocialAssessment) -> SocialScore {
    let safety = finalize(safety_points(answers));
    let diversity = finalize(diversity_points(answers));
    let labor = finalize(labor_points(answers));
    let stakeholder = finalize(stakeholder_points(answers));

    SocialScore {
        total: weighted_total(&[
            (safety, W_SAFETY),
            (diversity, W_DIVERSITY),
            (labor, W_LABOR_PRACTICES),
            (labor, W_HUMAN_RIGHTS),
            (stakeholder, W_SUPPLY_CHAIN),
            (stakeholder, W_CUSTOMER_COMMUNITY),
        ]),
        safety,
        diversity,
        labor_practices: labor,
        human_rights: labor,
        supply_chain: stakeholder,
        customer_community: stakeholder,
    }
}

fn safety_points(answers: &SocialAssessment) -> f64 {
    let mut points = (answers.safety_management_coverage_pct * 0.25).clamp(0.0, 25.0);
    if answers.safety_certification {
        points += 20.0;
    }
    if answers.zero_fatalities {
        points += 15.0;
    }
    if answers.safety_training {
        points += 20.0;
    }
    points += trir_points(answers);
    points
}

/// Band the Total Recordable Incident Rate into point tiers. An
/// organization that does not report hours worked gets flat partial credit
/// instead of the zero a poor performer would earn.
fn trir_points(answers: &SocialAssessment) -> f64 {
    if answers.hours_worked <= 0.0 {
        return 10.0;
    }

    let rate = f64::from(answers.recordable_injuries) * TRIR_HOURS_BASIS / answers.hours_worked;
    if rate == 0.0 {
        20.0
    } else if rate < 1.0 {
        15.0
    } else if rate < 3.0 {
        10.0
    } else {
        0.0
    }
}

fn diversity_points(answers: &SocialAssessment) -> f64 {
    let mut points = 0.0;
    // Target band for workforce gender balance, not a linear scale.
    if (40.0..=60.0).contains(&answers.workforce_female_pct) {
        points += 25.0;
    }
    if answers.management_diversity_pct >= 30.0 {
        points += 20.0;
    }
    if answers.board_diversity_pct >= 30.0 {
        points += 15.0;
    }
    if answers.dei_policy {
        points += 15.0;
    }
    if answers.pay_equity_analysis {
        points += 15.0;
    }
    if answers.inclusion_training {
        points += 10.0;
    }
    points
}

fn labor_points(answers: &SocialAssessment) -> f64 {
    let mut points = 0.0;
    if answers.living_wage_commitment {
        points += 20.0;
    }
    if answers.freedom_of_association {
        points += 15.0;
    }
    if answers.human_rights_policy {
        points += 20.0;
    }
    if answers.grievance_mechanism {
        points += 15.0;
    }
    if answers.benefits_above_statutory {
        points += 15.0;
    }
    if answers.turnover_tracked {
        points += 15.0;
    }
    points
}

fn stakeholder_points(answers: &SocialAssessment) -> f64 {
    let mut points = 0.0;
    if answers.supplier_code_of_conduct {
        points += 25.0;
    }
    if answers.supplier_audits {
        points += 20.0;
    }
    if answers.community_engagement {
        points += 20.0;
    }
    if answers.customer_satisfaction_tracked {
        points += 15.0;
    }
    if answers.data_privacy_policy {
        points += 20.0;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreported_hours_earn_partial_credit_not_zero() {
        let silent = SocialAssessment::default();
        let poor = SocialAssessment {
            hours_worked: 2_000_000.0,
            recordable_injuries: 40, // TRIR 4.0
            ..SocialAssessment::default()
        };

        assert_eq!(score_social(&silent).safety, 10);
        assert_eq!(score_social(&poor).safety, 0);
    }

    #[test]
    fn trir_bands_award_graduated_points() {
        let zero = SocialAssessment {
            hours_worked: 400_000.0,
            recordable_injuries: 0,
            ..SocialAssessment::default()
        };
        let low = SocialAssessment {
            hours_worked: 400_000.0,
            recordable_injuries: 1, // TRIR 0.5
            ..SocialAssessment::default()
        };
        let moderate = SocialAssessment {
            hours_worked: 400_000.0,
            recordable_injuries: 4, // TRIR 2.0
            ..SocialAssessment::default()
        };

        assert_eq!(score_social(&zero).safety, 20);
        assert_eq!(score_social(&low).safety, 15);
        assert_eq!(score_social(&moderate).safety, 10);
    }

    #[test]
    fn gender_balance_band_is_inclusive_of_both_bounds() {
        for pct in [40.0, 50.0, 60.0] {
            let answers = SocialAssessment {
                workforce_female_pct: pct,
                hours_worked: 400_000.0, // suppress the disclosure credit
                recordable_injuries: 40,
                ..SocialAssessment::default()
            };
            assert_eq!(score_social(&answers).diversity, 25, "pct {pct}");
        }

        let outside = SocialAssessment {
            workforce_female_pct: 39.9,
            ..SocialAssessment::default()
        };
        assert_eq!(score_social(&outside).diversity, 0);
    }

    #[test]
    fn labor_score_is_mirrored_into_both_output_fields() {
        let answers = SocialAssessment {
            living_wage_commitment: true,
            human_rights_policy: true,
            grievance_mechanism: true,
            ..SocialAssessment::default()
        };

        let score = score_social(&answers);
        assert_eq!(score.labor_practices, 55);
        assert_eq!(score.human_rights, score.labor_practices);
    }

    #[test]
    fn stakeholder_score_is_mirrored_into_both_output_fields() {
        let answers = SocialAssessment {
            supplier_code_of_conduct: true,
            data_privacy_policy: true,
            ..SocialAssessment::default()
        };

        let score = score_social(&answers);
        assert_eq!(score.supply_chain, 45);
        assert_eq!(score.customer_community, score.supply_chain);
    }

    #[test]
    fn total_uses_the_fixed_weighting() {
        let answers = SocialAssessment {
            safety_certification: true,
            safety_management_coverage_pct: 100.0,
            zero_fatalities: true,
            safety_training: true,
            hours_worked: 400_000.0,
            recordable_injuries: 0,
            workforce_female_pct: 48.0,
            management_diversity_pct: 35.0,
            board_diversity_pct: 30.0,
            dei_policy: true,
            pay_equity_analysis: true,
            inclusion_training: true,
            living_wage_commitment: true,
            freedom_of_association: true,
            human_rights_policy: true,
            grievance_mechanism: true,
            benefits_above_statutory: true,
            turnover_tracked: true,
            supplier_code_of_conduct: true,
            supplier_audits: true,
            community_engagement: true,
            customer_satisfaction_tracked: true,
            data_privacy_policy: true,
        };

        let score = score_social(&answers);
        assert_eq!(score.safety, 100);
        assert_eq!(score.diversity, 100);
        assert_eq!(score.labor_practices, 100);
        assert_eq!(score.supply_chain, 100);
        assert_eq!(score.total, 100);
    }
}
