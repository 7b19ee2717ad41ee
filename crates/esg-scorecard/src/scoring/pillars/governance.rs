use super::{finalize, weighted_total};
use crate::scoring::domain::{GovernanceAssessment, GovernanceScore};

// Sub-dimension weights; must sum to 1.0.
const W_BOARD: f64 = 0.25;
const W_EXECUTIVE: f64 = 0.15;
const W_ETHICS: f64 = 0.25;
const W_RISK: f64 = 0.15;
const W_TRANSPARENCY: f64 = 0.20;

/// Score the governance pillar from a (possibly partial) assessment.
pub fn score_governance(answers: &GovernanceAssessment) -> GovernanceScore {
    let board = finalize(board_points(answers));
    let executive = finalize(executive_points(answers));
    let ethics = finalize(ethics_points(answers));
    let risk = finalize(risk_points(answers));
    let transparency = finalize(transparency_points(answers));

    GovernanceScore {
        total: weighted_total(&[
            (board, W_BOARD),
            (executive, W_EXECUTIVE),
            (ethics, W_ETHICS),
            (risk, W_RISK),
            (transparency, W_TRANSPARENCY),
        ]),
        board,
        executive,
        ethics,
        risk,
        transparency,
    }
}

fn board_points(answers: &GovernanceAssessment) -> f64 {
    let mut points = 0.0;
    if answers.independent_board_majority {
        points += 25.0;
    }
    if answers.board_gender_diversity_pct >= 30.0 {
        points += 20.0;
    }
    if answers.separate_chair_ceo {
        points += 15.0;
    }
    if answers.audit_committee {
        points += 20.0;
    }
    if answers.sustainability_committee {
        points += 20.0;
    }
    points
}

fn executive_points(answers: &GovernanceAssessment) -> f64 {
    let mut points = 0.0;
    if answers.pay_ratio_disclosed {
        points += 30.0;
    }
    if answers.esg_linked_compensation {
        points += 35.0;
    }
    if answers.clawback_policy {
        points += 35.0;
    }
    points
}

fn ethics_points(answers: &GovernanceAssessment) -> f64 {
    let mut points = 0.0;
    if answers.code_of_conduct {
        points += 25.0;
    }
    if answers.ethics_training {
        points += 20.0;
    }
    if answers.whistleblower_channel {
        points += 25.0;
    }
    if answers.corruption_violations == 0 {
        points += 30.0;
    }
    points
}

fn risk_points(answers: &GovernanceAssessment) -> f64 {
    let mut points = 0.0;
    if answers.risk_framework {
        points += 30.0;
    }
    if answers.esg_risk_integration {
        points += 30.0;
    }
    if answers.cybersecurity_program {
        points += 25.0;
    }
    if answers.continuity_plan {
        points += 15.0;
    }
    points
}

fn transparency_points(answers: &GovernanceAssessment) -> f64 {
    let mut points = 0.0;
    if answers.sustainability_reporting {
        points += 30.0;
    }
    if answers.external_assurance {
        points += 25.0;
    }
    if answers.materiality_assessment {
        points += 20.0;
    }
    if answers.tax_transparency {
        points += 25.0;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_assessment_scores_only_the_clean_record_award() {
        let score = score_governance(&GovernanceAssessment::default());
        assert_eq!(score.board, 0);
        assert_eq!(score.executive, 0);
        assert_eq!(score.ethics, 30);
        assert_eq!(score.risk, 0);
        assert_eq!(score.transparency, 0);
        // 0.25 * 30 = 7.5, rounded half away from zero
        assert_eq!(score.total, 8);
    }

    #[test]
    fn board_diversity_threshold_is_thirty_percent() {
        let below = GovernanceAssessment {
            board_gender_diversity_pct: 29.9,
            ..GovernanceAssessment::default()
        };
        let at = GovernanceAssessment {
            board_gender_diversity_pct: 30.0,
            ..GovernanceAssessment::default()
        };
        assert_eq!(score_governance(&below).board, 0);
        assert_eq!(score_governance(&at).board, 20);
    }

    #[test]
    fn corruption_violations_forfeit_the_clean_record_award() {
        let cited = GovernanceAssessment {
            code_of_conduct: true,
            corruption_violations: 1,
            ..GovernanceAssessment::default()
        };
        assert_eq!(score_governance(&cited).ethics, 25);
    }

    #[test]
    fn complete_governance_program_scores_one_hundred() {
        let answers = GovernanceAssessment {
            independent_board_majority: true,
            board_gender_diversity_pct: 45.0,
            separate_chair_ceo: true,
            audit_committee: true,
            sustainability_committee: true,
            pay_ratio_disclosed: true,
            esg_linked_compensation: true,
            clawback_policy: true,
            code_of_conduct: true,
            ethics_training: true,
            whistleblower_channel: true,
            corruption_violations: 0,
            risk_framework: true,
            esg_risk_integration: true,
            cybersecurity_program: true,
            continuity_plan: true,
            sustainability_reporting: true,
            external_assurance: true,
            materiality_assessment: true,
            tax_transparency: true,
        };

        let score = score_governance(&answers);
        assert_eq!(score.total, 100);
        assert_eq!(score.board, 100);
        assert_eq!(score.executive, 100);
        assert_eq!(score.ethics, 100);
        assert_eq!(score.risk, 100);
        assert_eq!(score.transparency, 100);
    }

    #[test]
    fn total_is_the_weighted_sum_of_sub_scores() {
        let answers = GovernanceAssessment {
            audit_committee: true,       // board 20
            pay_ratio_disclosed: true,   // executive 30
            risk_framework: true,        // risk 30
            sustainability_reporting: true, // transparency 30
            ..GovernanceAssessment::default()
        };

        let score = score_governance(&answers);
        // 0.25*20 + 0.15*30 + 0.25*30 + 0.15*30 + 0.20*30 = 27.5
        assert_eq!(score.total, 28);
    }
}
