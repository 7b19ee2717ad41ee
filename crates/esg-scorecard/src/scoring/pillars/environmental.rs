use super::{finalize, weighted_total};
use crate::scoring::domain::{
    EnvironmentalAssessment, EnvironmentalScore, MeasurementLevel, TargetType,
};

// Sub-dimension weights; must sum to 1.0.
const W_EMISSIONS: f64 = 0.30;
const W_ENERGY: f64 = 0.20;
const W_WATER: f64 = 0.15;
const W_WASTE: f64 = 0.15;
const W_BIODIVERSITY: f64 = 0.10;
const W_COMPLIANCE: f64 = 0.10;

/// Score the environmental pillar from a (possibly partial) assessment.
pub fn score_environmental(answers: &EnvironmentalAssessment) -> EnvironmentalScore {
    let emissions = finalize(emissions_points(answers));
    let energy = finalize(energy_points(answers));
    let water = finalize(water_points(answers));
    let waste = finalize(waste_points(answers));
    let biodiversity = finalize(biodiversity_points(answers));
    let compliance = finalize(compliance_points(answers));

    EnvironmentalScore {
        total: weighted_total(&[
            (emissions, W_EMISSIONS),
            (energy, W_ENERGY),
            (water, W_WATER),
            (waste, W_WASTE),
            (biodiversity, W_BIODIVERSITY),
            (compliance, W_COMPLIANCE),
        ]),
        emissions,
        energy,
        water,
        waste,
        biodiversity,
        compliance,
    }
}

fn emissions_points(answers: &EnvironmentalAssessment) -> f64 {
    let mut points = match answers.measurement_level {
        MeasurementLevel::NotMeasured => 0.0,
        MeasurementLevel::Scope1Only => 10.0,
        MeasurementLevel::Scope1And2 => 20.0,
        MeasurementLevel::AllThree => 30.0,
    };

    if answers.has_reduction_targets {
        points += 10.0;
        points += match answers.target_type {
            TargetType::Unspecified => 0.0,
            TargetType::Intensity => 10.0,
            TargetType::Absolute => 15.0,
            TargetType::ScienceBased => 20.0,
        };
    }

    points += (answers.current_progress_pct * 4.0).clamp(0.0, 20.0);
    points += (answers.scope3_coverage_pct * 0.2).clamp(0.0, 20.0);
    points
}

fn energy_points(answers: &EnvironmentalAssessment) -> f64 {
    let mut points = (answers.renewable_energy_pct * 0.4).clamp(0.0, 40.0);
    if answers.energy_efficiency_program {
        points += 20.0;
    }
    if answers.energy_audits {
        points += 15.0;
    }
    if answers.green_power_purchasing {
        points += 15.0;
    }
    if answers.energy_management_system {
        points += 10.0;
    }
    points
}

fn water_points(answers: &EnvironmentalAssessment) -> f64 {
    let mut points = 0.0;
    if answers.water_use_tracked {
        points += 25.0;
    }
    if answers.water_reduction_targets {
        points += 25.0;
    }
    if answers.water_recycling {
        points += 25.0;
    }
    if answers.water_risk_assessment {
        points += 25.0;
    }
    points
}

fn waste_points(answers: &EnvironmentalAssessment) -> f64 {
    let mut points = (answers.waste_diversion_pct * 0.3).clamp(0.0, 30.0);
    if answers.recycling_program {
        points += 20.0;
    }
    if answers.waste_audit {
        points += 15.0;
    }
    if answers.hazardous_waste_managed {
        points += 20.0;
    }
    if answers.circular_economy_program {
        points += 15.0;
    }
    points
}

fn biodiversity_points(answers: &EnvironmentalAssessment) -> f64 {
    let mut points = 0.0;
    if answers.biodiversity_policy {
        points += 40.0;
    }
    if answers.biodiversity_impact_assessment {
        points += 30.0;
    }
    if answers.habitat_restoration {
        points += 30.0;
    }
    points
}

fn compliance_points(answers: &EnvironmentalAssessment) -> f64 {
    let mut points = 0.0;
    if answers.environmental_policy {
        points += 20.0;
    }
    if answers.iso14001_certified {
        points += 30.0;
    }
    if answers.environmental_violations == 0 {
        points += 35.0;
    }
    if answers.incident_reporting {
        points += 15.0;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambitious_emissions_program_scores_full_marks() {
        let answers = EnvironmentalAssessment {
            measurement_level: MeasurementLevel::AllThree,
            has_reduction_targets: true,
            target_type: TargetType::ScienceBased,
            current_progress_pct: 5.0,
            scope3_coverage_pct: 100.0,
            ..EnvironmentalAssessment::default()
        };

        let score = score_environmental(&answers);
        assert_eq!(score.emissions, 100);
        // Only the zero-violations default contributes elsewhere.
        assert_eq!(score.energy, 0);
        assert_eq!(score.water, 0);
        assert_eq!(score.waste, 0);
        assert_eq!(score.biodiversity, 0);
        assert_eq!(score.compliance, 35);
        // 0.30 * 100 + 0.10 * 35 = 33.5, rounded
        assert_eq!(score.total, 34);
    }

    #[test]
    fn target_ambition_tiers_are_graduated() {
        let base = EnvironmentalAssessment {
            has_reduction_targets: true,
            ..EnvironmentalAssessment::default()
        };

        let intensity = EnvironmentalAssessment {
            target_type: TargetType::Intensity,
            ..base.clone()
        };
        let absolute = EnvironmentalAssessment {
            target_type: TargetType::Absolute,
            ..base.clone()
        };
        let sbti = EnvironmentalAssessment {
            target_type: TargetType::ScienceBased,
            ..base.clone()
        };

        assert_eq!(score_environmental(&base).emissions, 10);
        assert_eq!(score_environmental(&intensity).emissions, 20);
        assert_eq!(score_environmental(&absolute).emissions, 25);
        assert_eq!(score_environmental(&sbti).emissions, 30);
    }

    #[test]
    fn target_type_without_declared_targets_earns_nothing() {
        let answers = EnvironmentalAssessment {
            target_type: TargetType::ScienceBased,
            ..EnvironmentalAssessment::default()
        };
        assert_eq!(score_environmental(&answers).emissions, 0);
    }

    #[test]
    fn progress_and_scope3_coverage_are_capped() {
        let answers = EnvironmentalAssessment {
            current_progress_pct: 90.0,
            scope3_coverage_pct: 250.0,
            ..EnvironmentalAssessment::default()
        };
        assert_eq!(score_environmental(&answers).emissions, 40);
    }

    #[test]
    fn renewable_share_scales_linearly_to_forty() {
        let half = EnvironmentalAssessment {
            renewable_energy_pct: 50.0,
            ..EnvironmentalAssessment::default()
        };
        let full = EnvironmentalAssessment {
            renewable_energy_pct: 100.0,
            ..EnvironmentalAssessment::default()
        };
        assert_eq!(score_environmental(&half).energy, 20);
        assert_eq!(score_environmental(&full).energy, 40);
    }

    #[test]
    fn violations_forfeit_the_clean_record_award() {
        let clean = EnvironmentalAssessment::default();
        let cited = EnvironmentalAssessment {
            environmental_violations: 2,
            ..EnvironmentalAssessment::default()
        };
        assert_eq!(score_environmental(&clean).compliance, 35);
        assert_eq!(score_environmental(&cited).compliance, 0);
    }

    #[test]
    fn full_program_hits_the_ceiling_on_every_dimension() {
        let answers = EnvironmentalAssessment {
            measurement_level: MeasurementLevel::AllThree,
            has_reduction_targets: true,
            target_type: TargetType::ScienceBased,
            current_progress_pct: 100.0,
            scope3_coverage_pct: 100.0,
            renewable_energy_pct: 100.0,
            energy_efficiency_program: true,
            energy_audits: true,
            green_power_purchasing: true,
            energy_management_system: true,
            water_use_tracked: true,
            water_reduction_targets: true,
            water_recycling: true,
            water_risk_assessment: true,
            recycling_program: true,
            waste_audit: true,
            waste_diversion_pct: 100.0,
            hazardous_waste_managed: true,
            circular_economy_program: true,
            biodiversity_policy: true,
            biodiversity_impact_assessment: true,
            habitat_restoration: true,
            environmental_policy: true,
            iso14001_certified: true,
            environmental_violations: 0,
            incident_reporting: true,
        };

        let score = score_environmental(&answers);
        assert_eq!(score.total, 100);
        for sub in [
            score.emissions,
            score.energy,
            score.water,
            score.waste,
            score.biodiversity,
            score.compliance,
        ] {
            assert_eq!(sub, 100);
        }
    }
}
