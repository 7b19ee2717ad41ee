use super::{Category, EffortLevel, Priority, Recommendation};
use crate::scoring::domain::{PillarScores, Sector};

// Pillar totals below this floor get a single critical foundation entry;
// sub-dimension rules only pile on above it.
const PILLAR_FLOOR: u8 = 30;

// Sector-materiality rules fire while the relevant pillar is below this.
const SECTOR_TARGET: u8 = 70;

const ENVIRONMENT_HEAVY: &[Sector] = &[
    Sector::Manufacturing,
    Sector::Energy,
    Sector::Mining,
    Sector::Agriculture,
    Sector::Transportation,
    Sector::Construction,
];

const GOVERNANCE_HEAVY: &[Sector] = &[Sector::Finance, Sector::ProfessionalServices];

const WORKFORCE_HEAVY: &[Sector] = &[
    Sector::Healthcare,
    Sector::Retail,
    Sector::Hospitality,
    Sector::Education,
];

pub(super) fn evaluate(scores: &PillarScores, sector: Sector) -> Vec<Recommendation> {
    let mut collected = Vec::new();

    pillar_floor_rules(scores, &mut collected);
    sub_dimension_rules(scores, &mut collected);
    sector_rules(scores, sector, &mut collected);
    quick_win_rule(scores, &mut collected);

    collected
}

fn pillar_floor_rules(scores: &PillarScores, collected: &mut Vec<Recommendation>) {
    let environmental = scores.environmental.total;
    if environmental < PILLAR_FLOOR {
        collected.push(Recommendation {
            priority: Priority::Critical,
            category: Category::Environmental,
            issue: format!(
                "Environmental score of {environmental} signals no systematic environmental management"
            ),
            impact: "An environmental baseline unlocks every downstream environmental practice"
                .to_string(),
            action: "Adopt an environmental policy, assign ownership, and start tracking energy, \
                     water, and waste data monthly"
                .to_string(),
            timeline: Some("6-12 months"),
            resources: vec!["ISO 14001 guidance", "GHG Protocol corporate standard"],
            complexity: Some(EffortLevel::High),
            estimated_improvement: 25,
        });
    }

    let social = scores.social.total;
    if social < PILLAR_FLOOR {
        collected.push(Recommendation {
            priority: Priority::Critical,
            category: Category::Social,
            issue: format!(
                "Social score of {social} signals missing workforce and community safeguards"
            ),
            impact: "Core labor and safety practices reduce incident, retention, and compliance \
                     exposure"
                .to_string(),
            action: "Publish a code of labor practice, stand up incident recording, and open a \
                     worker grievance channel"
                .to_string(),
            timeline: Some("6-12 months"),
            resources: vec!["ILO core conventions", "OSHA recordkeeping guidance"],
            complexity: Some(EffortLevel::High),
            estimated_improvement: 25,
        });
    }

    let governance = scores.governance.total;
    if governance < PILLAR_FLOOR {
        collected.push(Recommendation {
            priority: Priority::Critical,
            category: Category::Governance,
            issue: format!(
                "Governance score of {governance} signals missing oversight structures"
            ),
            impact: "Basic governance structures are preconditions for credible ESG claims"
                .to_string(),
            action: "Adopt a code of conduct, form an audit committee, and document board \
                     oversight responsibilities"
                .to_string(),
            timeline: Some("6-12 months"),
            resources: vec!["OECD corporate governance principles"],
            complexity: Some(EffortLevel::High),
            estimated_improvement: 25,
        });
    }
}

fn sub_dimension_rules(scores: &PillarScores, collected: &mut Vec<Recommendation>) {
    let env = &scores.environmental;
    if env.total >= PILLAR_FLOOR {
        if env.emissions < 40 {
            collected.push(Recommendation {
                priority: Priority::High,
                category: Category::Emissions,
                issue: format!("Emissions sub-score of {} with no measurement footing", env.emissions),
                impact: "Scope 1 and 2 measurement is the entry ticket to reduction targets"
                    .to_string(),
                action: "Inventory scope 1 and 2 emissions for the last fiscal year and declare a \
                         reduction target"
                    .to_string(),
                timeline: Some("3-6 months"),
                resources: vec!["GHG Protocol corporate standard", "SBTi getting-started guide"],
                complexity: Some(EffortLevel::Medium),
                estimated_improvement: 15,
            });
        }
        if env.energy < 40 {
            collected.push(Recommendation {
                priority: Priority::Medium,
                category: Category::Energy,
                issue: format!("Energy sub-score of {} shows untapped efficiency", env.energy),
                impact: "Efficiency programs typically pay back while cutting scope 2 emissions"
                    .to_string(),
                action: "Commission an energy audit and set a renewable procurement plan"
                    .to_string(),
                timeline: Some("3-6 months"),
                resources: vec!["ISO 50001 overview"],
                complexity: Some(EffortLevel::Medium),
                estimated_improvement: 12,
            });
        }
        if env.water < 35 {
            collected.push(Recommendation {
                priority: Priority::Medium,
                category: Category::Water,
                issue: format!("Water sub-score of {} with no stewardship practices", env.water),
                impact: "Metering and reduction targets cut cost and water-stress exposure"
                    .to_string(),
                action: "Meter water use per site and set reduction targets for the top consumers"
                    .to_string(),
                timeline: Some("3-6 months"),
                resources: vec!["CDP water security questionnaire"],
                complexity: Some(EffortLevel::Low),
                estimated_improvement: 8,
            });
        }
        if env.waste < 40 {
            collected.push(Recommendation {
                priority: Priority::Medium,
                category: Category::Waste,
                issue: format!("Waste sub-score of {} with low diversion", env.waste),
                impact: "Diversion programs reduce disposal cost and landfill emissions"
                    .to_string(),
                action: "Run a waste audit and launch recycling streams for the largest fractions"
                    .to_string(),
                timeline: Some("1-3 months"),
                resources: vec![],
                complexity: Some(EffortLevel::Low),
                estimated_improvement: 10,
            });
        }
    }

    let social = &scores.social;
    if social.total >= PILLAR_FLOOR {
        if social.safety < 50 {
            collected.push(Recommendation {
                priority: Priority::High,
                category: Category::Safety,
                issue: format!("Safety sub-score of {} with weak incident controls", social.safety),
                impact: "A managed safety system directly lowers injury rates and liability"
                    .to_string(),
                action: "Record all recordable incidents, track TRIR quarterly, and roll out \
                         safety training for all roles"
                    .to_string(),
                timeline: Some("3-6 months"),
                resources: vec!["ISO 45001 overview", "OSHA recordkeeping guidance"],
                complexity: Some(EffortLevel::Medium),
                estimated_improvement: 14,
            });
        }
        if social.diversity < 40 {
            collected.push(Recommendation {
                priority: Priority::Medium,
                category: Category::Diversity,
                issue: format!("Diversity sub-score of {} across workforce and leadership", social.diversity),
                impact: "Representation targets and pay-equity review improve hiring and retention"
                    .to_string(),
                action: "Adopt a DEI policy, run a pay-equity analysis, and report leadership \
                         representation annually"
                    .to_string(),
                timeline: Some("3-6 months"),
                resources: vec![],
                complexity: Some(EffortLevel::Medium),
                estimated_improvement: 10,
            });
        }
        if social.labor_practices < 45 {
            collected.push(Recommendation {
                priority: Priority::Medium,
                category: Category::Labor,
                issue: format!("Labor sub-score of {} with gaps in worker protections", social.labor_practices),
                impact: "Formal labor commitments reduce turnover and supply-chain audit findings"
                    .to_string(),
                action: "Publish a human rights policy and open a grievance mechanism with \
                         tracked resolution times"
                    .to_string(),
                timeline: Some("3-6 months"),
                resources: vec!["ILO core conventions"],
                complexity: Some(EffortLevel::Medium),
                estimated_improvement: 9,
            });
        }
    }

    let gov = &scores.governance;
    if gov.total >= PILLAR_FLOOR {
        if gov.board < 50 {
            collected.push(Recommendation {
                priority: Priority::Medium,
                category: Category::Board,
                issue: format!("Board sub-score of {} with thin independent oversight", gov.board),
                impact: "Independent directors and committees anchor every other control"
                    .to_string(),
                action: "Recruit independent directors toward a majority and charter an audit \
                         committee"
                    .to_string(),
                timeline: Some("6-12 months"),
                resources: vec![],
                complexity: Some(EffortLevel::High),
                estimated_improvement: 10,
            });
        }
        if gov.ethics < 50 {
            collected.push(Recommendation {
                priority: Priority::High,
                category: Category::Ethics,
                issue: format!("Ethics sub-score of {} with missing integrity controls", gov.ethics),
                impact: "A code of conduct and protected reporting channel deter the costliest \
                         governance failures"
                    .to_string(),
                action: "Adopt a code of conduct, train all staff annually, and stand up an \
                         anonymous whistleblower channel"
                    .to_string(),
                timeline: Some("1-3 months"),
                resources: vec![],
                complexity: Some(EffortLevel::Low),
                estimated_improvement: 13,
            });
        }
        if gov.transparency < 40 {
            collected.push(Recommendation {
                priority: Priority::Medium,
                category: Category::Transparency,
                issue: format!("Transparency sub-score of {} with no public reporting", gov.transparency),
                impact: "An annual sustainability report is the baseline stakeholder expectation"
                    .to_string(),
                action: "Publish an annual sustainability report covering material topics, with \
                         third-party assurance as a second step"
                    .to_string(),
                timeline: Some("6-12 months"),
                resources: vec!["GRI universal standards"],
                complexity: Some(EffortLevel::Medium),
                estimated_improvement: 11,
            });
        }
    }
}

fn sector_rules(scores: &PillarScores, sector: Sector, collected: &mut Vec<Recommendation>) {
    if ENVIRONMENT_HEAVY.contains(&sector) && scores.environmental.total < SECTOR_TARGET {
        collected.push(Recommendation {
            priority: Priority::High,
            category: Category::Environmental,
            issue: format!(
                "Environmental score of {} trails expectations for a high-impact sector",
                scores.environmental.total
            ),
            impact: "Environmental performance is the dominant materiality driver in this sector"
                .to_string(),
            action: "Prioritize a decarbonization roadmap covering process energy, fleet, and \
                     site emissions"
                .to_string(),
            timeline: Some("6-12 months"),
            resources: vec!["SBTi sector guidance"],
            complexity: Some(EffortLevel::High),
            estimated_improvement: 12,
        });
    }

    if GOVERNANCE_HEAVY.contains(&sector) && scores.governance.total < SECTOR_TARGET {
        collected.push(Recommendation {
            priority: Priority::High,
            category: Category::Governance,
            issue: format!(
                "Governance score of {} trails expectations for a trust-driven sector",
                scores.governance.total
            ),
            impact: "Clients and regulators in this sector screen on governance first".to_string(),
            action: "Close board independence and disclosure gaps ahead of the next reporting \
                     cycle"
                .to_string(),
            timeline: Some("3-6 months"),
            resources: vec![],
            complexity: Some(EffortLevel::Medium),
            estimated_improvement: 11,
        });
    }

    if WORKFORCE_HEAVY.contains(&sector) && scores.social.total < SECTOR_TARGET {
        collected.push(Recommendation {
            priority: Priority::High,
            category: Category::Social,
            issue: format!(
                "Social score of {} trails expectations for a workforce-intensive sector",
                scores.social.total
            ),
            impact: "Workforce practices drive service quality and retention in this sector"
                .to_string(),
            action: "Focus on safety management coverage, scheduling fairness, and frontline \
                     development programs"
                .to_string(),
            timeline: Some("3-6 months"),
            resources: vec![],
            complexity: Some(EffortLevel::Medium),
            estimated_improvement: 11,
        });
    }
}

/// Low-effort renewable procurement entry for organizations already past
/// the floor but not yet mature. First-match-wins: suppressed when an
/// energy-category entry has already been collected.
fn quick_win_rule(scores: &PillarScores, collected: &mut Vec<Recommendation>) {
    let total = scores.environmental.total;
    if !(PILLAR_FLOOR..60).contains(&total) {
        return;
    }
    if collected.iter().any(|rec| rec.category == Category::Energy) {
        return;
    }

    collected.push(Recommendation {
        priority: Priority::Medium,
        category: Category::Energy,
        issue: format!("Environmental score of {total} can be lifted with procurement alone"),
        impact: "Switching to certified renewable electricity cuts scope 2 with no process change"
            .to_string(),
        action: "Move electricity supply to a certified renewable tariff or purchase RECs for \
                 the current consumption"
            .to_string(),
        timeline: Some("1-3 months"),
        resources: vec![],
        complexity: Some(EffortLevel::Low),
        estimated_improvement: 8,
    });
}
