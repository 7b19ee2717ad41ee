//! Sector weighting table, composite scorer, and the two classification
//! scales derived from the composite score.

use super::domain::Sector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Pillar weight triple for one sector; components sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorWeights {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
}

/// Reference composite scores observed across a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorBenchmark {
    pub average: u8,
    pub leaders: u8,
}

/// Screening risk classification of the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    fn for_composite(score: u8) -> Self {
        if score >= 80 {
            Self::Low
        } else if score >= 60 {
            Self::Medium
        } else if score >= 40 {
            Self::High
        } else {
            Self::Critical
        }
    }
}

/// Framework alignment tier. Deliberately a different scale from
/// [`RiskLevel`]; the two sets of boundaries are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentTier {
    FullyAligned,
    PartiallyAligned,
    Developing,
    NotAligned,
    CriticalGaps,
}

impl AlignmentTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullyAligned => "Fully Aligned",
            Self::PartiallyAligned => "Partially Aligned",
            Self::Developing => "Developing",
            Self::NotAligned => "Not Aligned",
            Self::CriticalGaps => "Critical Gaps",
        }
    }

    fn for_composite(score: u8) -> Self {
        if score >= 85 {
            Self::FullyAligned
        } else if score >= 70 {
            Self::PartiallyAligned
        } else if score >= 50 {
            Self::Developing
        } else if score >= 30 {
            Self::NotAligned
        } else {
            Self::CriticalGaps
        }
    }
}

/// Composite scoring output: the blended score, the weights that produced
/// it, and the two classifications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeResult {
    pub score: u8,
    pub weights: SectorWeights,
    pub risk: RiskLevel,
    pub alignment: AlignmentTier,
}

static SECTOR_WEIGHTS: OnceLock<HashMap<Sector, SectorWeights>> = OnceLock::new();
static SECTOR_BENCHMARKS: OnceLock<HashMap<Sector, SectorBenchmark>> = OnceLock::new();

/// Materiality-informed pillar weights for a sector. Sectors outside the
/// table use the [`Sector::Other`] entry.
pub fn sector_weights(sector: Sector) -> SectorWeights {
    let table = SECTOR_WEIGHTS.get_or_init(|| {
        const WEIGHTS: &[(Sector, f64, f64, f64)] = &[
            // Environmental-materiality-heavy industries
            (Sector::Manufacturing, 0.50, 0.30, 0.20),
            (Sector::Energy, 0.55, 0.25, 0.20),
            (Sector::Mining, 0.55, 0.25, 0.20),
            (Sector::Agriculture, 0.50, 0.30, 0.20),
            (Sector::Transportation, 0.50, 0.30, 0.20),
            (Sector::Construction, 0.45, 0.35, 0.20),
            // Governance-heavy industries
            (Sector::Finance, 0.20, 0.35, 0.45),
            (Sector::ProfessionalServices, 0.25, 0.35, 0.40),
            // Workforce-heavy industries
            (Sector::Healthcare, 0.30, 0.45, 0.25),
            (Sector::Retail, 0.35, 0.40, 0.25),
            (Sector::Hospitality, 0.30, 0.45, 0.25),
            (Sector::Education, 0.25, 0.45, 0.30),
            // Balanced profiles
            (Sector::Technology, 0.30, 0.35, 0.35),
            (Sector::Other, 0.34, 0.33, 0.33),
        ];

        WEIGHTS
            .iter()
            .map(|&(sector, environmental, social, governance)| {
                (
                    sector,
                    SectorWeights {
                        environmental,
                        social,
                        governance,
                    },
                )
            })
            .collect()
    });

    table
        .get(&sector)
        .or_else(|| table.get(&Sector::Other))
        .copied()
        .unwrap_or(SectorWeights {
            environmental: 0.34,
            social: 0.33,
            governance: 0.33,
        })
}

/// Reference scores for benchmarking a composite against sector peers.
pub fn sector_benchmark(sector: Sector) -> SectorBenchmark {
    let table = SECTOR_BENCHMARKS.get_or_init(|| {
        const BENCHMARKS: &[(Sector, u8, u8)] = &[
            (Sector::Manufacturing, 52, 78),
            (Sector::Energy, 48, 75),
            (Sector::Mining, 45, 72),
            (Sector::Agriculture, 50, 74),
            (Sector::Transportation, 49, 73),
            (Sector::Construction, 47, 71),
            (Sector::Technology, 58, 84),
            (Sector::Finance, 56, 82),
            (Sector::ProfessionalServices, 57, 81),
            (Sector::Healthcare, 55, 79),
            (Sector::Retail, 51, 76),
            (Sector::Hospitality, 49, 74),
            (Sector::Education, 54, 77),
            (Sector::Other, 50, 75),
        ];

        BENCHMARKS
            .iter()
            .map(|&(sector, average, leaders)| (sector, SectorBenchmark { average, leaders }))
            .collect()
    });

    table
        .get(&sector)
        .or_else(|| table.get(&Sector::Other))
        .copied()
        .unwrap_or(SectorBenchmark {
            average: 50,
            leaders: 75,
        })
}

/// Blend the three pillar totals with the sector weights and classify the
/// result on both scales.
pub fn score_composite(
    environmental: u8,
    social: u8,
    governance: u8,
    sector: Sector,
) -> CompositeResult {
    let weights = sector_weights(sector);
    let score = (f64::from(environmental) * weights.environmental
        + f64::from(social) * weights.social
        + f64::from(governance) * weights.governance)
        .round() as u8;

    CompositeResult {
        score,
        weights,
        risk: RiskLevel::for_composite(score),
        alignment: AlignmentTier::for_composite(score),
    }
}
