use serde::{Deserialize, Serialize};

/// Industry classification used for sector-aware weighting and benchmarks.
///
/// The set is closed; anything a caller reports outside of it deserializes to
/// [`Sector::Other`], which maps to the documented default weight and
/// benchmark entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sector {
    Manufacturing,
    Energy,
    Mining,
    Agriculture,
    Transportation,
    Construction,
    Technology,
    Finance,
    ProfessionalServices,
    Healthcare,
    Retail,
    Hospitality,
    Education,
    #[serde(other)]
    Other,
}

impl Sector {
    pub const fn ordered() -> [Self; 14] {
        [
            Self::Manufacturing,
            Self::Energy,
            Self::Mining,
            Self::Agriculture,
            Self::Transportation,
            Self::Construction,
            Self::Technology,
            Self::Finance,
            Self::ProfessionalServices,
            Self::Healthcare,
            Self::Retail,
            Self::Hospitality,
            Self::Education,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Manufacturing => "Manufacturing",
            Self::Energy => "Energy & Utilities",
            Self::Mining => "Mining & Extractives",
            Self::Agriculture => "Agriculture & Food",
            Self::Transportation => "Transportation & Logistics",
            Self::Construction => "Construction & Real Estate",
            Self::Technology => "Technology",
            Self::Finance => "Financial Services",
            Self::ProfessionalServices => "Professional Services",
            Self::Healthcare => "Healthcare",
            Self::Retail => "Retail & Consumer Goods",
            Self::Hospitality => "Hospitality & Leisure",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

impl Default for Sector {
    fn default() -> Self {
        Self::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrganizationSize {
    #[default]
    Small,
    Medium,
    Large,
    Enterprise,
}

impl OrganizationSize {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small (<50 employees)",
            Self::Medium => "Medium (50-249 employees)",
            Self::Large => "Large (250-999 employees)",
            Self::Enterprise => "Enterprise (1000+ employees)",
        }
    }
}

/// Who is being assessed. `employee_count` feeds the emissions intensity
/// calculation and must be positive before activity data is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrganizationProfile {
    #[serde(default)]
    pub sector: Sector,
    #[serde(default)]
    pub size: OrganizationSize,
    #[serde(default)]
    pub employee_count: u32,
}

/// Breadth of greenhouse-gas scope coverage the organization measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MeasurementLevel {
    #[default]
    #[serde(rename = "none")]
    NotMeasured,
    #[serde(rename = "scope-1")]
    Scope1Only,
    #[serde(rename = "scope-1-2")]
    Scope1And2,
    AllThree,
}

/// Ambition tier of a declared emissions reduction target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TargetType {
    #[default]
    Unspecified,
    Intensity,
    Absolute,
    #[serde(rename = "sbti")]
    ScienceBased,
}

/// Self-reported environmental practices. Every field defaults to the
/// neutral "not reported" value; gaps score zero rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnvironmentalAssessment {
    // Emissions management
    pub measurement_level: MeasurementLevel,
    pub has_reduction_targets: bool,
    pub target_type: TargetType,
    /// Reduction achieved to date, percent of target baseline.
    pub current_progress_pct: f64,
    /// Share of scope 3 categories covered by measurement, percent.
    pub scope3_coverage_pct: f64,

    // Energy
    pub renewable_energy_pct: f64,
    pub energy_efficiency_program: bool,
    pub energy_audits: bool,
    pub green_power_purchasing: bool,
    pub energy_management_system: bool,

    // Water
    pub water_use_tracked: bool,
    pub water_reduction_targets: bool,
    pub water_recycling: bool,
    pub water_risk_assessment: bool,

    // Waste
    pub recycling_program: bool,
    pub waste_audit: bool,
    pub waste_diversion_pct: f64,
    pub hazardous_waste_managed: bool,
    pub circular_economy_program: bool,

    // Biodiversity
    pub biodiversity_policy: bool,
    pub biodiversity_impact_assessment: bool,
    pub habitat_restoration: bool,

    // Compliance
    pub environmental_policy: bool,
    pub iso14001_certified: bool,
    pub environmental_violations: u32,
    pub incident_reporting: bool,
}

/// Self-reported social practices, workforce metrics, and safety data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SocialAssessment {
    // Safety
    pub safety_certification: bool,
    pub safety_management_coverage_pct: f64,
    pub zero_fatalities: bool,
    pub safety_training: bool,
    pub recordable_injuries: u32,
    /// Total hours worked across the workforce; 0 means not reported.
    pub hours_worked: f64,

    // Diversity, equity & inclusion
    pub workforce_female_pct: f64,
    pub management_diversity_pct: f64,
    pub board_diversity_pct: f64,
    pub dei_policy: bool,
    pub pay_equity_analysis: bool,
    pub inclusion_training: bool,

    // Labor practices
    pub living_wage_commitment: bool,
    pub freedom_of_association: bool,
    pub human_rights_policy: bool,
    pub grievance_mechanism: bool,
    pub benefits_above_statutory: bool,
    pub turnover_tracked: bool,

    // Stakeholders
    pub supplier_code_of_conduct: bool,
    pub supplier_audits: bool,
    pub community_engagement: bool,
    pub customer_satisfaction_tracked: bool,
    pub data_privacy_policy: bool,
}

/// Self-reported governance structures and disclosures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GovernanceAssessment {
    // Board
    pub independent_board_majority: bool,
    pub board_gender_diversity_pct: f64,
    pub separate_chair_ceo: bool,
    pub audit_committee: bool,
    pub sustainability_committee: bool,

    // Executive accountability
    pub pay_ratio_disclosed: bool,
    pub esg_linked_compensation: bool,
    pub clawback_policy: bool,

    // Ethics
    pub code_of_conduct: bool,
    pub ethics_training: bool,
    pub whistleblower_channel: bool,
    pub corruption_violations: u32,

    // Risk
    pub risk_framework: bool,
    pub esg_risk_integration: bool,
    pub cybersecurity_program: bool,
    pub continuity_plan: bool,

    // Transparency
    pub sustainability_reporting: bool,
    pub external_assurance: bool,
    pub materiality_assessment: bool,
    pub tax_transparency: bool,
}

/// One full assessment submission. Sub-records a respondent skipped
/// deserialize to their defaults, so scoring is total over any input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssessmentInput {
    pub environmental: EnvironmentalAssessment,
    pub social: SocialAssessment,
    pub governance: GovernanceAssessment,
    pub profile: OrganizationProfile,
}

/// Raw activity quantities behind the emissions calculation. Units are
/// fixed per field; all quantities default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ActivityData {
    // Scope 1: direct combustion and fugitives
    pub natural_gas_therms: f64,
    pub diesel_gallons: f64,
    pub gasoline_gallons: f64,
    pub refrigerant_kg: f64,

    // Scope 2: purchased energy
    pub electricity_kwh: f64,
    pub steam_mmbtu: f64,

    // Scope 3: value chain
    pub business_travel_miles: f64,
    pub employee_commute_miles: f64,
    pub waste_tons: f64,
    /// Spend-based purchased goods estimate, thousands of dollars.
    pub purchased_goods_spend_thousands: f64,
}

/// Environmental pillar score with its named sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentalScore {
    pub total: u8,
    pub emissions: u8,
    pub energy: u8,
    pub water: u8,
    pub waste: u8,
    pub biodiversity: u8,
    pub compliance: u8,
}

/// Social pillar score. `labor_practices`/`human_rights` report the same
/// underlying labor sub-score, and `supply_chain`/`customer_community` the
/// same stakeholder sub-score; the duplication is observable output
/// behavior carried over from the source assessment format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialScore {
    pub total: u8,
    pub safety: u8,
    pub diversity: u8,
    pub labor_practices: u8,
    pub human_rights: u8,
    pub supply_chain: u8,
    pub customer_community: u8,
}

/// Governance pillar score with its named sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceScore {
    pub total: u8,
    pub board: u8,
    pub executive: u8,
    pub ethics: u8,
    pub risk: u8,
    pub transparency: u8,
}

/// The three pillar scores for one assessment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarScores {
    pub environmental: EnvironmentalScore,
    pub social: SocialScore,
    pub governance: GovernanceScore,
}
