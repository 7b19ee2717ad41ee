//! Converts raw activity quantities into greenhouse-gas totals per scope,
//! plus the derived intensity metrics the composite report surfaces.

use super::domain::ActivityData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Emission factors in metric tons CO2e per activity unit.
///
/// Factors are grouped into a named, versioned table rather than inlined at
/// call sites so a recalibrated factor set can be swapped in without
/// touching the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    pub natural_gas_per_therm: f64,
    pub diesel_per_gallon: f64,
    pub gasoline_per_gallon: f64,
    pub refrigerant_per_kg: f64,
    pub electricity_per_kwh: f64,
    pub steam_per_mmbtu: f64,
    pub business_travel_per_mile: f64,
    pub commute_per_mile: f64,
    pub waste_per_ton: f64,
    pub purchased_goods_per_thousand_usd: f64,
}

impl EmissionFactors {
    /// 2024 factor set derived from published EPA emission factor tables.
    pub const EPA_2024: Self = Self {
        natural_gas_per_therm: 0.0053,
        diesel_per_gallon: 0.01021,
        gasoline_per_gallon: 0.00887,
        refrigerant_per_kg: 1.81,
        electricity_per_kwh: 0.000417,
        steam_per_mmbtu: 0.07,
        business_travel_per_mile: 0.00021,
        commute_per_mile: 0.000335,
        waste_per_ton: 0.52,
        purchased_goods_per_thousand_usd: 0.25,
    };
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::EPA_2024
    }
}

/// Greenhouse-gas accounting scope, in the fixed reporting order used for
/// largest-source tie breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionScope {
    Scope1,
    Scope2,
    Scope3,
}

impl EmissionScope {
    pub const fn ordered() -> [Self; 3] {
        [Self::Scope1, Self::Scope2, Self::Scope3]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Scope1 => "Direct",
            Self::Scope2 => "Energy",
            Self::Scope3 => "Value Chain",
        }
    }
}

/// Per-employee intensity banding. Thresholds are fixed, not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityClass {
    High,
    Medium,
    Low,
}

impl IntensityClass {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    fn for_per_employee(tons: f64) -> Self {
        if tons > 50.0 {
            Self::High
        } else if tons > 20.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// The scope contributing the most to the total, with its rounded share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargestSource {
    pub scope: EmissionScope,
    pub share_pct: u8,
}

/// Full output of one emissions calculation. Totals are metric tons CO2e.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionsResult {
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
    pub total: f64,
    pub per_employee: f64,
    pub intensity: IntensityClass,
    pub largest: LargestSource,
}

#[derive(Debug, PartialEq, Eq)]
pub enum EmissionsError {
    /// Per-employee intensity is undefined without a positive headcount.
    NoHeadcount,
}

impl fmt::Display for EmissionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmissionsError::NoHeadcount => {
                write!(f, "employee count must be positive to compute intensity")
            }
        }
    }
}

impl std::error::Error for EmissionsError {}

/// Stateless calculator bound to one factor table.
#[derive(Debug, Clone, Default)]
pub struct EmissionsCalculator {
    factors: EmissionFactors,
}

impl EmissionsCalculator {
    pub fn new(factors: EmissionFactors) -> Self {
        Self { factors }
    }

    pub fn compute(
        &self,
        activity: &ActivityData,
        employee_count: u32,
    ) -> Result<EmissionsResult, EmissionsError> {
        if employee_count == 0 {
            return Err(EmissionsError::NoHeadcount);
        }

        let f = &self.factors;
        let scope1 = activity.natural_gas_therms * f.natural_gas_per_therm
            + activity.diesel_gallons * f.diesel_per_gallon
            + activity.gasoline_gallons * f.gasoline_per_gallon
            + activity.refrigerant_kg * f.refrigerant_per_kg;
        let scope2 = activity.electricity_kwh * f.electricity_per_kwh
            + activity.steam_mmbtu * f.steam_per_mmbtu;
        let scope3 = activity.business_travel_miles * f.business_travel_per_mile
            + activity.employee_commute_miles * f.commute_per_mile
            + activity.waste_tons * f.waste_per_ton
            + activity.purchased_goods_spend_thousands * f.purchased_goods_per_thousand_usd;

        let total = scope1 + scope2 + scope3;
        let per_employee = total / f64::from(employee_count);

        Ok(EmissionsResult {
            scope1,
            scope2,
            scope3,
            total,
            per_employee,
            intensity: IntensityClass::for_per_employee(per_employee),
            largest: largest_source(scope1, scope2, scope3, total),
        })
    }
}

/// Convenience entry point using the default factor table.
pub fn compute_emissions(
    activity: &ActivityData,
    employee_count: u32,
) -> Result<EmissionsResult, EmissionsError> {
    EmissionsCalculator::default().compute(activity, employee_count)
}

fn largest_source(scope1: f64, scope2: f64, scope3: f64, total: f64) -> LargestSource {
    // Strict comparison keeps ties on the earliest scope in reporting order.
    let mut scope = EmissionScope::Scope1;
    let mut value = scope1;
    for (candidate, candidate_value) in [
        (EmissionScope::Scope2, scope2),
        (EmissionScope::Scope3, scope3),
    ] {
        if candidate_value > value {
            scope = candidate;
            value = candidate_value;
        }
    }

    let share_pct = if total > 0.0 {
        (value / total * 100.0).round() as u8
    } else {
        0
    };

    LargestSource { scope, share_pct }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample_activity() -> ActivityData {
        ActivityData {
            natural_gas_therms: 50_000.0,
            diesel_gallons: 2_000.0,
            gasoline_gallons: 3_000.0,
            refrigerant_kg: 50.0,
            electricity_kwh: 500_000.0,
            steam_mmbtu: 1_000.0,
            business_travel_miles: 100_000.0,
            employee_commute_miles: 250_000.0,
            waste_tons: 50.0,
            purchased_goods_spend_thousands: 500.0,
        }
    }

    #[test]
    fn reference_ledger_produces_expected_scope_totals() {
        let result = compute_emissions(&sample_activity(), 100).expect("positive headcount");

        assert!(close(result.scope1, 402.53), "scope1 was {}", result.scope1);
        assert!(close(result.scope2, 278.5), "scope2 was {}", result.scope2);
        assert!(close(result.scope3, 255.75), "scope3 was {}", result.scope3);
        assert!(close(result.total, 936.78), "total was {}", result.total);
        assert!(close(result.per_employee, 9.3678));
        assert_eq!(result.intensity, IntensityClass::Low);
        assert_eq!(result.largest.scope, EmissionScope::Scope1);
        assert_eq!(result.largest.scope.label(), "Direct");
        assert_eq!(result.largest.share_pct, 43);
    }

    #[test]
    fn total_is_sum_of_scopes() {
        let result = compute_emissions(&sample_activity(), 7).expect("positive headcount");
        assert!(close(result.total, result.scope1 + result.scope2 + result.scope3));
    }

    #[test]
    fn zero_headcount_fails_explicitly() {
        let err = compute_emissions(&sample_activity(), 0).expect_err("headcount required");
        assert_eq!(err, EmissionsError::NoHeadcount);
    }

    #[test]
    fn intensity_bands_use_fixed_thresholds() {
        let activity = ActivityData {
            waste_tons: 100.0, // 52 t total at the default factor
            ..ActivityData::default()
        };

        let high = compute_emissions(&activity, 1).expect("headcount");
        assert_eq!(high.intensity, IntensityClass::High);

        let medium = compute_emissions(&activity, 2).expect("headcount");
        assert_eq!(medium.intensity, IntensityClass::Medium);

        let low = compute_emissions(&activity, 3).expect("headcount");
        assert_eq!(low.intensity, IntensityClass::Low);
    }

    #[test]
    fn scope_ties_resolve_to_earliest_scope() {
        let tied = largest_source(5.0, 5.0, 2.0, 12.0);
        assert_eq!(tied.scope, EmissionScope::Scope1);
        assert_eq!(tied.share_pct, 42);

        let scope2_and_3_tied = largest_source(1.0, 4.0, 4.0, 9.0);
        assert_eq!(scope2_and_3_tied.scope, EmissionScope::Scope2);
    }

    #[test]
    fn empty_activity_reports_zero_share() {
        let result = compute_emissions(&ActivityData::default(), 25).expect("headcount");
        assert!(close(result.total, 0.0));
        assert_eq!(result.largest.scope, EmissionScope::Scope1);
        assert_eq!(result.largest.share_pct, 0);
        assert_eq!(result.intensity, IntensityClass::Low);
    }

    #[test]
    fn custom_factor_table_is_honored() {
        let mut factors = EmissionFactors::EPA_2024;
        factors.waste_per_ton = 1.0;
        let calculator = EmissionsCalculator::new(factors);

        let activity = ActivityData {
            waste_tons: 10.0,
            ..ActivityData::default()
        };

        let result = calculator.compute(&activity, 5).expect("headcount");
        assert!(close(result.scope3, 10.0));
    }
}
