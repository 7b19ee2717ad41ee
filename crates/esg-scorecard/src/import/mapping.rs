use std::collections::HashMap;
use std::sync::OnceLock;

/// Destination field in `ActivityData` for one ledger category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActivityField {
    NaturalGas,
    Diesel,
    Gasoline,
    Refrigerant,
    Electricity,
    Steam,
    BusinessTravel,
    EmployeeCommute,
    Waste,
    PurchasedGoods,
}

static CATEGORY_MAP: OnceLock<HashMap<String, ActivityField>> = OnceLock::new();

/// Map a normalized ledger category to its activity field. Unknown
/// categories return `None` and are skipped by the importer.
pub(crate) fn field_for_normalized(normalized: &str) -> Option<ActivityField> {
    category_map().get(normalized).copied()
}

pub(crate) fn normalize_category(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

fn category_map() -> &'static HashMap<String, ActivityField> {
    CATEGORY_MAP.get_or_init(|| {
        const CATEGORY_TO_FIELD: &[(&str, ActivityField)] = &[
            // Scope 1
            ("Natural Gas", ActivityField::NaturalGas),
            ("Natural Gas (therms)", ActivityField::NaturalGas),
            ("Diesel", ActivityField::Diesel),
            ("Diesel Fuel", ActivityField::Diesel),
            ("Gasoline", ActivityField::Gasoline),
            ("Fleet Gasoline", ActivityField::Gasoline),
            ("Refrigerants", ActivityField::Refrigerant),
            ("Refrigerant Leakage", ActivityField::Refrigerant),
            // Scope 2
            ("Electricity", ActivityField::Electricity),
            ("Grid Electricity", ActivityField::Electricity),
            ("Purchased Electricity", ActivityField::Electricity),
            ("Steam", ActivityField::Steam),
            ("Purchased Steam", ActivityField::Steam),
            ("District Heat", ActivityField::Steam),
            // Scope 3
            ("Business Travel", ActivityField::BusinessTravel),
            ("Air Travel", ActivityField::BusinessTravel),
            ("Employee Commute", ActivityField::EmployeeCommute),
            ("Commuting", ActivityField::EmployeeCommute),
            ("Waste", ActivityField::Waste),
            ("Landfill Waste", ActivityField::Waste),
            ("Purchased Goods", ActivityField::PurchasedGoods),
            ("Purchased Goods & Services", ActivityField::PurchasedGoods),
            ("Procurement Spend", ActivityField::PurchasedGoods),
        ];

        CATEGORY_TO_FIELD
            .iter()
            .map(|&(name, field)| (normalize_category(name), field))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_collapses_whitespace_and_case() {
        assert_eq!(normalize_category("  Natural   GAS "), "natural gas");
        assert_eq!(normalize_category("\u{feff}Electricity"), "electricity");
    }

    #[test]
    fn synonyms_land_on_the_same_field() {
        for name in ["Electricity", "grid electricity", "Purchased Electricity"] {
            assert_eq!(
                field_for_normalized(&normalize_category(name)),
                Some(ActivityField::Electricity),
                "{name}"
            );
        }
    }

    #[test]
    fn unknown_categories_map_to_none() {
        assert_eq!(field_for_normalized(&normalize_category("Office Coffee")), None);
    }
}
