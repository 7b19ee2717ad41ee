//! Imports a CSV export of metered activity (`Category,Quantity` rows)
//! into [`ActivityData`] for the emissions calculator. This is collaborator
//! plumbing: the importer validates and aggregates, the core stays pure.

mod mapping;
mod parser;

use crate::scoring::domain::ActivityData;
use mapping::ActivityField;
use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug)]
pub enum ActivityImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    NegativeQuantity { category: String, quantity: f64 },
}

impl std::fmt::Display for ActivityImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityImportError::Io(err) => write!(f, "failed to read activity export: {}", err),
            ActivityImportError::Csv(err) => write!(f, "invalid activity CSV data: {}", err),
            ActivityImportError::NegativeQuantity { category, quantity } => write!(
                f,
                "activity quantity for '{}' is negative ({})",
                category, quantity
            ),
        }
    }
}

impl std::error::Error for ActivityImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActivityImportError::Io(err) => Some(err),
            ActivityImportError::Csv(err) => Some(err),
            ActivityImportError::NegativeQuantity { .. } => None,
        }
    }
}

impl From<std::io::Error> for ActivityImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ActivityImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct ActivityLedgerImporter;

impl ActivityLedgerImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ActivityData, ActivityImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Aggregate ledger rows into activity quantities. Rows repeating a
    /// category sum; rows with unrecognized categories are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<ActivityData, ActivityImportError> {
        let mut activity = ActivityData::default();

        for record in parser::parse_records(reader)? {
            if record.quantity < 0.0 {
                return Err(ActivityImportError::NegativeQuantity {
                    category: record.raw_category,
                    quantity: record.quantity,
                });
            }

            match mapping::field_for_normalized(&record.normalized_category) {
                Some(field) => apply_quantity(&mut activity, field, record.quantity),
                None => {
                    warn!(category = %record.raw_category, "skipping unrecognized activity category");
                }
            }
        }

        Ok(activity)
    }
}

fn apply_quantity(activity: &mut ActivityData, field: ActivityField, quantity: f64) {
    let slot = match field {
        ActivityField::NaturalGas => &mut activity.natural_gas_therms,
        ActivityField::Diesel => &mut activity.diesel_gallons,
        ActivityField::Gasoline => &mut activity.gasoline_gallons,
        ActivityField::Refrigerant => &mut activity.refrigerant_kg,
        ActivityField::Electricity => &mut activity.electricity_kwh,
        ActivityField::Steam => &mut activity.steam_mmbtu,
        ActivityField::BusinessTravel => &mut activity.business_travel_miles,
        ActivityField::EmployeeCommute => &mut activity.employee_commute_miles,
        ActivityField::Waste => &mut activity.waste_tons,
        ActivityField::PurchasedGoods => &mut activity.purchased_goods_spend_thousands,
    };
    *slot += quantity;
}
