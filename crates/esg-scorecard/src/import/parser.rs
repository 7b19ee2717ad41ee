use super::mapping::normalize_category;
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct ActivityRecord {
    pub(crate) normalized_category: String,
    pub(crate) raw_category: String,
    pub(crate) quantity: f64,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ActivityRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<ActivityRow>() {
        let row = record?;
        records.push(ActivityRecord {
            normalized_category: normalize_category(&row.category),
            raw_category: row.category,
            quantity: row.quantity.unwrap_or(0.0),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ActivityRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Quantity", default, deserialize_with = "blank_as_none")]
    quantity: Option<f64>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
