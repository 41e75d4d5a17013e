//! Numeric feature extraction for price prediction.
//!
//! Listing fields such as `"23.4 kmpl"` or `"1248 CC"` carry units; only
//! the first numeric token is kept.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{ClimateError, Result};

/// Model input order.
pub const FEATURE_NAMES: [&str; 6] = ["year", "km_driven", "mileage", "engine", "max_power", "seats"];

static NUMERIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\d.]+").expect("valid regex"));

/// A raw field value before extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
}

/// First run of digits and dots in `text`, as a number.
///
/// Returns `None` when there is no such run or it is not a valid float
/// (for example `"1.2.3"`).
pub fn extract_numeric(text: &str) -> Option<f64> {
    NUMERIC_TOKEN
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn field_to_number(name: &str, value: FieldValue<'_>, row: usize) -> Result<f64> {
    match value {
        FieldValue::Number(n) if n.is_finite() => Ok(n),
        FieldValue::Number(n) => Err(ClimateError::parse(name, &n.to_string(), row)),
        FieldValue::Text(text) => {
            extract_numeric(text).ok_or_else(|| ClimateError::parse(name, text, row))
        }
    }
}

/// Build the model input from a field lookup.
///
/// A field the lookup cannot supply is a `Schema` error; a field with no
/// numeric token is a `Parse` error tagged with `row`.
pub fn feature_vector<'a, F>(mut lookup: F, row: usize) -> Result<Vec<f64>>
where
    F: FnMut(&str) -> Option<FieldValue<'a>>,
{
    FEATURE_NAMES
        .iter()
        .map(|&name| {
            let value = lookup(name).ok_or_else(|| ClimateError::schema(name))?;
            field_to_number(name, value, row)
        })
        .collect()
}

/// Feature vector from a JSON object.
pub fn features_from_json(object: &serde_json::Map<String, serde_json::Value>) -> Result<Vec<f64>> {
    feature_vector(
        |name| match object.get(name)? {
            serde_json::Value::Number(n) => n.as_f64().map(FieldValue::Number),
            serde_json::Value::String(s) => Some(FieldValue::Text(s)),
            _ => None,
        },
        0,
    )
}

/// A used-car listing as submitted for a single prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarListing {
    pub name: String,
    pub year: i64,
    pub km_driven: i64,
    pub fuel: String,
    pub seller_type: String,
    pub transmission: String,
    pub owner: String,
    pub mileage: String,
    pub engine: String,
    pub max_power: String,
    pub torque: String,
    pub seats: f64,
}

impl CarListing {
    pub fn feature_vector(&self) -> Result<Vec<f64>> {
        feature_vector(
            |name| match name {
                "year" => Some(FieldValue::Number(self.year as f64)),
                "km_driven" => Some(FieldValue::Number(self.km_driven as f64)),
                "mileage" => Some(FieldValue::Text(&self.mileage)),
                "engine" => Some(FieldValue::Text(&self.engine)),
                "max_power" => Some(FieldValue::Text(&self.max_power)),
                "seats" => Some(FieldValue::Number(self.seats)),
                _ => None,
            },
            0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_token() {
        assert_eq!(extract_numeric("23.4 kmpl"), Some(23.4));
        assert_eq!(extract_numeric("1248 CC"), Some(1248.0));
        assert_eq!(extract_numeric("max 74 bhp at 4000"), Some(74.0));
        assert_eq!(extract_numeric("2014"), Some(2014.0));
    }

    #[test]
    fn rejects_missing_or_malformed_token() {
        assert_eq!(extract_numeric("bhp"), None);
        assert_eq!(extract_numeric(""), None);
        assert_eq!(extract_numeric("1.2.3 kmpl"), None);
        assert_eq!(extract_numeric(". kmpl"), None);
    }

    fn listing() -> CarListing {
        CarListing {
            name: "Maruti Swift Dzire VDI".into(),
            year: 2014,
            km_driven: 145500,
            fuel: "Diesel".into(),
            seller_type: "Individual".into(),
            transmission: "Manual".into(),
            owner: "First Owner".into(),
            mileage: "23.4 kmpl".into(),
            engine: "1248 CC".into(),
            max_power: "74 bhp".into(),
            torque: "190Nm@ 2000rpm".into(),
            seats: 5.0,
        }
    }

    #[test]
    fn listing_features_in_order() {
        assert_eq!(
            listing().feature_vector().unwrap(),
            vec![2014.0, 145500.0, 23.4, 1248.0, 74.0, 5.0]
        );
    }

    #[test]
    fn listing_without_power_is_parse_error() {
        let mut car = listing();
        car.max_power = "unknown".into();
        assert_eq!(
            car.feature_vector(),
            Err(ClimateError::parse("max_power", "unknown", 0))
        );
    }

    #[test]
    fn listing_deserializes_from_json() {
        let json = r#"{"name":"Hyundai i20","year":2017,"km_driven":30000,"fuel":"Petrol",
            "seller_type":"Dealer","transmission":"Manual","owner":"First Owner",
            "mileage":"18.6 kmpl","engine":"1197 CC","max_power":"81.86 bhp",
            "torque":"113.75nm@ 4000rpm","seats":5.0}"#;
        let car: CarListing = serde_json::from_str(json).unwrap();
        assert_eq!(car.feature_vector().unwrap()[4], 81.86);
    }

    #[test]
    fn json_object_features() {
        let value = serde_json::json!({
            "year": 2012, "km_driven": 120000, "mileage": "19.7 kmpl",
            "engine": "796 CC", "max_power": "46.3 bhp", "seats": 5
        });
        let features = features_from_json(value.as_object().unwrap()).unwrap();
        assert_eq!(features, vec![2012.0, 120000.0, 19.7, 796.0, 46.3, 5.0]);
    }

    #[test]
    fn json_object_missing_field_is_schema_error() {
        let value = serde_json::json!({"year": 2012});
        assert_eq!(
            features_from_json(value.as_object().unwrap()),
            Err(ClimateError::schema("km_driven"))
        );
    }
}
