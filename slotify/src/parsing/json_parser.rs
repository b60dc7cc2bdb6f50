use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::Block;

/// Key holding the bookings when the input is an object.
const BLOCKS_KEY: &str = "blocks";

/// Parse busy blocks from a JSON string.
///
/// The JSON can be either:
/// - An array of `{ "start": ..., "end": ... }` records with RFC 3339 instants
/// - An object with a `blocks` key containing that array
///
/// Every record goes through [`Block::new`], so reversed ranges are rejected
/// with the index of the offending record.
pub fn parse_blocks_json(json: &str) -> Result<Vec<Block>> {
    let value: Value = serde_json::from_str(json)?;

    let records = match value {
        Value::Array(records) => records,
        Value::Object(mut map) => match map.remove(BLOCKS_KEY) {
            Some(Value::Array(records)) => records,
            Some(other) => {
                return Err(Error::InvalidInput(format!(
                    "'{}' must be an array, found {}",
                    BLOCKS_KEY,
                    kind_of(&other)
                )))
            }
            None => {
                return Err(Error::InvalidInput(format!(
                    "JSON object must contain a '{}' key. Found keys: {:?}",
                    BLOCKS_KEY,
                    map.keys().collect::<Vec<_>>()
                )))
            }
        },
        other => {
            return Err(Error::InvalidInput(format!(
                "Expected an array of bookings, found {}",
                kind_of(&other)
            )))
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            serde_json::from_value::<Block>(record)
                .map_err(|e| Error::InvalidInput(format!("Booking {}: {}", idx, e)))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
