//! Change tracking for edit forms.
//!
//! An edit form starts from the stored record and is submitted as a partial
//! update holding only the fields the user changed. The comparison runs over
//! the serialized (camelCase JSON) form of both values, so any pair of types
//! sharing wire names can be compared.
//!
//! Update DTOs use `Option` for "not supplied", so a cleared optional field
//! cannot be expressed as an update: [`diff_fields`] reports it as `null`,
//! [`changed_fields`] turns that into `None`, and the stored value is kept.
//!
//! # Example
//!
//! ```ignore
//! use boarding::changes::changed_fields;
//! use boarding_models::{CreateGuardianDto, UpdateGuardianDto};
//!
//! let original = CreateGuardianDto::from(&guardian);
//! let mut edited = original.clone();
//! edited.occupation = Some("Farmer".into());
//!
//! let update: Option<UpdateGuardianDto> = changed_fields(&original, &edited)?;
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Fields of `edited` that differ from `original`, as a JSON object.
///
/// A field present in `original` but missing from `edited` is reported as
/// `null`.
pub fn diff_fields<T, E>(original: &T, edited: &E) -> Result<Map<String, Value>, serde_json::Error>
where
    T: Serialize + ?Sized,
    E: Serialize + ?Sized,
{
    let original = as_object(serde_json::to_value(original)?);
    let edited = as_object(serde_json::to_value(edited)?);

    let mut changed: Map<String, Value> = edited
        .iter()
        .filter(|(key, value)| original.get(*key) != Some(*value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    for key in original.keys() {
        if !edited.contains_key(key) {
            changed.insert(key.clone(), Value::Null);
        }
    }

    Ok(changed)
}

/// The partial update DTO holding only the changed fields, or `None` when
/// nothing changed.
pub fn changed_fields<T, E, U>(original: &T, edited: &E) -> Result<Option<U>, serde_json::Error>
where
    T: Serialize + ?Sized,
    E: Serialize + ?Sized,
    U: DeserializeOwned,
{
    let changed = diff_fields(original, edited)?;
    if changed.is_empty() {
        return Ok(None);
    }
    serde_json::from_value(Value::Object(changed)).map(Some)
}

fn as_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("value".to_owned(), other);
            map
        }
    }
}
