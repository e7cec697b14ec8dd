//! Serde helpers for fields the backend sends as `null`
//!
//! `#[serde(default)]` only covers a missing key. Collections and optional
//! text arrive as explicit `null` from some endpoints, and a single such value
//! must not fail the whole list.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`
///
/// # Usage
/// ```rust
/// use serde::Deserialize;
/// use workboard_domain::utils::nullable::null_as_default;
///
/// #[derive(Deserialize)]
/// struct Card {
///     #[serde(default, deserialize_with = "null_as_default")]
///     tags: Vec<String>,
/// }
///
/// let card: Card = serde_json::from_str(r#"{"tags": null}"#).unwrap();
/// assert!(card.tags.is_empty());
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::null_as_default;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        label: String,
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<u32>,
        #[serde(default, deserialize_with = "null_as_default")]
        weight: f64,
    }

    #[test]
    fn null_and_missing_both_default() {
        let explicit: Sample =
            serde_json::from_str(r#"{"label": null, "items": null, "weight": null}"#).unwrap();
        let missing: Sample = serde_json::from_str("{}").unwrap();

        for sample in [explicit, missing] {
            assert!(sample.label.is_empty());
            assert!(sample.items.is_empty());
            assert!(sample.weight.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn present_values_pass_through() {
        let sample: Sample =
            serde_json::from_str(r#"{"label": "x", "items": [1, 2], "weight": 1.5}"#).unwrap();
        assert_eq!(sample.label, "x");
        assert_eq!(sample.items, vec![1, 2]);
    }

    #[test]
    fn wrong_type_still_fails() {
        assert!(serde_json::from_str::<Sample>(r#"{"items": "nope"}"#).is_err());
    }
}
