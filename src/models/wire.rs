//! Lenient field decoding shared by the backend records

use serde::{Deserialize, Deserializer};

/// `deserialize_with` for fields the backend sometimes sends as `null`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Pick the record id from the `_id` and `id` keys.
///
/// Records written by the database carry `_id`; serialized documents often
/// repeat it as `id`. Either may be present, or both.
pub fn record_id(object_id: Option<String>, id: Option<String>) -> Result<String, String> {
    object_id
        .filter(|value| !value.is_empty())
        .or(id.filter(|value| !value.is_empty()))
        .ok_or_else(|| "missing field `id`".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Tags {
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_as_default() {
        let tags: Tags = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(tags.tags.is_empty());

        let tags: Tags = serde_json::from_str(r#"{}"#).unwrap();
        assert!(tags.tags.is_empty());

        let tags: Tags = serde_json::from_str(r#"{"tags": ["a"]}"#).unwrap();
        assert_eq!(tags.tags, vec!["a"]);
    }

    #[test]
    fn test_record_id() {
        assert_eq!(record_id(Some("a".into()), None).unwrap(), "a");
        assert_eq!(record_id(None, Some("b".into())).unwrap(), "b");
        assert_eq!(record_id(Some("a".into()), Some("a".into())).unwrap(), "a");
        assert_eq!(record_id(Some(String::new()), Some("b".into())).unwrap(), "b");
        assert!(record_id(None, None).is_err());
    }
}
