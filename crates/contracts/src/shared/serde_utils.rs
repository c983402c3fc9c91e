use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` like a missing field.
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct Probe {
        #[serde(deserialize_with = "null_to_default")]
        name: String,
        #[serde(deserialize_with = "null_to_default")]
        qty: i64,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let p: Probe = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(p.name, "");
        assert_eq!(p.qty, 0);

        let p: Probe = serde_json::from_str(r#"{"name":"x","qty":3}"#).unwrap();
        assert_eq!(p.name, "x");
        assert_eq!(p.qty, 3);
    }
}
