use serde::{Deserialize, Serialize};

/// Every console endpoint wraps its data as `{ "payload": ... }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub payload: Option<T>,
}

impl<T: Default> Envelope<T> {
    /// The payload, or its default when the server sent none (or `null`).
    pub fn into_payload(self) -> T {
        self.payload.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawMenu;
    use serde_json::json;

    #[test]
    fn test_missing_or_null_payload_defaults() {
        let missing: Envelope<Vec<RawMenu>> = serde_json::from_value(json!({})).unwrap();
        assert!(missing.into_payload().is_empty());

        let null: Envelope<Vec<RawMenu>> =
            serde_json::from_value(json!({"payload": null})).unwrap();
        assert!(null.into_payload().is_empty());
    }
}
