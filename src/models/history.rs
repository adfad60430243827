//! Delivery history returned by `/orders/deliveryHistoryByPhone`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A customer's delivery history, kept exactly as the server sent it.
///
/// Expected shape:
///
/// ```json
/// { "customersDeliveryHistory": [ { "deliveryHistory": [ { "organizationId": "..." } ] } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryHistory(Value);

impl DeliveryHistory {
    /// Wraps an already decoded JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the raw JSON.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Returns true for `null`, `false`, zero, `{}`, `[]` and `""`.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
        }
    }

    /// Organization id of the first delivery of the first customer.
    ///
    /// Returns `None` if any step of
    /// `customersDeliveryHistory[0].deliveryHistory[0].organizationId`
    /// is missing, empty, or of the wrong type.
    pub fn organization_id(&self) -> Option<&str> {
        self.0
            .get("customersDeliveryHistory")?
            .as_array()?
            .first()?
            .get("deliveryHistory")?
            .as_array()?
            .first()?
            .get("organizationId")?
            .as_str()
    }

    /// Pretty-prints the history with two-space indentation.
    ///
    /// Non-ASCII text is written as-is, not escaped.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn history(value: Value) -> DeliveryHistory {
        DeliveryHistory::new(value)
    }

    #[test]
    fn test_organization_id_found() {
        let h = history(json!({
            "customersDeliveryHistory": [
                { "deliveryHistory": [ { "organizationId": "ORG1" }, { "organizationId": "ORG2" } ] }
            ]
        }));
        assert_eq!(h.organization_id(), Some("ORG1"));
    }

    #[test]
    fn test_organization_id_empty_customers() {
        let h = history(json!({ "customersDeliveryHistory": [] }));
        assert_eq!(h.organization_id(), None);
    }

    #[test]
    fn test_organization_id_empty_deliveries() {
        let h = history(json!({ "customersDeliveryHistory": [ { "deliveryHistory": [] } ] }));
        assert_eq!(h.organization_id(), None);
    }

    #[test]
    fn test_organization_id_missing_keys() {
        assert_eq!(history(json!({})).organization_id(), None);
        assert_eq!(
            history(json!({ "customersDeliveryHistory": [ {} ] })).organization_id(),
            None
        );
        assert_eq!(
            history(json!({ "customersDeliveryHistory": [ { "deliveryHistory": [ {} ] } ] }))
                .organization_id(),
            None
        );
    }

    #[test]
    fn test_organization_id_wrong_types() {
        assert_eq!(history(json!([1, 2, 3])).organization_id(), None);
        assert_eq!(
            history(json!({ "customersDeliveryHistory": "nope" })).organization_id(),
            None
        );
        assert_eq!(
            history(json!({ "customersDeliveryHistory": [ { "deliveryHistory": [ { "organizationId": 42 } ] } ] }))
                .organization_id(),
            None
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(history(Value::Null).is_empty());
        assert!(history(json!({})).is_empty());
        assert!(history(json!([])).is_empty());
        assert!(!history(json!({ "customersDeliveryHistory": [] })).is_empty());
        assert!(history(json!(0)).is_empty());
        assert!(history(json!(0.0)).is_empty());
        assert!(history(json!(false)).is_empty());
        assert!(!history(json!(1)).is_empty());
        assert!(!history(json!(true)).is_empty());
    }

    #[test]
    fn test_pretty_json_keeps_large_numbers_exact() {
        let h: DeliveryHistory = serde_json::from_str(
            r#"{"orderNumber":123456789012345678901234567890,"sum":1e400}"#,
        )
        .unwrap();
        assert_eq!(
            h.to_pretty_json().unwrap(),
            "{\n  \"orderNumber\": 123456789012345678901234567890,\n  \"sum\": 1e400\n}"
        );
    }

    #[test]
    fn test_pretty_json_keeps_non_ascii_and_order() {
        let h: DeliveryHistory =
            serde_json::from_str(r#"{"zeta":"Москва","alpha":1}"#).unwrap();
        assert_eq!(
            h.to_pretty_json().unwrap(),
            "{\n  \"zeta\": \"Москва\",\n  \"alpha\": 1\n}"
        );
    }
}
