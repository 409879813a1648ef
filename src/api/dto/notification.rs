//! Change notification schemas pushed by the Graph webhook.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Type of change reported for a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Created,
    Updated,
    Deleted,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Created => "created",
            ChangeType::Updated => "updated",
            ChangeType::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Individual change notification from Microsoft Graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNotification {
    /// Type of change: created, updated, deleted
    pub change_type: ChangeType,

    /// Client state if provided during subscription
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_state: Option<String>,

    /// Resource that changed, e.g. `Users/{user-id}/Messages/{message-id}`
    pub resource: String,

    /// Additional resource data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_data: Option<HashMap<String, JsonValue>>,

    /// Subscription expiration time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_expiration_date_time: Option<String>,

    /// ID of the subscription that produced this notification
    pub subscription_id: String,

    /// Tenant ID
    pub tenant_id: String,
}

/// Collection of change notifications from Microsoft Graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNotificationCollection {
    /// List of change notifications
    pub value: Vec<ChangeNotification>,

    /// Validation tokens, present during the subscription handshake only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_tokens: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> serde_json::Value {
        json!({
            "value": [
                {
                    "changeType": "created",
                    "clientState": "secret",
                    "resource": "Users/u1/Messages/m1",
                    "resourceData": {"id": "m1"},
                    "subscriptionExpirationDateTime": "2024-06-01T00:00:00Z",
                    "subscriptionId": "sub-1",
                    "tenantId": "tenant-1"
                }
            ]
        })
    }

    #[test]
    fn test_collection_parses_camel_case_fields() {
        let collection: ChangeNotificationCollection =
            serde_json::from_value(sample_payload()).unwrap();

        assert_eq!(collection.value.len(), 1);
        let notification = &collection.value[0];
        assert_eq!(notification.change_type, ChangeType::Created);
        assert_eq!(notification.client_state.as_deref(), Some("secret"));
        assert_eq!(notification.resource, "Users/u1/Messages/m1");
        assert_eq!(notification.subscription_id, "sub-1");
        assert_eq!(notification.tenant_id, "tenant-1");
        assert!(collection.validation_tokens.is_none());
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let collection: ChangeNotificationCollection = serde_json::from_value(json!({
            "value": [
                {
                    "changeType": "updated",
                    "resource": "Users/u1/Messages/m1",
                    "subscriptionId": "sub-1",
                    "tenantId": "tenant-1"
                }
            ],
            "validationTokens": ["tok"]
        }))
        .unwrap();

        let notification = &collection.value[0];
        assert_eq!(notification.client_state, None);
        assert_eq!(notification.resource_data, None);
        assert_eq!(notification.subscription_expiration_date_time, None);
        assert_eq!(
            collection.validation_tokens,
            Some(vec!["tok".to_string()])
        );
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let collection: ChangeNotificationCollection =
            serde_json::from_value(sample_payload()).unwrap();
        let reparsed: ChangeNotificationCollection =
            serde_json::from_str(&serde_json::to_string(&collection).unwrap()).unwrap();

        assert_eq!(collection, reparsed);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        // subscriptionId missing
        let result: Result<ChangeNotificationCollection, _> = serde_json::from_value(json!({
            "value": [
                {
                    "changeType": "created",
                    "resource": "Users/u1/Messages/m1",
                    "tenantId": "tenant-1"
                }
            ]
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_change_type_is_rejected() {
        let result: Result<ChangeNotification, _> = serde_json::from_value(json!({
            "changeType": "renamed",
            "resource": "r",
            "subscriptionId": "s",
            "tenantId": "t"
        }));

        assert!(result.is_err());
    }
}
