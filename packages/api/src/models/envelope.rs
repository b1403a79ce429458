use serde::Deserialize;

use crate::error::ApiError;

/// The `{ success, message, data }` wrapper every backend response uses.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Missing means success; only an explicit `false` is a rejection.
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

impl<T> Envelope<T> {
    /// Unwrap the payload, turning `success: false` into [`ApiError::Rejected`].
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.message.unwrap_or_default()));
        }
        self.data.ok_or(ApiError::MissingData)
    }

    /// Like [`into_data`](Self::into_data) for replies whose payload is ignored.
    pub fn into_outcome(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.message.unwrap_or_default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStats;

    #[test]
    fn test_success_with_data() {
        let envelope: Envelope<TaskStats> =
            serde_json::from_str(r#"{"success":true,"data":{"completed":2,"pending":3}}"#).unwrap();
        let stats = envelope.into_data().unwrap();
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 3);
    }

    #[test]
    fn test_rejected_keeps_message() {
        let envelope: Envelope<TaskStats> =
            serde_json::from_str(r#"{"success":false,"message":"User already exists","data":null}"#)
                .unwrap();
        match envelope.into_data() {
            Err(ApiError::Rejected(message)) => assert_eq!(message, "User already exists"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_success_without_data() {
        let envelope: Envelope<TaskStats> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(envelope.into_data(), Err(ApiError::MissingData)));
    }

    #[test]
    fn test_outcome_ignores_missing_data() {
        let ok: Envelope<serde_json::Value> = serde_json::from_str(r#"{"message":"Deleted"}"#).unwrap();
        assert!(ok.into_outcome().is_ok());

        let rejected: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":false,"message":"Not yours"}"#).unwrap();
        assert!(matches!(rejected.into_outcome(), Err(ApiError::Rejected(ref m)) if m == "Not yours"));
    }
}
