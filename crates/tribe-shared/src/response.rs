//! Error body shared by every endpoint: RFC 7807 problem details
//! (https://datatracker.ietf.org/doc/html/rfc7807).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// URI identifying the problem type; `about:blank` when the status code
    /// says it all.
    #[serde(rename = "type")]
    pub error_type: String,

    /// Short human-readable summary of the problem type.
    pub title: String,

    /// HTTP status code, duplicated in the body for clients that drop it.
    pub status: u16,

    /// Explanation specific to this occurrence, e.g. which field failed
    /// validation or which id was not found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn unauthorized() -> Self {
        Self::new(401, "Unauthorized")
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::new(409, "Conflict").with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_omitted_when_absent() {
        let body = serde_json::to_value(ErrorResponse::unauthorized()).unwrap();
        assert_eq!(body["status"], 401);
        assert_eq!(body["type"], "about:blank");
        assert!(body.get("detail").is_none());
    }

    #[test]
    fn test_detail_is_carried_when_present() {
        let body = serde_json::to_value(ErrorResponse::bad_request("Title is required")).unwrap();
        assert_eq!(body["detail"], "Title is required");
    }
}
