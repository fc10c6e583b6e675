use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::email::EmailMessage;
use crate::outcome::ValidationIssue;

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendEmailRequest {
  pub to: String,
  pub subject: String,
  #[serde(default)]
  pub body: Option<String>,
}

impl SendEmailRequest {
  pub fn into_message(self) -> EmailMessage {
    EmailMessage::new(self.to, self.subject, self.body.unwrap_or_default())
  }
}

/// Shape validation for the send endpoint.
///
/// The rules are an ordered list of predicate+message pairs evaluated
/// independently; every violated rule is reported, not just the first.
/// Deterministic: the same input always yields the same issue list.
pub fn validate_send_request(content_type: Option<&str>, body: &[u8]) -> Result<SendEmailRequest, Vec<ValidationIssue>> {
  let parsed: Option<Value> = serde_json::from_slice(body).ok();

  let non_empty_string = |field: &str| -> bool {
    parsed
      .as_ref()
      .and_then(|value| value.get(field))
      .and_then(Value::as_str)
      .is_some_and(|s| !s.is_empty())
  };

  let rules: [(&str, &str, bool); 3] = [
    (
      "content-type",
      "Content type must be application/json",
      content_type == Some(JSON_CONTENT_TYPE),
    ),
    ("to", "To is required", non_empty_string("to")),
    ("subject", "Subject is required", non_empty_string("subject")),
  ];

  let issues: Vec<ValidationIssue> = rules
    .into_iter()
    .filter(|(_, _, passed)| !*passed)
    .map(|(field, message, _)| ValidationIssue::new(field, message))
    .collect();

  if !issues.is_empty() {
    return Err(issues);
  }

  // All rules passed, so the body is well-formed JSON with non-empty
  // to/subject strings and this deserialization cannot fail.
  serde_json::from_slice(body).map_err(|_| vec![ValidationIssue::new("body", "Invalid request body")])
}
