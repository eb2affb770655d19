use crate::escape::escape_json;

pub const USER_AGENT: &str = "hooknotify-webhook";
pub const CONTENT_TYPE: &str = "application/json";

/// Request body for a chat-style incoming webhook: a single `content` field.
pub fn build_payload(content: &str) -> String {
	format!("{{\"content\": \"{}\"}}", escape_json(Some(content)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::Value;

	#[test]
	fn simple_body_is_exact() {
		assert_eq!(build_payload("hello"), "{\"content\": \"hello\"}");
		assert_eq!(build_payload(""), "{\"content\": \"\"}");
	}

	#[test]
	fn body_is_valid_json_with_one_key() {
		let content = "disk \"low\"\n\u{07}bell \\ 100% ✓";
		let value: Value = serde_json::from_str(&build_payload(content)).unwrap();
		let obj = value.as_object().unwrap();
		assert_eq!(obj.len(), 1);
		assert_eq!(obj["content"], content);
	}
}
