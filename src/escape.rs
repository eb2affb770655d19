use std::fmt::Write;

/// Escapes text so it can sit between the quotes of a JSON string.
///
/// `None` maps to an empty string. Only the string-content subset of JSON
/// escaping is applied: quote, backslash, the named control shorthands and
/// `\uXXXX` for the remaining characters below 0x20. Everything else,
/// non-ASCII included, is copied through.
pub fn escape_json(value: Option<&str>) -> String {
	let value = match value {
		Some(v) => v,
		None => return String::new(),
	};
	let mut out = String::with_capacity(value.len() + 2);
	for ch in value.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\u{08}' => out.push_str("\\b"),
			'\u{0c}' => out.push_str("\\f"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c if c < ' ' => {
				write!(out, "\\u{:04x}", c as u32).ok();
			}
			c => out.push(c),
		}
	}
	out
}
