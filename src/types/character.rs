use serde::{Deserialize, Serialize};

/// One entry of the character roster as delivered by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
	pub id: String,
	pub image: String,
	pub name: String,
	pub actor: String,
}

impl CharacterRecord {
	#[must_use]
	pub fn new(
		id: impl Into<String>,
		image: impl Into<String>,
		name: impl Into<String>,
		actor: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			image: image.into(),
			name: name.into(),
			actor: actor.into(),
		}
	}

	/// Whether the record carries an image URL worth requesting.
	#[must_use]
	pub fn has_image(&self) -> bool {
		!self.image.trim().is_empty()
	}
}

/// Wire shape that refuses anything besides the four known fields.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StrictRecord {
	id: String,
	image: String,
	name: String,
	actor: String,
}

impl From<StrictRecord> for CharacterRecord {
	fn from(record: StrictRecord) -> Self {
		Self {
			id: record.id,
			image: record.image,
			name: record.name,
			actor: record.actor,
		}
	}
}

/// How tolerant the payload decoder is about object shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
	/// Exactly `id`, `image`, `name` and `actor`; anything else fails.
	#[default]
	Strict,
	/// Unknown fields are ignored. Missing fields still fail.
	Lenient,
}

/// Decode a response body into an ordered list of records.
pub fn decode_characters(
	body: &[u8],
	mode: DecodeMode,
) -> Result<Vec<CharacterRecord>, serde_json::Error> {
	match mode {
		DecodeMode::Strict => {
			let records: Vec<StrictRecord> = serde_json::from_slice(body)?;
			Ok(records.into_iter().map(CharacterRecord::from).collect())
		}
		DecodeMode::Lenient => serde_json::from_slice(body),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TWO_RECORDS: &str = r#"[
		{"id": "1", "image": "", "name": "Harry Potter", "actor": "Daniel Radcliffe"},
		{"id": "2", "image": "https://example.test/ron.jpg", "name": "Ron Weasley", "actor": "Rupert Grint"}
	]"#;

	#[test]
	fn strict_decode_keeps_wire_order() {
		let records = decode_characters(TWO_RECORDS.as_bytes(), DecodeMode::Strict).unwrap();
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].id, "1");
		assert_eq!(records[0].name, "Harry Potter");
		assert_eq!(records[1].image, "https://example.test/ron.jpg");
		assert_eq!(records[1].actor, "Rupert Grint");
	}

	#[test]
	fn strict_decode_rejects_unknown_fields() {
		let body = r#"[{"id":"1","image":"","name":"Harry","actor":"Daniel","house":"Gryffindor"}]"#;
		assert!(decode_characters(body.as_bytes(), DecodeMode::Strict).is_err());
	}

	#[test]
	fn lenient_decode_ignores_unknown_fields() {
		let body = r#"[{"id":"1","image":"","name":"Harry","actor":"Daniel","house":"Gryffindor"}]"#;
		let records = decode_characters(body.as_bytes(), DecodeMode::Lenient).unwrap();
		assert_eq!(records, vec![CharacterRecord::new("1", "", "Harry", "Daniel")]);
	}

	#[test]
	fn missing_fields_fail_in_both_modes() {
		let body = r#"[{"id":"1","name":"Harry","actor":"Daniel"}]"#;
		assert!(decode_characters(body.as_bytes(), DecodeMode::Strict).is_err());
		assert!(decode_characters(body.as_bytes(), DecodeMode::Lenient).is_err());
	}

	#[test]
	fn non_array_payload_is_rejected() {
		assert!(decode_characters(b"not json", DecodeMode::Strict).is_err());
		assert!(decode_characters(br#"{"id":"1"}"#, DecodeMode::Lenient).is_err());
	}

	#[test]
	fn empty_image_is_not_requestable() {
		assert!(!CharacterRecord::new("1", "  ", "Harry", "Daniel").has_image());
		assert!(CharacterRecord::new("1", "https://x", "Harry", "Daniel").has_image());
	}
}
