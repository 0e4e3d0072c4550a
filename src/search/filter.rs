use crate::types::CharacterRecord;

/// A lowercased query, prepared once and tested against many names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
	lowered: String,
}

impl Needle {
	#[must_use]
	pub fn new(query: &str) -> Self {
		Self {
			lowered: query.to_lowercase(),
		}
	}

	/// An empty needle matches every name.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.lowered.is_empty()
	}

	#[must_use]
	pub fn matches(&self, name: &str) -> bool {
		self.is_empty() || name.to_lowercase().contains(&self.lowered)
	}
}

/// Positions in `records` whose name contains `query`, in original order.
#[must_use]
pub fn matching_indices(records: &[CharacterRecord], query: &str) -> Vec<usize> {
	if query.is_empty() {
		return (0..records.len()).collect();
	}
	let needle = Needle::new(query);
	records
		.iter()
		.enumerate()
		.filter(|(_, record)| needle.matches(&record.name))
		.map(|(index, _)| index)
		.collect()
}

/// The subsequence of `records` whose name contains `query`.
#[must_use]
pub fn filter(records: &[CharacterRecord], query: &str) -> Vec<CharacterRecord> {
	if query.is_empty() {
		return records.to_vec();
	}
	matching_indices(records, query)
		.into_iter()
		.filter_map(|index| records.get(index).cloned())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn roster() -> Vec<CharacterRecord> {
		vec![
			CharacterRecord::new("1", "", "Harry Potter", "Daniel Radcliffe"),
			CharacterRecord::new("2", "", "Ron Weasley", "Rupert Grint"),
			CharacterRecord::new("3", "", "Hermione Granger", "Emma Watson"),
			CharacterRecord::new("4", "", "Ginny Weasley", "Bonnie Wright"),
			CharacterRecord::new("5", "", "Lily Potter", "Geraldine Somerville"),
		]
	}

	fn ids(records: &[CharacterRecord]) -> Vec<&str> {
		records.iter().map(|record| record.id.as_str()).collect()
	}

	#[test]
	fn empty_query_is_identity() {
		let records = roster();
		assert_eq!(filter(&records, ""), records);
		assert_eq!(matching_indices(&records, ""), vec![0, 1, 2, 3, 4]);
	}

	#[test]
	fn matches_keep_original_order() {
		let records = roster();
		assert_eq!(ids(&filter(&records, "weasley")), vec!["2", "4"]);
		assert_eq!(ids(&filter(&records, "potter")), vec!["1", "5"]);
	}

	#[test]
	fn result_is_exactly_the_matching_subsequence() {
		let records = roster();
		for query in ["r", "er", "ny", "y p", "zzz", "Potter", " "] {
			let expected: Vec<CharacterRecord> = records
				.iter()
				.filter(|record| record.name.to_lowercase().contains(&query.to_lowercase()))
				.cloned()
				.collect();
			assert_eq!(filter(&records, query), expected, "query {query:?}");
		}
	}

	#[test]
	fn filtering_is_idempotent() {
		let records = roster();
		for query in ["", "a", "weasley", "POTTER", "nothing"] {
			let once = filter(&records, query);
			assert_eq!(filter(&once, query), once, "query {query:?}");
		}
	}

	#[test]
	fn filtering_ignores_case() {
		let records = roster();
		assert_eq!(filter(&records, "HARRY"), filter(&records, "harry"));
		assert_eq!(ids(&filter(&records, "hArRy")), vec!["1"]);
	}

	#[test]
	fn non_ascii_names_fold_case() {
		let records = vec![
			CharacterRecord::new("1", "", "Fleur Delacour", "Clémence Poésy"),
			CharacterRecord::new("2", "", "ÉLOISE MIDGEN", "Unknown"),
		];
		assert_eq!(ids(&filter(&records, "éloise")), vec!["2"]);
	}

	#[test]
	fn whitespace_is_part_of_the_query() {
		let records = roster();
		assert_eq!(ids(&filter(&records, "n w")), vec!["2"]);
		assert!(filter(&records, "  ").is_empty());
	}

	#[test]
	fn needle_matches_everything_when_empty() {
		let needle = Needle::new("");
		assert!(needle.is_empty());
		assert!(needle.matches(""));
		assert!(needle.matches("Anything"));
	}
}
