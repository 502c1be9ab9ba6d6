use serde::Serialize;

use crate::manifest::ChecksumManifest;

/// Outcome of matching one computed digest against the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchState {
    Match,
    Mismatch,
    /// The manifest carries no digest for this model/version/side. Distinct
    /// from an explicit mismatch.
    Unknown,
}

impl MatchState {
    fn of(computed: &str, expected: Option<&str>) -> Self {
        match expected {
            Some(expected) if expected.eq_ignore_ascii_case(computed) => MatchState::Match,
            Some(_) => MatchState::Mismatch,
            None => MatchState::Unknown,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            MatchState::Match => "Match",
            MatchState::Mismatch => "No match",
            MatchState::Unknown => "Not available",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub left_checksum: String,
    pub right_checksum: String,
    pub left_match: MatchState,
    pub right_match: MatchState,
}

/// Compares both computed digests against the manifest entry for the given
/// model/version. Hex comparison is case-insensitive; absent manifest keys
/// degrade to `Unknown`.
pub fn compare(
    model_name: &str,
    version: &str,
    left_checksum: String,
    right_checksum: String,
    manifest: &ChecksumManifest,
) -> ComparisonResult {
    let expected = manifest.expected(model_name, version);
    let left_match = MatchState::of(&left_checksum, expected.and_then(|e| e.left.as_deref()));
    let right_match = MatchState::of(&right_checksum, expected.and_then(|e| e.right.as_deref()));

    ComparisonResult {
        left_checksum,
        right_checksum,
        left_match,
        right_match,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(json: &str) -> ChecksumManifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn absent_entry_is_unknown_not_mismatch() {
        let manifest = manifest("{}");
        let result = compare("S505 cc ultra", "153", "aa".into(), "bb".into(), &manifest);
        assert_eq!(result.left_match, MatchState::Unknown);
        assert_eq!(result.right_match, MatchState::Unknown);
    }

    #[test]
    fn absent_version_is_unknown() {
        let manifest = manifest(r#"{"S505 cc ultra": {"152": {"left": "aa", "right": "bb"}}}"#);
        let result = compare("S505 cc ultra", "153", "aa".into(), "bb".into(), &manifest);
        assert_eq!(result.left_match, MatchState::Unknown);
        assert_eq!(result.right_match, MatchState::Unknown);
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let digest = "a".repeat(32) + &"b".repeat(32);
        let manifest = manifest(&format!(
            r#"{{"V5.2 TB": {{"108": {{"left": "{}", "right": "{}"}}}}}}"#,
            digest.to_uppercase(),
            digest
        ));

        let result = compare(
            "V5.2 TB",
            "108",
            digest.clone(),
            digest.to_uppercase(),
            &manifest,
        );
        assert_eq!(result.left_match, MatchState::Match);
        assert_eq!(result.right_match, MatchState::Match);
    }

    #[test]
    fn wrong_digest_is_a_mismatch() {
        let manifest = manifest(r#"{"S505 cc ultra": {"153": {"left": "aa", "right": "bb"}}}"#);
        let result = compare("S505 cc ultra", "153", "aa".into(), "cc".into(), &manifest);
        assert_eq!(result.left_match, MatchState::Match);
        assert_eq!(result.right_match, MatchState::Mismatch);
    }

    #[test]
    fn side_missing_from_entry_is_unknown_for_that_side_only() {
        let manifest = manifest(r#"{"S505 cc ultra": {"153": {"left": "aa"}}}"#);
        let result = compare("S505 cc ultra", "153", "aa".into(), "bb".into(), &manifest);
        assert_eq!(result.left_match, MatchState::Match);
        assert_eq!(result.right_match, MatchState::Unknown);
    }

    #[test]
    fn uppercase_computed_digest_matches_lowercase_manifest() {
        let expected = format!("aa{}", "0".repeat(62));
        let manifest = manifest(&format!(
            r#"{{"V5.2 TB": {{"153": {{"left": "{}", "right": "{}"}}}}}}"#,
            expected,
            "b".repeat(64)
        ));

        let result = compare(
            "V5.2 TB",
            "153",
            expected.to_uppercase(),
            "b".repeat(64),
            &manifest,
        );
        assert_eq!(result.left_match, MatchState::Match);
        assert_eq!(result.right_match, MatchState::Match);
    }
}
