//! # Input Validation
//!
//! Validation for user input before it reaches the API layer.

use unicode_segmentation::UnicodeSegmentation;

/// Exact number of emoji in every message and reply.
pub const REQUIRED_EMOJI_COUNT: usize = 3;

/// Minimum length the server accepts for a group name.
pub const MIN_GROUP_NAME_LEN: usize = 3;

/// Result of a validation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(msg.into()),
        }
    }
}

/// Validate an email address. Minimal structural check; the server has the
/// final say.
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::invalid("Email is required");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return ValidationResult::invalid("Email must contain @");
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return ValidationResult::invalid("Email format is invalid");
    }

    ValidationResult::valid()
}

/// Validate message content: exactly three emoji, counted as extended
/// grapheme clusters so multi-codepoint emoji (skin tones, ZWJ sequences,
/// flags) count as one each.
pub fn validate_emojis(emojis: &str) -> ValidationResult {
    let count = emojis.graphemes(true).count();
    if count != REQUIRED_EMOJI_COUNT {
        return ValidationResult::invalid(format!(
            "You need to send exactly {REQUIRED_EMOJI_COUNT} emojis"
        ));
    }

    ValidationResult::valid()
}

/// Validate a new group's name.
pub fn validate_group_name(name: &str) -> ValidationResult {
    let name = name.trim();
    if name.is_empty() {
        return ValidationResult::invalid("Group name is required");
    }
    if name.chars().count() < MIN_GROUP_NAME_LEN {
        return ValidationResult::invalid(format!(
            "Group name must be at least {MIN_GROUP_NAME_LEN} characters"
        ));
    }

    ValidationResult::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_normal_addresses() {
        assert!(validate_email("alice@example.com").is_valid);
        assert!(validate_email("  bob@school.edu  ").is_valid);
    }

    #[test]
    fn test_validate_email_rejects_bad_shapes() {
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("no-at-sign").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("alice@").is_valid);
        assert!(!validate_email("alice@nodot").is_valid);
    }

    #[test]
    fn test_validate_emojis_requires_exactly_three() {
        assert!(validate_emojis("🍕🌮🍣").is_valid);
        assert!(!validate_emojis("🍕🌮").is_valid);
        assert!(!validate_emojis("🍕🌮🍣🍜").is_valid);
        assert!(!validate_emojis("").is_valid);
    }

    #[test]
    fn test_validate_emojis_counts_grapheme_clusters() {
        // ZWJ family sequence plus a skin-toned wave plus a flag: three
        // emoji, many more codepoints.
        let emojis = "👨‍👩‍👧‍👦👋🏽🇧🇷";
        assert!(validate_emojis(emojis).is_valid);
    }

    #[test]
    fn test_validate_group_name_rules() {
        assert!(validate_group_name("lunch crew").is_valid);
        assert!(!validate_group_name("").is_valid);
        assert!(!validate_group_name("  ").is_valid);
        assert!(!validate_group_name("ab").is_valid);
        assert!(validate_group_name("abc").is_valid);
    }
}
