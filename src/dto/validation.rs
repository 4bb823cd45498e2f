//! Validation helpers for DTOs.

use validator::ValidationError;

/// Longest accepted player name, matching the persisted column width.
pub const PLAYER_NAME_MAX_LEN: usize = 100;

/// Validates that a player name is printable, non-blank, and at most
/// [`PLAYER_NAME_MAX_LEN`] characters.
///
/// # Examples
///
/// ```ignore
/// validate_player_name("Ada")      // Ok
/// validate_player_name("   ")      // Err - blank
/// validate_player_name("a\u{7}b") // Err - control character
/// ```
pub fn validate_player_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("player_name_blank");
        err.message = Some("Player name must not be blank".into());
        return Err(err);
    }

    if name.chars().count() > PLAYER_NAME_MAX_LEN {
        let mut err = ValidationError::new("player_name_length");
        err.message = Some(
            format!(
                "Player name must be at most {PLAYER_NAME_MAX_LEN} characters (got {})",
                name.chars().count()
            )
            .into(),
        );
        return Err(err);
    }

    if name.chars().any(char::is_control) {
        let mut err = ValidationError::new("player_name_format");
        err.message = Some("Player name must not contain control characters".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_player_name_valid() {
        assert!(validate_player_name("Ada").is_ok());
        assert!(validate_player_name("Anonymous").is_ok());
        assert!(validate_player_name("name with spaces").is_ok());
        assert!(validate_player_name(&"x".repeat(PLAYER_NAME_MAX_LEN)).is_ok());
    }

    #[test]
    fn test_validate_player_name_blank() {
        assert!(validate_player_name("").is_err());
        assert!(validate_player_name("   ").is_err());
        assert!(validate_player_name("\t").is_err());
    }

    #[test]
    fn test_validate_player_name_too_long() {
        assert!(validate_player_name(&"x".repeat(PLAYER_NAME_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_player_name_control_characters() {
        assert!(validate_player_name("a\u{7}b").is_err());
        assert!(validate_player_name("line\nbreak").is_err());
    }
}
