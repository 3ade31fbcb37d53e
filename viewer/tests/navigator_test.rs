use queuewatch_viewer::{ServerId, ServerIdError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(ServerId::from_str(""), Err(ServerIdError::Empty));
        // whitespace-only trims down to nothing
        assert_eq!(ServerId::from_str("   "), Err(ServerIdError::Empty));
        assert_eq!(ServerId::from_str("\t\n"), Err(ServerIdError::Empty));
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        for bad in ["abc", "12a", "a12", "12 34", "12.5", "-42", "+42", "0x1f"] {
            assert_eq!(
                ServerId::from_str(bad),
                Err(ServerIdError::NonNumeric),
                "input {:?} should have been rejected",
                bad
            );
        }
    }

    #[test]
    fn test_warning_text_is_user_facing() {
        assert_eq!(ServerIdError::Empty.to_string(), "please enter a server ID");
        assert_eq!(
            ServerIdError::NonNumeric.to_string(),
            "server ID must contain only numbers"
        );
    }

    #[test]
    fn test_digit_strings_are_accepted() {
        let id = ServerId::from_str("1365530615272706128").unwrap();
        assert_eq!(id.as_str(), "1365530615272706128");

        // leading zeros are still just digits
        assert!(ServerId::from_str("007").is_ok());
    }

    #[test]
    fn test_input_is_trimmed_before_validation() {
        let id = ServerId::from_str("  42  ").unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.queue_path(), "/serverqueue/42");
    }

    #[test]
    fn test_navigation_and_api_paths() {
        let id = ServerId::from_str("123").unwrap();
        assert_eq!(id.queue_path(), "/serverqueue/123");
        assert_eq!(id.api_path(), "/api/queue/123");
        assert_eq!(id.to_string(), "123");
    }
}
