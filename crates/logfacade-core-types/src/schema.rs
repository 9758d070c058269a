//! Canonical schema constants for structured backends
//!
//! These keys are attached to every record a structured backend forwards,
//! so downstream filters can route on them.

// Canonical field keys
pub const FIELD_LOGGER: &str = "logger";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_MESSAGE: &str = "message";

// Separator between segments of a hierarchical logger name
pub const NAME_SEPARATOR: char = '.';

// Category used by backends constructed without one
pub const DEFAULT_CATEGORY: &str = "logfacade";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_LOGGER.is_empty());
        assert!(!FIELD_CATEGORY.is_empty());
        assert!(!DEFAULT_CATEGORY.is_empty());
    }

    #[test]
    fn test_field_keys_are_distinct() {
        assert_ne!(FIELD_LOGGER, FIELD_CATEGORY);
        assert_ne!(FIELD_CATEGORY, FIELD_MESSAGE);
        assert_ne!(FIELD_LOGGER, FIELD_MESSAGE);
    }
}
