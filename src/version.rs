//! Version information for this crate's engine revision.
//!

/// Engine version string, bumped independently of the crate's own semver.
pub const ENGINE_VERSION: &str = "1.0.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string() {
        assert_eq!(ENGINE_VERSION, "1.0.0");
    }

    #[test]
    fn test_version_format() {
        // Verify it follows semantic versioning pattern
        let parts: Vec<&str> = ENGINE_VERSION.split('.').collect();
        assert_eq!(parts.len(), 3);

        // Each part should be numeric
        for part in parts {
            assert!(
                part.parse::<u32>().is_ok(),
                "Version part {} should be numeric",
                part
            );
        }
    }
}
