use crate::core::constants::filter::{DENYLIST, FORBIDDEN_CHARS, STRICT_EQUALITY_MARKER};

/// Decide whether a raw match is a plausible endpoint rather than code noise.
///
/// Quote characters are not stripped or rejected, so `"/api/users"` passes
/// with its quotes intact.
pub fn is_valid(candidate: &str) -> bool {
    if DENYLIST.iter().any(|literal| *literal == candidate)
        || candidate.contains(STRICT_EQUALITY_MARKER)
    {
        return false;
    }

    !candidate.contains(FORBIDDEN_CHARS)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_is_valid__accepts_clean_paths() {
        assert!(is_valid("/api/v1/users"));
        assert!(is_valid("api/v2/orders/latest"));
        assert!(is_valid("/static/app.min.js"));
        assert!(is_valid("/search?q=term&page=2"));
    }

    #[test]
    fn test_is_valid__rejects_denylisted_literals() {
        for literal in ["\"/$\"", "\"/*\"", "\"?\"", "\"/\"", "\"//\"", "`/`"] {
            assert!(!is_valid(literal), "{literal} should be rejected");
        }
    }

    #[test]
    fn test_is_valid__denylist_is_exact_match_only() {
        assert!(is_valid("\"/api\""));
        assert!(is_valid("`/api`"));
        assert!(is_valid("/"));
    }

    #[test]
    fn test_is_valid__rejects_strict_equality_anywhere() {
        assert!(!is_valid("==="));
        assert!(!is_valid("/a===b"));
        assert!(is_valid("/a==b"));
    }

    #[test]
    fn test_is_valid__rejects_forbidden_characters() {
        let samples = [
            "https://example.com/api",
            "api;v1",
            "/api/{id}",
            "/a}",
            "/a,b",
            "/fn(x)",
            "/a|b",
            "/items[0]",
            "/not!",
            "/<tag>",
            "/x^2",
            "/glob*",
            "/a+b",
            "/with space",
        ];

        for sample in samples {
            assert!(!is_valid(sample), "{sample} should be rejected");
        }
    }

    #[test]
    fn test_is_valid__keeps_quotes() {
        assert!(is_valid("\"/api/v1/orders\""));
        assert!(is_valid("'/api/v1/orders'"));
    }

    #[test]
    fn test_is_valid__empty_string_is_accepted() {
        assert!(is_valid(""));
    }
}
