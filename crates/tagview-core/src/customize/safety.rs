// ── Image URL safety filter ──
//
// Customization values come from an operator-editable store and end up
// interpolated into image attributes. Only plain web protocols may cross
// the render boundary; `javascript:`, `data:`, `file:` and friends are
// rejected. Rejection is a boolean, never an error -- callers treat a
// blocked URL exactly like a missing one.

use tracing::warn;

const SAFE_PREFIXES: [&str; 3] = ["http://", "https://", "//"];

/// True when the trimmed, lower-cased URL starts with an allowed protocol.
pub fn is_safe_url(url: &str) -> bool {
    let trimmed = url.trim().to_lowercase();
    let safe = SAFE_PREFIXES.iter().any(|p| trimmed.starts_with(p));

    if !safe {
        warn!(url, "unsafe image URL blocked");
    }

    safe
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_protocols_are_allowed() {
        assert!(is_safe_url("http://cdn.example/a.png"));
        assert!(is_safe_url("https://x/y.png"));
        assert!(is_safe_url("//cdn/y.png"));
        assert!(is_safe_url("  HTTPS://upper.example/z.png  "));
    }

    #[test]
    fn script_and_local_protocols_are_blocked() {
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("data:image/png;base64,AAAA"));
        assert!(!is_safe_url("file:///etc/passwd"));
        assert!(!is_safe_url("ftp://host/file"));
    }

    #[test]
    fn junk_is_blocked() {
        assert!(!is_safe_url(""));
        assert!(!is_safe_url("not a url"));
    }
}
