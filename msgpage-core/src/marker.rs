//! Part markers
//!
//! Multi-part messages carry a leading `[k/N]` marker. While packing, the
//! total is not yet known and chunks carry a `[k/XX]` placeholder instead.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Stand-in for the total while it is still unknown
pub const PLACEHOLDER_TOTAL: &str = "XX";

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d+)/XX\]").expect("placeholder pattern is valid")
});

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d+)/(\d+)\](?: |$)").expect("marker pattern is valid")
});

/// A resolved `[index/total]` marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    /// One-based position of the part
    pub index: usize,
    /// Number of parts in the message
    pub total: usize,
}

impl Marker {
    /// Create a new marker
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }

    /// Byte length of the rendered marker
    pub fn byte_len(&self) -> usize {
        marker_len(self.index, digit_count(self.total))
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}]", self.index, self.total)
    }
}

/// Render the placeholder marker for part `index`
pub fn placeholder(index: usize) -> String {
    format!("[{index}/{PLACEHOLDER_TOTAL}]")
}

/// Byte length of `[index/N]` when `N` has `total_digits` digits
pub fn marker_len(index: usize, total_digits: usize) -> usize {
    // "[" + index + "/" + total + "]"
    digit_count(index) + total_digits + 3
}

/// Number of decimal digits in `n`
pub fn digit_count(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Replace a leading `[k/XX]` placeholder with `[k/total]`
///
/// Text without a placeholder is returned unchanged.
pub fn resolve_placeholder(chunk: &str, total: usize) -> String {
    PLACEHOLDER_RE
        .replace(chunk, |caps: &regex::Captures<'_>| {
            format!("[{}/{}]", &caps[1], total)
        })
        .into_owned()
}

/// Split a leading `[k/N]` marker from the chunk body
///
/// Returns `None` when the text does not start with a marker, including
/// markers whose numbers overflow `usize`.
pub fn parse_marker(chunk: &str) -> Option<(Marker, &str)> {
    let caps = MARKER_RE.captures(chunk)?;
    let index = caps[1].parse().ok()?;
    let total = caps[2].parse().ok()?;
    let body = &chunk[caps.get(0)?.end()..];

    Some((Marker::new(index, total), body))
}

/// Remove a leading `[k/N]` marker if one is present
pub fn strip_marker(chunk: &str) -> &str {
    parse_marker(chunk).map_or(chunk, |(_, body)| body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_display() {
        assert_eq!(Marker::new(3, 12).to_string(), "[3/12]");
        assert_eq!(Marker::new(3, 12).byte_len(), 6);
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(placeholder(1), "[1/XX]");
        assert_eq!(placeholder(104), "[104/XX]");
        assert_eq!(placeholder(7).len(), marker_len(7, 2));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(100), 3);
    }

    #[test]
    fn test_resolve_placeholder() {
        assert_eq!(resolve_placeholder("[2/XX] hello", 5), "[2/5] hello");
        assert_eq!(resolve_placeholder("[123/XX] x", 130), "[123/130] x");
        assert_eq!(resolve_placeholder("plain text", 5), "plain text");
        // Only the leading marker is touched
        assert_eq!(
            resolve_placeholder("[1/XX] see [2/XX]", 2),
            "[1/2] see [2/XX]"
        );
    }

    #[test]
    fn test_parse_marker() {
        let (marker, body) = parse_marker("[2/3] hello world").unwrap();
        assert_eq!(marker, Marker::new(2, 3));
        assert_eq!(body, "hello world");

        let (marker, body) = parse_marker("[1/1]").unwrap();
        assert_eq!(marker, Marker::new(1, 1));
        assert_eq!(body, "");
    }

    #[test]
    fn test_parse_marker_rejects_non_markers() {
        assert!(parse_marker("hello [1/2]").is_none());
        assert!(parse_marker("[1/XX] hello").is_none());
        assert!(parse_marker("[1/2]hello").is_none());
        assert!(parse_marker("[99999999999999999999999/2] x").is_none());
    }

    #[test]
    fn test_strip_marker() {
        assert_eq!(strip_marker("[4/9] tail"), "tail");
        assert_eq!(strip_marker("no marker"), "no marker");
    }
}
