//! Formatter configuration.

use serde::{Deserialize, Serialize};

/// Largest indentation step honored per level; bigger values are clamped.
pub const MAX_INDENT_SIZE: usize = 16;

/// Output layout options.
///
/// Deserializes from a partial document; missing fields take their defaults,
/// so the struct can be embedded in a host application's own configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Break clauses onto separate, indented lines.
    pub beautify: bool,
    /// Spaces per indentation level when `beautify` is set.
    pub indent_size: usize,
}

impl FormatOptions {
    /// Single-line output.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            beautify: false,
            indent_size: 2,
        }
    }

    /// Multi-line output indented by `indent_size` spaces per level.
    #[must_use]
    pub const fn pretty(indent_size: usize) -> Self {
        Self {
            beautify: true,
            indent_size,
        }
    }

    /// Leading spaces for a line at `depth`, with the step clamped to
    /// [`MAX_INDENT_SIZE`].
    #[must_use]
    pub const fn indent_width(&self, depth: usize) -> usize {
        let step = if self.indent_size > MAX_INDENT_SIZE {
            MAX_INDENT_SIZE
        } else {
            self.indent_size
        };
        depth.saturating_mul(step)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::compact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert!(!options.beautify);
        assert_eq!(options.indent_size, 2);
        assert_eq!(options, FormatOptions::compact());
    }

    #[test]
    fn test_pretty() {
        let options = FormatOptions::pretty(4);
        assert!(options.beautify);
        assert_eq!(options.indent_size, 4);
    }

    #[test]
    fn test_indent_width_is_clamped() {
        assert_eq!(FormatOptions::pretty(4).indent_width(3), 12);
        assert_eq!(FormatOptions::pretty(usize::MAX).indent_width(2), 2 * MAX_INDENT_SIZE);
        assert_eq!(FormatOptions::pretty(usize::MAX).indent_width(0), 0);
    }

    #[test]
    fn test_partial_deserialize() {
        let options: FormatOptions = serde_json::from_str(r#"{"beautify": true}"#).unwrap();
        assert_eq!(options, FormatOptions::pretty(2));

        let options: FormatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, FormatOptions::default());
    }
}
