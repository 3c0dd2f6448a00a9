//! Display configuration for the status line.

use compact_str::CompactString;

/// Default number of glyphs in the bar.
pub const DEFAULT_WIDTH: usize = 40;
/// Default label printed before the bar.
pub const DEFAULT_PREFIX: &str = "Progress";
/// Default label printed once the traversal reaches 100%.
pub const DEFAULT_SUFFIX: &str = "Complete";
/// Default glyph for the completed part of the bar.
pub const DEFAULT_FILL: char = '=';
/// Default glyph for the remaining part of the bar.
pub const DEFAULT_EMPTY: char = '-';
/// Fill glyph used by the [`Style::view`] preset.
pub const VIEW_FILL: char = '*';

/// How a tracker draws its line: bar width, labels and glyphs.
///
/// Glyphs are single characters so a rendered bar always spans exactly `width` characters.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    /// Number of glyphs in the bar.
    pub width: usize,
    /// Label printed before the bar.
    pub prefix: CompactString,
    /// Label printed after the counters on the final step only.
    pub suffix: CompactString,
    /// Glyph for the completed part of the bar.
    pub fill: char,
    /// Glyph for the remaining part of the bar.
    pub empty: char,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            prefix: CompactString::const_new(DEFAULT_PREFIX),
            suffix: CompactString::const_new(DEFAULT_SUFFIX),
            fill: DEFAULT_FILL,
            empty: DEFAULT_EMPTY,
        }
    }
}

impl Style {
    /// The default style with `*` as the fill glyph.
    #[must_use]
    pub fn view() -> Self {
        Self {
            fill: VIEW_FILL,
            ..Self::default()
        }
    }
}
