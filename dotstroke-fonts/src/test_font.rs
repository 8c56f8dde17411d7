//! Font bundled for tests.

use crate::data::FontData;

/// DejaVu Sans Mono: Latin coverage, no CJK glyphs.
pub(crate) static TEST_FONT: &[u8] = include_bytes!("../fonts/DejaVuSansMono.ttf");

#[expect(clippy::expect_used, reason = "tests may panic")]
pub(crate) fn test_font() -> FontData {
    FontData::from_bytes(TEST_FONT).expect("bundled test font should parse")
}
