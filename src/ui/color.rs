//! Assist level → indicator colour.

use palette::Srgb;

/// Indicator colour per assist level, indexed by level.
const LEVEL_COLORS: [Srgb<u8>; 4] = [
    Srgb::<u8>::new(255, 0, 0),   // 0: red
    Srgb::<u8>::new(0, 255, 0),   // 1: green
    Srgb::<u8>::new(0, 0, 255),   // 2: blue
    Srgb::<u8>::new(255, 0, 255), // 3: magenta
];

/// Colour for `level`, or `None` when the LED must keep its current
/// colour (level 4 and above).
pub fn color_for(level: u8) -> Option<Srgb<u8>> {
    LEVEL_COLORS.get(usize::from(level)).copied()
}
