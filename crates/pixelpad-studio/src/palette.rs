use pixelpad_canvas::Pixel;
use pixelpad_engine::input::Key;

/// Colors on the digit row, `1` first and `0` last.
pub const PALETTE: [Pixel; 10] = [
    Pixel::BLACK,
    Pixel::WHITE,
    Pixel::rgb(239, 68, 68),
    Pixel::rgb(249, 115, 22),
    Pixel::rgb(234, 179, 8),
    Pixel::rgb(34, 197, 94),
    Pixel::rgb(6, 182, 212),
    Pixel::rgb(59, 130, 246),
    Pixel::rgb(168, 85, 247),
    Pixel::rgba(100, 116, 139, 128),
];

/// Palette entry for a digit key.
pub fn color_for_key(key: Key) -> Option<Pixel> {
    let slot = match key.digit()? {
        0 => 9,
        d => usize::from(d) - 1,
    };
    PALETTE.get(slot).copied()
}
