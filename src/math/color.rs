/// Linear RGB color, each channel in [0, 1]
pub type Color = [f32; 3];

pub const WHITE: Color = [1.0, 1.0, 1.0];

/// CSS `green` (0x008000)
pub const GREEN: Color = [0.0, 128.0 / 255.0, 0.0];

/// Convert a packed 0xRRGGBB value to a color
pub const fn rgb_from_hex(hex: u32) -> Color {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
