//! ARGB8888 color constants and packing helpers.

pub const BACKGROUND: u32 = 0xFF000000;
pub const GRID: u32 = 0xFF333333;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;
pub const YELLOW: u32 = 0xFFFFFF00;
pub const CYAN: u32 = 0xFF00FFFF;
pub const MAGENTA: u32 = 0xFFFF00FF;
pub const GRAY: u32 = 0xFF808080;

/// Colors cycled through for chart series and sectors.
pub const PALETTE: [u32; 6] = [RED, GREEN, BLUE, YELLOW, CYAN, MAGENTA];

#[inline]
pub const fn pack(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Splits a packed color into `[a, r, g, b]`.
#[inline]
pub const fn unpack(color: u32) -> [u8; 4] {
    [
        (color >> 24) as u8,
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
    ]
}

pub fn palette(index: usize) -> u32 {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        assert_eq!(pack(0xFF, 0xFF, 0x00, 0xFF), MAGENTA);
        assert_eq!(unpack(YELLOW), [0xFF, 0xFF, 0xFF, 0x00]);
        assert_eq!(palette(PALETTE.len()), RED);
    }
}
