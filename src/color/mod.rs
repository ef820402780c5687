pub const NUM_LIGHTS: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub i: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn hex(rgb: u32) -> Color {
        Color {
            i: 255,
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    /// Mix towards white by `amount` out of 255, the way a pressed pad brightens.
    pub fn lighten(self, amount: u8) -> Color {
        let mix = |c: u8| (c as u16 + (255 - c as u16) * amount as u16 / 255) as u8;

        Color {
            i: self.i,
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
        }
    }
}

/// 70% opacity, how far a lit pad is pushed towards white.
pub const LIT: u8 = 178;

pub const OFF: [Color; NUM_LIGHTS] = [
    Color { i: 0, r: 0, g: 0, b: 0},
    Color { i: 0, r: 0, g: 0, b: 0},
    Color { i: 0, r: 0, g: 0, b: 0},
    Color { i: 0, r: 0, g: 0, b: 0},
];
