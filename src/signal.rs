use anyhow::{anyhow, Error};
use std::convert::TryFrom;
use std::fmt;

use crate::color::{Color, NUM_LIGHTS};

/// One of the four pads, each a fixed color and buzzer tone.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub enum Signal {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Signal {
    pub const ALL: [Signal; NUM_LIGHTS] = [Signal::Red, Signal::Green, Signal::Blue, Signal::Yellow];

    pub fn index(self) -> usize {
        match self {
            Signal::Red => 0,
            Signal::Green => 1,
            Signal::Blue => 2,
            Signal::Yellow => 3,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Signal::Red => Color::hex(0xFF0000),
            Signal::Green => Color::hex(0x00FF00),
            Signal::Blue => Color::hex(0x0000FF),
            Signal::Yellow => Color::hex(0xFFFF00),
        }
    }

    /// Buzzer frequency in Hz.
    pub fn tone(self) -> f32 {
        match self {
            Signal::Red => 2000.0,
            Signal::Green => 3000.0,
            Signal::Blue => 3500.0,
            Signal::Yellow => 4000.0,
        }
    }
}

impl TryFrom<u8> for Signal {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Signal::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| anyhow!("Signal id {} is out of range 0..{}", id, NUM_LIGHTS))
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
