//! Status light colours.
//!
//! The colour is a pure function of whether a game is running and how many
//! lives remain. Drivers decide how to show it (an RGB LED, a terminal badge).

/// Colour of the single status light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    /// No game running; waiting for level selection.
    Blue,
    /// Three lives left.
    Green,
    /// Two lives left.
    Yellow,
    /// One life left.
    Orange,
    /// No lives left (transient, the game resets immediately).
    Red,
}

impl StatusColor {
    /// Colour for the given game state.
    pub fn from_state(started: bool, lives: u8) -> Self {
        if !started {
            return Self::Blue;
        }
        match lives {
            0 => Self::Red,
            1 => Self::Orange,
            2 => Self::Yellow,
            _ => Self::Green,
        }
    }

    /// `(red, green, blue)` components.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (0x00, 0x00, 0xFF),
            Self::Green => (0x00, 0xFF, 0x00),
            Self::Yellow => (0xFF, 0xFF, 0x00),
            Self::Orange => (0xFF, 0xA0, 0x11),
            Self::Red => (0xFF, 0x00, 0x00),
        }
    }

    /// Pixel word for a WS2812 chain: GRB in the upper 24 bits.
    pub fn grb_word(self) -> u32 {
        let (r, g, b) = self.rgb();
        let grb = (u32::from(g) << 16) | (u32::from(r) << 8) | u32::from(b);
        grb << 8
    }
}
