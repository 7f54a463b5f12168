use smart_leds::RGB8;

use crate::pallet;

/// Which player, if any, holds a cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum PlayerColour {
    Red = 0,
    Yellow = 1,
    #[default]
    Empty = 2,
}

impl PlayerColour {
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(PlayerColour::Red),
            1 => Some(PlayerColour::Yellow),
            2 => Some(PlayerColour::Empty),
            _ => None,
        }
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// The other player. `Empty` has no rival and stays `Empty`.
    pub fn rival(self) -> Self {
        match self {
            PlayerColour::Red => PlayerColour::Yellow,
            PlayerColour::Yellow => PlayerColour::Red,
            PlayerColour::Empty => PlayerColour::Empty,
        }
    }

    pub fn as_rgb(&self) -> RGB8 {
        pallet::unpack(colour_to_rgb(*self))
    }
}

/// Packed 0xRRGGBB code to show on a neopixel for `colour`.
///
/// Anything that is not a player, `Empty` included, is off.
pub fn colour_to_rgb(colour: PlayerColour) -> u32 {
    match colour {
        PlayerColour::Red => pallet::RED,
        PlayerColour::Yellow => pallet::YELLOW,
        _ => pallet::OFF,
    }
}

/// Same mapping over a raw enum tag, e.g. one read back from a frame buffer.
pub fn rgb_from_tag(tag: u8) -> u32 {
    match PlayerColour::from_tag(tag) {
        Some(colour) => colour_to_rgb(colour),
        None => pallet::OFF,
    }
}
