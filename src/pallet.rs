
use smart_leds::RGB8;

pub const OFF: u32 = 0x000000;
pub const RED: u32 = 0xFF0000;
pub const YELLOW: u32 = 0xFFFF00;

/// Colours drawn on top of the board that are not player tokens.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Highlight {
    Cursor,
    Winner,
}

impl Highlight {
    pub fn as_rgb(&self) -> RGB8 {
        match *self {
            Highlight::Cursor => RGB8::new(0x3f, 0x3f, 0x3f),
            Highlight::Winner => RGB8::new(0xff, 0xff, 0xff),
        }
    }
}

pub fn unpack(code: u32) -> RGB8 {
    RGB8::new(
        ((code >> 16) & 0xFF) as u8,
        ((code >> 8) & 0xFF) as u8,
        (code & 0xFF) as u8,
    )
}

pub fn pack(rgb: RGB8) -> u32 {
    ((rgb.r as u32) << 16) | ((rgb.g as u32) << 8) | rgb.b as u32
}
