#![cfg_attr(not(test), no_std)]

//! Connect-four on an 8x8 neopixel matrix.
//!
//! Everything here is hardware independent; the STM32 firmware in `main.rs`
//! only wires it to the key board and the LED strip.

pub mod board;
pub mod game;
pub mod light_ports;
pub mod opponent;
pub mod pallet;
pub mod player_colour;

pub use board::{Board, BOARD_SIZE};
pub use game::{Game, Status};
pub use light_ports::{LightPorts, LED_NUM};
pub use pallet::Highlight;
pub use player_colour::{colour_to_rgb, rgb_from_tag, PlayerColour};
