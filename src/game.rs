use rtt_target::rprintln;

use crate::board::{Board, Line};
use crate::player_colour::PlayerColour;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    Playing { turn: PlayerColour },
    Won { winner: PlayerColour, line: Line },
    Draw,
}

pub struct Game {
    board: Board,
    first: PlayerColour,
    status: Status,
    moves: u8,
    update: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(PlayerColour::Red)
    }
}

impl Game {
    pub fn new(first: PlayerColour) -> Self {
        let first = match first {
            PlayerColour::Empty => PlayerColour::Red,
            colour => colour,
        };

        Self {
            board: Board::new(),
            first,
            status: Status::Playing { turn: first },
            moves: 0,
            update: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn moves(&self) -> u8 {
        self.moves
    }

    pub fn turn(&self) -> Option<PlayerColour> {
        match self.status {
            Status::Playing { turn } => Some(turn),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.turn().is_none()
    }

    pub fn play(&mut self, col: usize) -> Result<Status, &'static str> {
        let turn = match self.turn() {
            Some(turn) => turn,
            None => return Err("game is over"),
        };

        let row = self.board.drop_token(col, turn)?;
        self.moves += 1;
        self.update = true;
        rprintln!("move {}: {:?} -> ({}, {})", self.moves, turn, row, col);

        self.status = if let Some(line) = self.board.winning_line(turn) {
            rprintln!("{:?} wins: {:?}", turn, line);
            Status::Won { winner: turn, line }
        } else if self.board.is_full() {
            rprintln!("draw");
            Status::Draw
        } else {
            Status::Playing { turn: turn.rival() }
        };

        Ok(self.status)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.first);
    }

    /// True once after every change to the board.
    pub fn take_update(&mut self) -> bool {
        core::mem::replace(&mut self.update, false)
    }
}
