use crate::player_colour::PlayerColour;

pub const BOARD_SIZE: usize = 8;
const LINE: usize = 4;

/// Four cells, `(row, col)`, forming a winning run.
pub type Line = [(usize, usize); LINE];

/// Connect-four grid. Row 0 is the top, tokens settle towards the last row.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[PlayerColour; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[PlayerColour::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> PlayerColour {
        self.cells[row][col]
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.cells[0][col] != PlayerColour::Empty
    }

    pub fn is_full(&self) -> bool {
        (0..BOARD_SIZE).all(|col| self.is_column_full(col))
    }

    /// Drops a token into `col` and returns the row it landed on.
    pub fn drop_token(&mut self, col: usize, colour: PlayerColour) -> Result<usize, &'static str> {
        if colour == PlayerColour::Empty {
            return Err("cannot drop an empty token");
        }
        if col >= BOARD_SIZE {
            return Err("column out of range");
        }

        for row in (0..BOARD_SIZE).rev() {
            if self.cells[row][col] == PlayerColour::Empty {
                self.cells[row][col] = colour;
                return Ok(row);
            }
        }

        Err("column full")
    }

    pub fn is_win(&self, colour: PlayerColour) -> bool {
        self.winning_line(colour).is_some()
    }

    /// First run of four for `colour`: rows, then columns, then both diagonals.
    pub fn winning_line(&self, colour: PlayerColour) -> Option<Line> {
        if colour == PlayerColour::Empty {
            return None;
        }

        let last = BOARD_SIZE - LINE;

        for row in 0..BOARD_SIZE {
            for col in 0..=last {
                let line = run(row, col, 0, 1);
                if self.holds(&line, colour) {
                    return Some(line);
                }
            }
        }

        for row in 0..=last {
            for col in 0..BOARD_SIZE {
                let line = run(row, col, 1, 0);
                if self.holds(&line, colour) {
                    return Some(line);
                }
            }
        }

        for row in 0..=last {
            for col in 0..=last {
                let line = run(row, col, 1, 1);
                if self.holds(&line, colour) {
                    return Some(line);
                }
            }
        }

        for row in 0..=last {
            for col in (LINE - 1)..BOARD_SIZE {
                let line = run(row, col, 1, -1);
                if self.holds(&line, colour) {
                    return Some(line);
                }
            }
        }

        None
    }

    fn holds(&self, line: &Line, colour: PlayerColour) -> bool {
        line.iter().all(|&(row, col)| self.cells[row][col] == colour)
    }
}

// callers keep the run inside the board
fn run(row: usize, col: usize, d_row: usize, d_col: isize) -> Line {
    let mut line = [(0, 0); LINE];
    for (k, cell) in line.iter_mut().enumerate() {
        *cell = (row + k * d_row, (col as isize + k as isize * d_col) as usize);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlayerColour::*;

    #[test]
    fn tokens_stack_from_the_bottom() {
        let mut board = Board::new();
        assert_eq!(board.drop_token(3, Red), Ok(7));
        assert_eq!(board.drop_token(3, Yellow), Ok(6));
        assert_eq!(board.cell(7, 3), Red);
        assert_eq!(board.cell(6, 3), Yellow);
        assert_eq!(board.cell(5, 3), Empty);
    }

    #[test]
    fn full_column_is_rejected() {
        let mut board = Board::new();
        for _ in 0..BOARD_SIZE {
            board.drop_token(0, Red).unwrap();
        }
        assert!(board.is_column_full(0));
        assert_eq!(board.drop_token(0, Yellow), Err("column full"));
    }

    #[test]
    fn bad_drops_are_rejected() {
        let mut board = Board::new();
        assert_eq!(board.drop_token(BOARD_SIZE, Red), Err("column out of range"));
        assert_eq!(board.drop_token(2, Empty), Err("cannot drop an empty token"));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn horizontal_win() {
        let mut board = Board::new();
        for col in 2..6 {
            board.drop_token(col, Yellow).unwrap();
        }
        assert_eq!(board.winning_line(Yellow), Some([(7, 2), (7, 3), (7, 4), (7, 5)]));
        assert!(!board.is_win(Red));
    }

    #[test]
    fn vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_token(6, Red).unwrap();
        }
        assert_eq!(board.winning_line(Red), Some([(4, 6), (5, 6), (6, 6), (7, 6)]));
    }

    #[test]
    fn three_is_not_enough() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_token(col, Red).unwrap();
        }
        board.drop_token(3, Yellow).unwrap();
        assert!(!board.is_win(Red));
        assert!(!board.is_win(Yellow));
    }

    #[test]
    fn diagonal_win() {
        let mut board = Board::new();
        // staircase rising to the left: red on (7,3) (6,2) (5,1) (4,0)
        for (col, fillers) in [(3, 0), (2, 1), (1, 2), (0, 3)] {
            for _ in 0..fillers {
                board.drop_token(col, Yellow).unwrap();
            }
            board.drop_token(col, Red).unwrap();
        }
        assert_eq!(board.winning_line(Red), Some([(4, 0), (5, 1), (6, 2), (7, 3)]));
    }

    #[test]
    fn anti_diagonal_win() {
        let mut board = Board::new();
        for (col, fillers) in [(4, 0), (5, 1), (6, 2), (7, 3)] {
            for _ in 0..fillers {
                board.drop_token(col, Red).unwrap();
            }
            board.drop_token(col, Yellow).unwrap();
        }
        assert_eq!(board.winning_line(Yellow), Some([(4, 7), (5, 6), (6, 5), (7, 4)]));
    }

    #[test]
    fn empty_never_wins() {
        assert!(!Board::new().is_win(Empty));
    }

    #[test]
    fn board_fills_up() {
        let mut board = Board::new();
        assert!(!board.is_full());
        for col in 0..BOARD_SIZE {
            for row in 0..BOARD_SIZE {
                let colour = if (row / 2 + col) % 2 == 0 { Red } else { Yellow };
                board.drop_token(col, colour).unwrap();
            }
        }
        assert!(board.is_full());
    }
}
