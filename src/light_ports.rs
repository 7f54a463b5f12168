
use smart_leds::{SmartLedsWrite, RGB8};

use crate::board::{Board, Line, BOARD_SIZE};

pub const LED_NUM: usize = BOARD_SIZE * BOARD_SIZE;

// 0x3f of 0xff, full white draws too much from the USB supply
pub const BRIGHTNESS: u8 = 63;

/// Strip position of a board cell.
#[cfg(not(feature = "serpentine"))]
pub fn led_index(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

/// Strip position of a board cell, odd rows wired right to left.
#[cfg(feature = "serpentine")]
pub fn led_index(row: usize, col: usize) -> usize {
    if row % 2 == 0 {
        row * BOARD_SIZE + col
    } else {
        row * BOARD_SIZE + (BOARD_SIZE - 1 - col)
    }
}

pub struct LightPorts<W> {
    led_data: [RGB8; LED_NUM],
    ws: W,
}

impl<W> LightPorts<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub fn new(ws: W) -> Self {
        Self {
            led_data: [RGB8::default(); LED_NUM],
            ws,
        }
    }

    pub fn led_data(&self) -> &[RGB8; LED_NUM] {
        &self.led_data
    }

    pub fn set_cell(&mut self, row: usize, col: usize, color: RGB8) -> Result<(), &'static str> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err("cell out of range");
        }

        self.led_data[led_index(row, col)] = color;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.led_data = [RGB8::default(); LED_NUM];
    }

    pub fn paint_board(&mut self, board: &Board) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                self.led_data[led_index(row, col)] = board.cell(row, col).as_rgb();
            }
        }
    }

    /// Lights the top cell of `col` while it is still free.
    pub fn highlight_column(&mut self, board: &Board, col: usize, color: RGB8) -> Result<(), &'static str> {
        if col >= BOARD_SIZE {
            return Err("cell out of range");
        }
        if board.is_column_full(col) {
            return Ok(());
        }

        self.set_cell(0, col, color)
    }

    pub fn mark_line(&mut self, line: &Line, color: RGB8) {
        for &(row, col) in line {
            self.led_data[led_index(row, col)] = color;
        }
    }

    pub fn refresh(&mut self, updated: bool) -> Result<(), W::Error> {
        if !updated {
            return Ok(());
        }

        self.ws.write(smart_leds::brightness(self.led_data.iter().cloned(), BRIGHTNESS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player_colour::PlayerColour;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<RGB8>>,
    }

    impl SmartLedsWrite for Recorder {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn refresh_only_when_updated() {
        let mut lights = LightPorts::new(Recorder::default());
        lights.refresh(false).unwrap();
        assert!(lights.ws.frames.is_empty());
        lights.refresh(true).unwrap();
        assert_eq!(lights.ws.frames.len(), 1);
        assert_eq!(lights.ws.frames[0].len(), LED_NUM);
    }

    #[test]
    fn board_tokens_become_pixels() {
        let mut board = Board::new();
        board.drop_token(2, PlayerColour::Red).unwrap();
        board.drop_token(5, PlayerColour::Yellow).unwrap();

        let mut lights = LightPorts::new(Recorder::default());
        lights.paint_board(&board);

        let data = lights.led_data();
        assert_eq!(data[led_index(7, 2)], RGB8::new(0xff, 0x00, 0x00));
        assert_eq!(data[led_index(7, 5)], RGB8::new(0xff, 0xff, 0x00));
        assert_eq!(data.iter().filter(|c| **c != RGB8::default()).count(), 2);
    }

    #[test]
    fn frame_is_dimmed_on_write() {
        let mut lights = LightPorts::new(Recorder::default());
        lights.set_cell(0, 0, PlayerColour::Red.as_rgb()).unwrap();
        lights.refresh(true).unwrap();

        let first = lights.ws.frames[0][led_index(0, 0)];
        assert!(first.r > 0 && first.r < 0xff);
        assert_eq!((first.g, first.b), (0, 0));
        assert_eq!(lights.ws.frames[0][led_index(1, 1)], RGB8::default());
    }

    #[test]
    fn cursor_skips_full_columns() {
        let mut board = Board::new();
        for _ in 0..BOARD_SIZE {
            board.drop_token(4, PlayerColour::Yellow).unwrap();
        }
        let cursor = RGB8::new(1, 1, 1);

        let mut lights = LightPorts::new(Recorder::default());
        lights.highlight_column(&board, 3, cursor).unwrap();
        lights.highlight_column(&board, 4, cursor).unwrap();
        assert_eq!(lights.led_data()[led_index(0, 3)], cursor);
        assert_eq!(lights.led_data()[led_index(0, 4)], RGB8::default());
        assert_eq!(lights.highlight_column(&board, 8, cursor), Err("cell out of range"));
    }

    #[test]
    fn line_and_clear() {
        let mut lights = LightPorts::new(Recorder::default());
        let white = RGB8::new(0xff, 0xff, 0xff);
        lights.mark_line(&[(4, 0), (5, 1), (6, 2), (7, 3)], white);
        assert_eq!(lights.led_data()[led_index(6, 2)], white);
        lights.clear();
        assert!(lights.led_data().iter().all(|c| *c == RGB8::default()));
    }

    #[test]
    fn out_of_range_cell() {
        let mut lights = LightPorts::new(Recorder::default());
        assert_eq!(lights.set_cell(8, 0, RGB8::default()), Err("cell out of range"));
    }

    #[test]
    fn indices_cover_the_strip_once() {
        let mut seen = [false; LED_NUM];
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let idx = led_index(row, col);
                assert!(!seen[idx]);
                seen[idx] = true;
            }
        }
    }
}
