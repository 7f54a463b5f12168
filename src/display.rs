use stm32f4xx_hal::gpio::*;

use four_lights::BOARD_SIZE;

const DISPLAY_DELAY: u32 = 3;
const DIGITS: [u8; 12] = [0x3f, 0x30, 0x5b, 0x4f, 0x66, 0x6d, 0x7d, 0x07, 0x7f, 0x67, 0x00, 0x40];
const BLANK: u8 = DIGITS[10];
const DASH: u8 = DIGITS[11];

const CMD_WRITE_AUTO: u8 = 0x40;
const CMD_READ_KEYS: u8 = 0x42;
const CMD_ADDRESS_0: u8 = 0xc0;
const CMD_DISPLAY_ON: u8 = 0x88;

pub enum KeyEvent {
    /// Key n of the board, counted from zero, which is also the column.
    Pressed { column: usize },
    Released { column: usize },
    Chord,
}

/// Numbers shown on the four two-digit banks.
pub struct Scoreboard {
    pub moves: u8,
    pub game_over: bool,
    pub red_wins: u8,
    pub yellow_wins: u8,
}

pub struct TM1638 {
    stb: Pin<'C', 8, Output>,
    clk: Pin<'C', 9, Output>,
    dio: DynamicPin<'C', 10>,
    disp_buffer: [u8; 8],
    brightness: u8,
    key_status: u8,
}

impl TM1638 {
    pub fn new(pc8: Pin<'C', 8>, pc9: Pin<'C', 9>, pc10: Pin<'C', 10>, brightness: u8) -> Self {
        let mut me = TM1638 {
            stb: pc8.into_push_pull_output(),
            clk: pc9.into_push_pull_output(),
            dio: pc10.into_dynamic(),
            disp_buffer: [BLANK; 8],
            brightness: brightness & 0x07,
            key_status: 0,
        };

        me.stb.set_high();
        me.clk.set_high();
        me.dio.make_pull_up_input();

        me.flush();
        me
    }

    fn write_byte(&mut self, data: u8) {
        for i in 0..8 {
            self.clk.set_low();
            if data & (0x01 << i) == 0 {
                self.dio.set_low().ok();
            } else {
                self.dio.set_high().ok();
            }

            cortex_m::asm::delay(DISPLAY_DELAY);
            self.clk.set_high();
            cortex_m::asm::delay(DISPLAY_DELAY);
        }
    }

    fn read_byte(&mut self) -> u8 {
        let mut data: u8 = 0;

        for i in 0..8 {
            self.clk.set_low();
            cortex_m::asm::delay(DISPLAY_DELAY);
            self.clk.set_high();
            if self.dio.is_high().unwrap_or_default() {
                data |= 0x01 << i;
            }
            cortex_m::asm::delay(DISPLAY_DELAY);
        }

        data
    }

    fn begin(&mut self, command: u8) {
        self.dio.make_push_pull_output();
        self.stb.set_low();
        cortex_m::asm::delay(DISPLAY_DELAY);
        self.write_byte(command);
    }

    fn end(&mut self) {
        self.stb.set_high();
        cortex_m::asm::delay(DISPLAY_DELAY);
    }

    fn write_command(&mut self, command: u8) {
        self.begin(command);
        self.end();
    }

    fn flush(&mut self) {
        self.write_command(CMD_WRITE_AUTO);

        self.begin(CMD_ADDRESS_0);
        let data = self.disp_buffer;
        for d in data {
            // every digit is followed by its led byte, which this board leaves dark
            self.write_byte(d);
            self.write_byte(0);
        }
        self.end();

        self.write_command(CMD_DISPLAY_ON | self.brightness);
    }

    fn set_bank(&mut self, bank: usize, digits: [u8; 2]) {
        let start = bank * 2;
        self.disp_buffer[start..start + 2].copy_from_slice(&digits);
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness & 0x07;
        self.write_command(CMD_DISPLAY_ON | self.brightness);
    }

    pub fn show(&mut self, score: &Scoreboard) {
        self.set_bank(0, two_digits(score.moves));
        self.set_bank(1, if score.game_over { [DASH, DASH] } else { [BLANK, BLANK] });
        self.set_bank(2, two_digits(score.red_wins));
        self.set_bank(3, two_digits(score.yellow_wins));
        self.flush();
    }

    fn read_buttons(&mut self) -> u8 {
        self.begin(CMD_READ_KEYS);

        self.dio.make_floating_input();
        cortex_m::asm::delay(10);

        let mut data = [0u8; 4];
        for d in &mut data {
            *d = self.read_byte();
        }

        self.dio.make_push_pull_output();
        self.end();

        // each scan byte carries two keys, bit 2 and bit 6
        let mut keys: u8 = 0;
        for (i, byte) in data.iter().enumerate() {
            if byte & 0x04 != 0 {
                keys |= 0x01 << (i * 2);
            }
            if byte & 0x40 != 0 {
                keys |= 0x01 << (i * 2 + 1);
            }
        }

        keys
    }

    pub fn get_key_event(&mut self) -> Option<KeyEvent> {
        let keys = self.read_buttons();
        if keys == self.key_status {
            return None;
        }

        let diff = self.key_status ^ keys;
        if diff.count_ones() > 1 {
            return Some(KeyEvent::Chord);
        }

        self.key_status = keys;
        let column = diff.trailing_zeros() as usize % BOARD_SIZE;

        if diff & keys != 0 {
            Some(KeyEvent::Pressed { column })
        } else {
            Some(KeyEvent::Released { column })
        }
    }
}

fn two_digits(number: u8) -> [u8; 2] {
    if number >= 100 {
        return [DASH, DASH];
    }

    let tens = number / 10;
    let ones = number % 10;
    let tens = if tens == 0 { BLANK } else { DIGITS[tens as usize] };

    [tens, DIGITS[ones as usize]]
}
