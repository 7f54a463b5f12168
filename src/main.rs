#![no_main]
#![no_std]

// Halt on panic
use panic_halt as _; // panic handler

use cortex_m_rt::entry;
use stm32f4xx_hal as hal;

use crate::hal::gpio::NoPin;
use crate::hal::pac;
use crate::hal::pac::{SPI1, TIM2};
use crate::hal::prelude::*;
use crate::hal::spi::Spi;
use crate::hal::timer::Counter;

use ws2812_spi as ws2812;
use crate::ws2812::prerendered::Ws2812;

use rtt_target::rprintln;
use rtt_target::rtt_init_print;

use four_lights::{opponent, Game, Highlight, LightPorts, PlayerColour, Status, LED_NUM};

mod display;
use display::*;

const LOOP_PERIOD_MS: u32 = 100;
const DISPLAY_BRIGHTNESS: u8 = 7;

const HUMAN: PlayerColour = PlayerColour::Red;
const COMPUTER: PlayerColour = PlayerColour::Yellow;

type Millis = fugit::TimerInstantU32<1000>;

#[entry]
fn main() -> ! {
    rtt_init_print!();

    // Acquire the device peripherals
    let dp = pac::Peripherals::take().unwrap();

    let rcc = dp.RCC.constrain();
    let clocks: hal::rcc::Clocks = rcc.cfgr.sysclk(48.MHz()).freeze();

    let mut sys_timer: Counter<TIM2, 1000> = dp.TIM2.counter_ms(&clocks);
    sys_timer.start(u32::MAX.millis()).unwrap();

    let gpioa = dp.GPIOA.split();
    let gpioc = dp.GPIOC.split();

    let mut keys = TM1638::new(gpioc.pc8, gpioc.pc9, gpioc.pc10, DISPLAY_BRIGHTNESS);

    // SPI1 with 3Mhz
    let spi: Spi<SPI1> = Spi::new(
        dp.SPI1,
        (gpioa.pa5.into_alternate(), NoPin::new(), gpioa.pa7.into_alternate()),
        ws2812::MODE,
        3_000_000.Hz(),
        &clocks,
    );

    let mut buffer = [0u8; (LED_NUM * 12) + 30];
    let mut lights = LightPorts::new(Ws2812::new(spi, &mut buffer));

    let mut game = Game::new(HUMAN);
    let mut score = Scoreboard {
        moves: 0,
        game_over: false,
        red_wins: 0,
        yellow_wins: 0,
    };
    let mut cursor: Option<usize> = None;

    rprintln!("four lights: {:?} to play", HUMAN);

    loop {
        let started: Millis = sys_timer.now();
        let mut redraw = false;

        if game.turn() == Some(COMPUTER) {
            if let Some(col) = opponent::choose_column(game.board(), COMPUTER, HUMAN, started.ticks()) {
                record(game.play(col), &mut score);
            }
        }

        match keys.get_key_event() {
            Some(KeyEvent::Pressed { .. }) if game.is_over() => {
                rprintln!("new game");
                game.reset();
            },
            Some(KeyEvent::Pressed { column }) if game.turn() == Some(HUMAN) => {
                cursor = Some(column);
                redraw = true;
                record(game.play(column), &mut score);
            },
            Some(KeyEvent::Released { .. }) => {
                cursor = None;
                redraw = true;
            },
            Some(KeyEvent::Chord) => {
                rprintln!("one key at a time");
            },
            _ => {}
        }

        if game.take_update() || redraw {
            lights.paint_board(game.board());
            if let Some(col) = cursor {
                lights.highlight_column(game.board(), col, Highlight::Cursor.as_rgb()).ok();
            }
            if let Status::Won { line, .. } = game.status() {
                lights.mark_line(&line, Highlight::Winner.as_rgb());
            }
            if lights.refresh(true).is_err() {
                rprintln!("led write failed");
            }

            score.moves = game.moves();
            score.game_over = game.is_over();
            keys.show(&score);
        }

        let timeout = started + LOOP_PERIOD_MS.millis();
        while sys_timer.now() < timeout {}
    }
}

fn record(result: Result<Status, &'static str>, score: &mut Scoreboard) {
    match result {
        Ok(Status::Won { winner: PlayerColour::Red, .. }) => {
            score.red_wins = score.red_wins.saturating_add(1);
        },
        Ok(Status::Won { winner: PlayerColour::Yellow, .. }) => {
            score.yellow_wins = score.yellow_wins.saturating_add(1);
        },
        Ok(_) => {},
        Err(e) => {
            rprintln!("move rejected: {}", e);
        },
    }
}
