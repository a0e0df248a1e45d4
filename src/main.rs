#![no_std]
#![no_main]

use core::cell::RefCell;
use core::fmt::Write;

use critical_section::Mutex;
use esp32s3_hal::{
    clock::{ClockControl, CpuClock},
    gpio::{GpioPin, Output, PushPull},
    interrupt::{self, Priority},
    peripherals::{self, Peripherals, SPI2},
    prelude::*,
    spi::{FullDuplexMode, Spi, SpiMode},
    systimer::{Alarm, Periodic, SystemTimer, Target},
    IO,
};
use esp_backtrace as _;
use esp_println::println;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle},
};
use embedded_hal::blocking::delay::DelayMs;
use heapless::String;
use log::info;

use ili9341_tft::{clock, Color, Ili9341, SharedDisplay, SpiFramer, TickDelay};

const SPI_MHZ: u32 = 40;
const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const HEARTBEAT_MS: u32 = 500;

/// 2x2 test pattern, RGB565 big-endian: red, green / blue, white.
const TEST_IMAGE: [u8; 8] = [0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF];

// SCLK 6, MOSI 5, DC 4, CS 7, RST 8, BL 9
type Framer = SpiFramer<
    Spi<'static, SPI2, FullDuplexMode>,
    GpioPin<Output<PushPull>, 4>,
    GpioPin<Output<PushPull>, 7>,
>;
type Display = Ili9341<Framer, GpioPin<Output<PushPull>, 8>>;

static TICK_ALARM: Mutex<RefCell<Option<Alarm<Periodic, 0>>>> = Mutex::new(RefCell::new(None));
static DISPLAY: SharedDisplay<Display> = SharedDisplay::new();

#[entry]
fn main() -> ! {
    esp_println::logger::init_logger(LOG_LEVEL);
    println!("Hello World! UART is working.");

    let peripherals = Peripherals::take();
    let mut system = peripherals.SYSTEM.split();
    let clocks = ClockControl::configure(system.clock_control, CpuClock::Clock240MHz).freeze();

    // 1 kHz tick behind every delay below
    let systimer = SystemTimer::new(peripherals.SYSTIMER);
    let alarm = systimer.alarm0.into_periodic();
    alarm.set_period(1u32.kHz());
    alarm.clear_interrupt();
    alarm.interrupt_enable(true);
    critical_section::with(|cs| {
        TICK_ALARM.borrow_ref_mut(cs).replace(alarm);
    });
    interrupt::enable(peripherals::Interrupt::SYSTIMER_TARGET0, Priority::Priority1).unwrap();

    let mut delay = TickDelay::new();
    let io = IO::new(peripherals.GPIO, peripherals.IO_MUX);

    let sclk = io.pins.gpio6;
    let mosi = io.pins.gpio5;

    let spi = Spi::new_no_cs_no_miso(
        peripherals.SPI2,
        sclk,
        mosi,
        SPI_MHZ.MHz(),
        SpiMode::Mode0,
        &mut system.peripheral_clock_control,
        &clocks,
    );

    let dc = io.pins.gpio4.into_push_pull_output();
    let cs = io.pins.gpio7.into_push_pull_output();
    let rst = io.pins.gpio8.into_push_pull_output();
    let mut bl = io.pins.gpio9.into_push_pull_output();
    bl.set_high().unwrap();

    println!("Initializing ILI9341 LCD next...");
    delay.delay_ms(1000u32);

    let iface = SpiFramer::new(spi, dc, cs);
    let mut display: Display = Ili9341::new(iface, rst, &mut delay).unwrap();
    info!("ILI9341 LCD initialized, starting graphics tests");
    delay.delay_ms(1000u32);

    display.fill_screen(Color::BLACK).unwrap();
    display.draw_image(200, 10, 2, 2, &TEST_IMAGE).unwrap();

    display
        .draw_string("Hello Cworld!", 10, 10, Color::GREEN, Color::BLACK, 1)
        .unwrap();

    let mut line: String<32> = String::new();
    write!(line, "Temp : {:.1} C", 25.5f32).unwrap();
    display
        .draw_string(&line, 10, 30, Color::YELLOW, Color::BLACK, 2)
        .unwrap();

    line.clear();
    write!(line, "Humid: {:.1} %", 60.2f32).unwrap();
    display
        .draw_string(&line, 10, 70, Color::CYAN, Color::BLACK, 3)
        .unwrap();

    display
        .draw_string("Test", 10, 130, Color::MAGENTA, Color::BLACK, 4)
        .unwrap();

    let style = PrimitiveStyleBuilder::new()
        .stroke_width(4)
        .stroke_color(Rgb565::WHITE)
        .fill_color(Rgb565::RED)
        .build();
    Rectangle::new(Point::new(100, 200), Size::new(40u32, 40u32))
        .into_styled(style)
        .draw(&mut display)
        .unwrap();

    // from here on the tick handler draws too
    if DISPLAY.install(display).is_err() {
        panic!("display slot busy");
    }

    loop {
        let seconds = clock::now_ms() / 1000;
        line.clear();
        write!(line, "Up: {}s", seconds).unwrap();
        DISPLAY
            .with(|display| display.draw_string(&line, 10, 300, Color::WHITE, Color::BLACK, 1))
            .unwrap()
            .unwrap();
        info!("heartbeat {}", seconds);
        delay.delay_ms(1000u32);
    }
}

#[interrupt]
fn SYSTIMER_TARGET0() {
    critical_section::with(|cs| {
        if let Some(alarm) = TICK_ALARM.borrow_ref_mut(cs).as_mut() {
            alarm.clear_interrupt();
        }
    });
    clock::tick();

    let now = clock::now_ms();
    if now % HEARTBEAT_MS == 0 {
        let color = if (now / HEARTBEAT_MS) % 2 == 0 {
            Color::RED
        } else {
            Color::BLACK
        };
        // None while thread mode holds the display; the next beat retries
        let _ = DISPLAY.with(|display| display.fill_rect(228, 4, 8, 8, color));
    }
}
