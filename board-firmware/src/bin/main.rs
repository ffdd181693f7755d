// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module
use status_board_firmware::BoardCommandChannel;
use status_board_firmware::tasks::{lamp_test, status_board_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime, spawnt den
/// Status-Board-Task und fährt den Lampentest.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Seed für Zufallsfarben (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // Board Command-Channel erstellen (beliebiger Task → Status-Board-Task)
    static COMMAND_CHANNEL: static_cell::StaticCell<BoardCommandChannel> =
        static_cell::StaticCell::new();
    let command_channel = COMMAND_CHANNEL.init(BoardCommandChannel::new());
    let command_sender = command_channel.sender();
    let command_receiver = command_channel.receiver();

    // Spawn Status Board Task (besitzt den Strip exklusiv)
    spawner
        .spawn(status_board_task(
            peripherals.GPIO8,
            peripherals.RMT,
            seed,
            command_receiver,
        ))
        .unwrap();

    lamp_test(command_sender).await;

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
