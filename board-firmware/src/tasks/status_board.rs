// Status Board Task - Besitzt den Pixel-Treiber und führt Kommandos aus
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_hal_smartled::smart_led_buffer;

use crate::config::{
    LAMP_TEST_STEP_MS, PIXEL_COUNT, RMT_CLOCK_MHZ, STATUS_BOARD_BRIGHTNESS, STATUS_BOARD_GPIO_PIN,
};
use crate::hal::RmtPixelWriter;
use crate::{
    Board, BoardCommand, BoardCommandReceiver, BoardCommandSender, NamedColor, PixelWriter,
    StatusBoard,
};

/// Status Board Logic - Kommando-Schleife des Tasks
///
/// Wartet auf Kommandos und führt sie nacheinander mit
/// `StatusBoard::apply()` aus (Host-Tests in board-tests).
/// Fehler werden geloggt, der Task läuft weiter.
///
/// # Parameter
/// - `board`: Status Board (Hardware oder Mock Writer)
/// - `command_receiver`: Channel Receiver für Board-Kommandos
pub async fn status_board_logic<W: PixelWriter, const N: usize>(
    mut board: StatusBoard<W, N>,
    command_receiver: BoardCommandReceiver,
) -> ! {
    loop {
        let command = command_receiver.receive().await;
        info!("Status board: {}", command);

        if let Err(e) = board.apply(command) {
            error!("Status board: {} failed: {}", command, e);
        }
    }
}

/// Status Board Task - Embassy Task für den Pixel-Treiber
///
/// Übernimmt die Hardware-Initialisierung und ruft dann
/// `status_board_logic()` auf. Nur dieser Task schreibt auf den Strip.
///
/// # Parameter
/// - `gpio`: GPIO Peripheral für die Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `seed`: Seed für Zufallsfarben (vom Hardware-RNG)
/// - `command_receiver`: Channel Receiver für Board-Kommandos
#[embassy_executor::task]
pub async fn status_board_task(
    gpio: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    seed: u64,
    command_receiver: BoardCommandReceiver,
) {
    // Buffer für SmartLED Daten erstellen
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(PIXEL_COUNT);

    // Init-Fehler sind fatal
    let writer = RmtPixelWriter::new(gpio, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer)
        .expect("Failed to initialize RMT pixel writer");

    // Board erstellen: löscht alle Pixel und flusht einmal
    let mut board = Board::new(writer, STATUS_BOARD_BRIGHTNESS)
        .expect("Failed to clear status board");
    board.reseed(seed);

    info!(
        "Status board: {} pixels on GPIO{}, brightness {}",
        PIXEL_COUNT, STATUS_BOARD_GPIO_PIN, STATUS_BOARD_BRIGHTNESS
    );

    status_board_logic(board, command_receiver).await
}

/// Lampentest beim Start
///
/// Zeigt jede Farbe der Farbtabelle (außer Schwarz) auf allen Pixeln
/// und schaltet danach alles aus.
pub async fn lamp_test(command_sender: BoardCommandSender) {
    info!("Lamp test: start");

    for color in NamedColor::ALL {
        if color == NamedColor::Black {
            continue;
        }
        command_sender.send(BoardCommand::ColorAll(color)).await;
        Timer::after(Duration::from_millis(LAMP_TEST_STEP_MS)).await;
    }

    command_sender.send(BoardCommand::ClearAll).await;
    info!("Lamp test: done");
}
