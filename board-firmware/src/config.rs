// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// Status Board Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung des Strips (WS2812/Neopixel)
/// Muss zum Peripheral passen, das in main.rs an den Task übergeben wird
pub const STATUS_BOARD_GPIO_PIN: u8 = 8;

/// Anzahl der Pixel auf dem Board
pub const PIXEL_COUNT: usize = 4;

/// Default-Helligkeit (0-255)
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Helligkeit beim Start
/// Kann zur Build-Zeit über STATUS_BOARD_BRIGHTNESS (z.B. in .env) gesetzt werden
pub const STATUS_BOARD_BRIGHTNESS: u8 = match option_env!("STATUS_BOARD_BRIGHTNESS") {
    Some(value) => parse_u8(value, DEFAULT_BRIGHTNESS),
    None => DEFAULT_BRIGHTNESS,
};

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// RMT Buffer-Größe (3 Farben * 8 Bits pro Pixel + 1 Reset)
pub const RMT_BUFFER_SIZE: usize = PIXEL_COUNT * 24 + 1;

// ============================================================================
// Task Konfiguration
// ============================================================================

/// Kapazität des Command-Channels zum Status-Board-Task
pub const COMMAND_CHANNEL_DEPTH: usize = 4;

/// Anzeigedauer pro Farbe beim Lampentest in Millisekunden
pub const LAMP_TEST_STEP_MS: u64 = 500;

/// Parst eine Dezimalzahl zur Compile-Zeit, fällt bei ungültigen Werten auf `default` zurück
const fn parse_u8(value: &str, default: u8) -> u8 {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        return default;
    }
    let mut result: u16 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if digit < b'0' || digit > b'9' {
            return default;
        }
        result = result * 10 + (digit - b'0') as u16;
        if result > u8::MAX as u16 {
            return default;
        }
        i += 1;
    }
    result as u8
}
