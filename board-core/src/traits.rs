//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstelle zum LED-Strip
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für Schreiboperationen auf den Strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Peripheral oder Pin konnte nicht belegt werden
    InitFailed,
    /// Frame wurde vom Peripheral nicht übernommen
    WriteFailed,
}

impl core::fmt::Display for LedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedError::InitFailed => f.write_str("pixel strip init failed"),
            LedError::WriteFailed => f.write_str("pixel strip write failed"),
        }
    }
}

/// Trait für den Zugriff auf einen adressierbaren Pixel-Strip
///
/// Abstrahiert WS2812/Neopixel Strips. Ein Aufruf überträgt den kompletten
/// Pixel-Buffer und blockiert, bis die Hardware fertig ist ("Flush").
///
/// # Implementierungen
/// - **Production:** RmtPixelWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockPixelWriter (in-memory Mock)
pub trait PixelWriter: Send {
    /// Schreibt alle Pixel in Index-Reihenfolge auf den Strip
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError>;
}

/// Fehler-Typ für Operationen auf dem Status Board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// Farbname ist nicht in der Farbtabelle
    UnknownColor,
    /// Pixel-Index liegt außerhalb von `0..count`
    IndexOutOfRange { index: usize, count: usize },
    /// Flush auf den Strip fehlgeschlagen
    Write(LedError),
}

impl From<LedError> for BoardError {
    fn from(err: LedError) -> Self {
        BoardError::Write(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::UnknownColor => f.write_str("unknown color name"),
            BoardError::IndexOutOfRange { index, count } => {
                write!(f, "pixel index {} out of range (count {})", index, count)
            }
            BoardError::Write(err) => write!(f, "{}", err),
        }
    }
}
