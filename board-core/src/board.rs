//! Status Board Pixel-Treiber
//!
//! Hält den Pixel-Buffer, die Helligkeit und den Zufallsgenerator und
//! schreibt nach jeder Änderung den kompletten Buffer auf den Strip.

use fastrand::Rng;
use rgb::RGB8;

use crate::logic::random_color;
use crate::traits::{BoardError, PixelWriter};
use crate::types::{BoardCommand, NamedColor};

/// Seed für den Zufallsgenerator bis `reseed()` aufgerufen wird
const DEFAULT_SEED: u64 = 0x5747_4155_5342_4F41;

/// Status Board mit `N` adressierbaren RGB Pixeln
///
/// Jede öffentliche Operation aktualisiert den Buffer und flusht ihn sofort
/// (ein `PixelWriter::write` pro Aufruf, kein Batching).
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `W: PixelWriter` ermöglicht:
/// - Real Hardware (RmtPixelWriter) im Production-Code
/// - Mock Implementation (MockPixelWriter) in Tests
pub struct StatusBoard<W: PixelWriter, const N: usize> {
    writer: W,
    pixels: [RGB8; N],
    brightness: u8,
    rng: Rng,
}

impl<W: PixelWriter, const N: usize> StatusBoard<W, N> {
    /// Erstellt das Board und schaltet alle Pixel aus
    ///
    /// Der Writer hat den Ausgangs-Pin bereits belegt. Schlägt der
    /// initiale Flush fehl, wird der Fehler zurückgegeben.
    pub fn new(writer: W, brightness: u8) -> Result<Self, BoardError> {
        let mut board = Self {
            writer,
            pixels: [RGB8::default(); N],
            brightness,
            rng: Rng::with_seed(DEFAULT_SEED),
        };
        board.clear_all()?;
        Ok(board)
    }

    /// Anzahl der Pixel auf dem Board
    pub const fn pixel_count(&self) -> usize {
        N
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Setzt die Helligkeit für alle folgenden Schreibvorgänge
    ///
    /// Bereits geschriebene Pixel bleiben unverändert.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Setzt den Zufallsgenerator neu (z.B. mit Hardware-RNG)
    pub fn reseed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    /// Aktueller Buffer-Inhalt
    pub fn pixels(&self) -> &[RGB8; N] {
        &self.pixels
    }

    /// Setzt einen Pixel auf eine Farbe aus der Farbtabelle
    ///
    /// Der Name wird ohne Beachtung der Groß-/Kleinschreibung gesucht.
    /// Unbekannte Namen liefern `BoardError::UnknownColor`, der Buffer
    /// bleibt dann unverändert.
    pub fn set_pixel_color(&mut self, index: usize, name: &str) -> Result<(), BoardError> {
        let color = NamedColor::try_from(name)?;
        self.set_pixel_named(index, color)
    }

    pub fn set_pixel_named(&mut self, index: usize, color: NamedColor) -> Result<(), BoardError> {
        let scaled = color.scaled(self.brightness);
        self.store(index, scaled)?;
        self.flush()
    }

    /// Schaltet alle Pixel aus (Helligkeit wird nicht berücksichtigt)
    pub fn clear_all(&mut self) -> Result<(), BoardError> {
        self.pixels = [RGB8::default(); N];
        self.flush()
    }

    /// Setzt alle Pixel auf eine Farbe aus der Farbtabelle, ein Flush am Ende
    pub fn color_all(&mut self, name: &str) -> Result<(), BoardError> {
        let color = NamedColor::try_from(name)?;
        self.color_all_named(color)
    }

    pub fn color_all_named(&mut self, color: NamedColor) -> Result<(), BoardError> {
        self.pixels = [color.scaled(self.brightness); N];
        self.flush()
    }

    /// Setzt einen Pixel auf eine Zufallsfarbe (ohne Helligkeit)
    pub fn set_pixel_random_color(&mut self, index: usize) -> Result<(), BoardError> {
        Self::check_index(index)?;
        let color = random_color(&mut self.rng);
        self.set_pixel_raw_color(index, color)
    }

    /// Zuletzt geschriebenes Triplet eines Pixels (ohne Hardware-Abfrage)
    pub fn pixel_raw_color(&self, index: usize) -> Result<RGB8, BoardError> {
        Self::check_index(index)?;
        Ok(self.pixels[index])
    }

    /// Setzt einen Pixel auf ein rohes Triplet (ohne Farbtabelle und Helligkeit)
    pub fn set_pixel_raw_color(&mut self, index: usize, color: RGB8) -> Result<(), BoardError> {
        self.store(index, color)?;
        self.flush()
    }

    /// Führt ein Board Command aus
    pub fn apply(&mut self, command: BoardCommand) -> Result<(), BoardError> {
        match command {
            BoardCommand::SetPixel { index, color } => self.set_pixel_named(index, color),
            BoardCommand::SetRaw { index, color } => self.set_pixel_raw_color(index, color),
            BoardCommand::SetRandom { index } => self.set_pixel_random_color(index),
            BoardCommand::ColorAll(color) => self.color_all_named(color),
            BoardCommand::ClearAll => self.clear_all(),
            BoardCommand::SetBrightness(level) => {
                self.set_brightness(level);
                Ok(())
            }
        }
    }

    fn check_index(index: usize) -> Result<(), BoardError> {
        if index < N {
            Ok(())
        } else {
            Err(BoardError::IndexOutOfRange { index, count: N })
        }
    }

    fn store(&mut self, index: usize, color: RGB8) -> Result<(), BoardError> {
        Self::check_index(index)?;
        self.pixels[index] = color;
        Ok(())
    }

    // Buffer bleibt bei Fehler beschrieben, kein Retry
    fn flush(&mut self) -> Result<(), BoardError> {
        self.writer.write(&self.pixels)?;
        Ok(())
    }
}
