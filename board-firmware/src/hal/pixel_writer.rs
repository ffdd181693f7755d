// RMT Pixel Writer
//
// Implementiert den PixelWriter-Trait aus status-board-core für
// WS2812/Neopixel Strips am ESP32-C6 RMT Peripheral.

use esp_hal::Blocking;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::RMT_BUFFER_SIZE;
use crate::{LedError, PixelWriter};

/// Real Hardware Pixel Writer
///
/// Nutzt ESP32 RMT Peripheral um WS2812 LEDs anzusteuern.
///
/// Hinweis: Der Buffer muss länger leben als der Writer, daher wird er im
/// Task erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtPixelWriter<'a> {
    led: SmartLedsAdapter<'a, RMT_BUFFER_SIZE>,
}

impl<'a> RmtPixelWriter<'a> {
    /// Erstellt einen neuen RmtPixelWriter und belegt den Daten-Pin
    ///
    /// # Parameter
    /// - `pin`: GPIO für die Datenleitung des Strips
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für Pulse-Daten (erstellt mit smart_led_buffer! Macro)
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::InitFailed` zurück wenn das RMT nicht konfiguriert werden kann
    pub fn new(
        pin: impl PeripheralOutput<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [PulseCode; RMT_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::InitFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, pin, buffer);

        Ok(Self { led })
    }
}

impl PixelWriter for RmtPixelWriter<'_> {
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        self.led
            .write(pixels.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
