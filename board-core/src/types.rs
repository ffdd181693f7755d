//! Core Types für das Status Board
//!
//! Farbtabelle und Kommandos ohne Hardware-Dependencies

use rgb::RGB8;

use crate::traits::BoardError;

/// Benannte Farben der Farbtabelle
///
/// Jede Farbe ist eine Kombination aus {aus, an} pro Kanal. Die Einheits-Werte
/// (0 oder 1) werden beim Schreiben mit der Helligkeit multipliziert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NamedColor {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl NamedColor {
    /// Alle Einträge der Farbtabelle in Tabellen-Reihenfolge
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Cyan,
        NamedColor::Red,
        NamedColor::Magenta,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Einheits-Triplet (0 oder 1 pro Kanal)
    pub const fn unit(self) -> RGB8 {
        let (r, g, b) = match self {
            NamedColor::Black => (0, 0, 0),
            NamedColor::Blue => (0, 0, 1),
            NamedColor::Green => (0, 1, 0),
            NamedColor::Cyan => (0, 1, 1),
            NamedColor::Red => (1, 0, 0),
            NamedColor::Magenta => (1, 0, 1),
            NamedColor::Yellow => (1, 1, 0),
            NamedColor::White => (1, 1, 1),
        };
        RGB8 { r, g, b }
    }

    /// Farbe mit Helligkeit skaliert (`unit * brightness` pro Kanal)
    pub const fn scaled(self, brightness: u8) -> RGB8 {
        let unit = self.unit();
        RGB8 {
            r: unit.r * brightness,
            g: unit.g * brightness,
            b: unit.b * brightness,
        }
    }

    /// Kleingeschriebener Name der Farbe
    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Cyan => "cyan",
            NamedColor::Red => "red",
            NamedColor::Magenta => "magenta",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// Sucht eine Farbe über ihren Namen, Groß-/Kleinschreibung egal
    ///
    /// `"nocolor"` ist ein Alias für Schwarz.
    ///
    /// ```
    /// # use status_board_core::NamedColor;
    /// assert_eq!(NamedColor::from_name("RED"), Some(NamedColor::Red));
    /// assert_eq!(NamedColor::from_name("NoColor"), Some(NamedColor::Black));
    /// assert_eq!(NamedColor::from_name("purple"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("nocolor") {
            return Some(NamedColor::Black);
        }
        Self::ALL
            .into_iter()
            .find(|color| name.eq_ignore_ascii_case(color.name()))
    }
}

impl core::convert::TryFrom<&str> for NamedColor {
    type Error = BoardError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::from_name(name).ok_or(BoardError::UnknownColor)
    }
}

impl core::str::FromStr for NamedColor {
    type Err = BoardError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::try_from(name)
    }
}

impl core::fmt::Display for NamedColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// Deserialisierung nutzt dieselbe Suche wie `from_name` (case-insensitive, Alias)
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NamedColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NamedColorVisitor;

        impl serde::de::Visitor<'_> for NamedColorVisitor {
            type Value = NamedColor;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a color name from the color table")
            }

            fn visit_str<E: serde::de::Error>(self, name: &str) -> Result<NamedColor, E> {
                NamedColor::from_name(name)
                    .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Str(name), &self))
            }
        }

        deserializer.deserialize_str(NamedColorVisitor)
    }
}

/// Board Command für die Steuerung über einen Channel
///
/// Wird von anderen Tasks an den Status-Board-Task gesendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoardCommand {
    /// Setze einen Pixel auf eine benannte Farbe (mit Helligkeit)
    SetPixel { index: usize, color: NamedColor },
    /// Setze einen Pixel auf ein rohes Triplet (ohne Helligkeit)
    SetRaw { index: usize, color: RGB8 },
    /// Setze einen Pixel auf eine Zufallsfarbe
    SetRandom { index: usize },
    /// Setze alle Pixel auf eine benannte Farbe
    ColorAll(NamedColor),
    /// Schalte alle Pixel aus
    ClearAll,
    /// Ändere die Helligkeit für folgende Schreibvorgänge
    SetBrightness(u8),
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for BoardCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BoardCommand::SetPixel { index, color } => {
                defmt::write!(fmt, "SetPixel {{ index: {}, color: {} }}", index, color)
            }
            BoardCommand::SetRaw { index, color } => {
                defmt::write!(
                    fmt,
                    "SetRaw {{ index: {}, rgb: ({}, {}, {}) }}",
                    index,
                    color.r,
                    color.g,
                    color.b
                )
            }
            BoardCommand::SetRandom { index } => {
                defmt::write!(fmt, "SetRandom {{ index: {} }}", index)
            }
            BoardCommand::ColorAll(color) => defmt::write!(fmt, "ColorAll({})", color),
            BoardCommand::ClearAll => defmt::write!(fmt, "ClearAll"),
            BoardCommand::SetBrightness(level) => defmt::write!(fmt, "SetBrightness({})", level),
        }
    }
}
