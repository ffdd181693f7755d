//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use fastrand::Rng;
use rgb::RGB8;

/// Erzeugt eine Pseudo-Zufallsfarbe
///
/// Jeder Kanal ist ein unabhängiger, gleichverteilter Wert aus `0..=255`.
/// Die Farbe wird ohne Helligkeits-Skalierung geschrieben.
///
/// # Beispiele
///
/// ```
/// # use status_board_core::random_color;
/// let mut rng = fastrand::Rng::with_seed(7);
/// let a = random_color(&mut rng);
/// let b = random_color(&mut fastrand::Rng::with_seed(7));
/// assert_eq!(a, b); // gleicher Seed → gleiche Farbe
/// ```
pub fn random_color(rng: &mut Rng) -> RGB8 {
    RGB8 {
        r: rng.u8(..),
        g: rng.u8(..),
        b: rng.u8(..),
    }
}
