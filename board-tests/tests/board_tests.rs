//! Integration Tests für den Status Board Treiber
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockPixelWriter

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rgb::RGB8;
use status_board_core::{
    BoardCommand, BoardError, LedError, NamedColor, PixelWriter, StatusBoard,
};

const PIXELS: usize = 4;

// ============================================================================
// Mock Pixel Writer
// ============================================================================

#[derive(Default)]
pub struct MockPixelWriter {
    /// Zuletzt geflushter Buffer (für Assertions in Tests)
    pub last_frame: Option<Vec<RGB8>>,
    /// Anzahl der erfolgreichen write() Aufrufe
    pub write_count: usize,
    /// Simuliere Fehler beim nächsten write()
    pub fail_next_write: bool,
}

impl MockPixelWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PixelWriter for MockPixelWriter {
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_frame = Some(pixels.to_vec());
        self.write_count += 1;
        Ok(())
    }
}

/// Leiht den Mock aus, damit er nach dem Drop des Boards geprüft werden kann
struct SharedWriter<'a>(&'a mut MockPixelWriter);

impl PixelWriter for SharedWriter<'_> {
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        self.0.write(pixels)
    }
}

/// Writer dessen Fehlerverhalten von außen umgeschaltet wird
struct FlakyWriter {
    fail: Arc<AtomicBool>,
    inner: MockPixelWriter,
}

impl PixelWriter for FlakyWriter {
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        self.inner.fail_next_write = self.fail.swap(false, Ordering::Relaxed);
        self.inner.write(pixels)
    }
}

fn new_board(brightness: u8) -> StatusBoard<MockPixelWriter, PIXELS> {
    StatusBoard::new(MockPixelWriter::new(), brightness).unwrap()
}

const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

// ============================================================================
// Tests: Initialisierung
// ============================================================================

#[test]
fn test_new_board_is_cleared_and_flushed() {
    let mut mock = MockPixelWriter::new();
    {
        let board = StatusBoard::<_, PIXELS>::new(SharedWriter(&mut mock), 255).unwrap();
        assert_eq!(board.pixel_count(), PIXELS);
        assert_eq!(board.brightness(), 255);
    }
    assert_eq!(mock.write_count, 1);
    assert_eq!(mock.last_frame, Some(vec![OFF; PIXELS]));
}

#[test]
fn test_new_board_write_failure() {
    let mut mock = MockPixelWriter::new();
    mock.fail_next_write = true;
    let result = StatusBoard::<_, PIXELS>::new(SharedWriter(&mut mock), 255);
    assert!(matches!(result, Err(BoardError::Write(LedError::WriteFailed))));
    assert_eq!(mock.write_count, 0);
}

// ============================================================================
// Tests: set_pixel_color()
// ============================================================================

#[test]
fn test_set_pixel_color_all_indices_and_colors() {
    for brightness in [255u8, 128, 65, 25, 1] {
        let mut board = new_board(brightness);
        for index in 0..PIXELS {
            for color in NamedColor::ALL {
                board.set_pixel_color(index, color.name()).unwrap();
                let unit = color.unit();
                let expected = RGB8 {
                    r: unit.r * brightness,
                    g: unit.g * brightness,
                    b: unit.b * brightness,
                };
                assert_eq!(board.pixel_raw_color(index).unwrap(), expected);
            }
        }
    }
}

#[test]
fn test_set_pixel_color_flushes_whole_buffer_once() {
    let mut mock = MockPixelWriter::new();
    {
        let mut board = StatusBoard::<_, PIXELS>::new(SharedWriter(&mut mock), 200).unwrap();
        board.set_pixel_color(2, "green").unwrap();
    }
    assert_eq!(mock.write_count, 2);
    assert_eq!(
        mock.last_frame,
        Some(vec![OFF, OFF, RGB8 { r: 0, g: 200, b: 0 }, OFF])
    );
}

#[test]
fn test_set_pixel_color_is_case_insensitive() {
    let mut upper = new_board(100);
    let mut lower = new_board(100);
    upper.set_pixel_color(0, "RED").unwrap();
    lower.set_pixel_color(0, "red").unwrap();
    assert_eq!(upper.pixels(), lower.pixels());
    assert_eq!(upper.pixel_raw_color(0).unwrap(), RGB8 { r: 100, g: 0, b: 0 });
}

#[test]
fn test_set_pixel_color_unknown_name() {
    let mut board = new_board(255);
    board.set_pixel_color(1, "blue").unwrap();
    let before = *board.pixels();

    let result = board.set_pixel_color(1, "purple");
    assert_eq!(result, Err(BoardError::UnknownColor));
    assert_eq!(board.pixels(), &before);
}

#[test]
fn test_unknown_name_does_not_flush() {
    let mut mock = MockPixelWriter::new();
    {
        let mut board = StatusBoard::<_, PIXELS>::new(SharedWriter(&mut mock), 255).unwrap();
        assert!(board.set_pixel_color(0, "purple").is_err());
        assert!(board.color_all("orange").is_err());
    }
    assert_eq!(mock.write_count, 1);
}

#[test]
fn test_nocolor_alias() {
    let mut board = new_board(255);
    board.set_pixel_color(3, "white").unwrap();
    board.set_pixel_color(3, "nocolor").unwrap();
    assert_eq!(board.pixel_raw_color(3).unwrap(), OFF);
}

#[test]
fn test_set_pixel_color_out_of_range() {
    let mut board = new_board(255);
    let result = board.set_pixel_color(PIXELS, "red");
    assert_eq!(
        result,
        Err(BoardError::IndexOutOfRange {
            index: PIXELS,
            count: PIXELS
        })
    );
    assert_eq!(board.pixels(), &[OFF; PIXELS]);
}

// ============================================================================
// Tests: Helligkeit
// ============================================================================

#[test]
fn test_brightness_only_affects_later_writes() {
    let mut board = new_board(255);
    board.set_pixel_color(0, "cyan").unwrap();

    board.set_brightness(16);
    assert_eq!(board.pixel_raw_color(0).unwrap(), RGB8 { r: 0, g: 255, b: 255 });

    board.set_pixel_color(1, "cyan").unwrap();
    assert_eq!(board.pixel_raw_color(0).unwrap(), RGB8 { r: 0, g: 255, b: 255 });
    assert_eq!(board.pixel_raw_color(1).unwrap(), RGB8 { r: 0, g: 16, b: 16 });
}

#[test]
fn test_zero_brightness_writes_black() {
    let mut board = new_board(0);
    board.color_all("white").unwrap();
    assert_eq!(board.pixels(), &[OFF; PIXELS]);
}

// ============================================================================
// Tests: clear_all() / color_all()
// ============================================================================

#[test]
fn test_clear_all_ignores_brightness_and_color() {
    let mut board = new_board(255);
    board.color_all("yellow").unwrap();
    board.set_pixel_raw_color(2, RGB8 { r: 9, g: 8, b: 7 }).unwrap();
    board.set_brightness(42);

    board.clear_all().unwrap();
    for index in 0..PIXELS {
        assert_eq!(board.pixel_raw_color(index).unwrap(), OFF);
    }
}

#[test]
fn test_color_all_same_on_every_pixel() {
    let mut mock = MockPixelWriter::new();
    {
        let mut board = StatusBoard::<_, PIXELS>::new(SharedWriter(&mut mock), 128).unwrap();
        board.color_all("Magenta").unwrap();
        let expected = RGB8 { r: 128, g: 0, b: 128 };
        assert_eq!(board.pixels(), &[expected; PIXELS]);
    }
    // Initialisierung + genau ein Flush für alle Pixel
    assert_eq!(mock.write_count, 2);
}

// ============================================================================
// Tests: Zufalls- und Rohfarben
// ============================================================================

#[test]
fn test_random_color_never_fails() {
    let mut board = new_board(10);
    board.reseed(0xDEAD_BEEF);
    for _ in 0..256 {
        for index in 0..PIXELS {
            board.set_pixel_random_color(index).unwrap();
        }
    }
}

#[test]
fn test_random_color_ignores_brightness() {
    let mut board = new_board(1);
    board.reseed(3);
    let saw_bright = (0..64).any(|_| {
        board.set_pixel_random_color(0).unwrap();
        let c = board.pixel_raw_color(0).unwrap();
        c.r > 1 || c.g > 1 || c.b > 1
    });
    assert!(saw_bright);
}

#[test]
fn test_random_color_out_of_range() {
    let mut board = new_board(255);
    assert!(matches!(
        board.set_pixel_random_color(7),
        Err(BoardError::IndexOutOfRange { index: 7, .. })
    ));
}

#[test]
fn test_raw_color_round_trip_bypasses_brightness() {
    let mut board = new_board(5);
    let color = RGB8 { r: 17, g: 200, b: 255 };
    board.set_pixel_raw_color(1, color).unwrap();
    assert_eq!(board.pixel_raw_color(1).unwrap(), color);
}

#[test]
fn test_write_failure_is_propagated() {
    let fail = Arc::new(AtomicBool::new(false));
    let writer = FlakyWriter {
        fail: fail.clone(),
        inner: MockPixelWriter::new(),
    };
    let mut board = StatusBoard::<_, PIXELS>::new(writer, 255).unwrap();

    fail.store(true, Ordering::Relaxed);
    let result = board.set_pixel_color(0, "blue");
    assert_eq!(result, Err(BoardError::Write(LedError::WriteFailed)));
    // Buffer wurde vor dem Flush beschrieben
    assert_eq!(board.pixel_raw_color(0).unwrap(), RGB8 { r: 0, g: 0, b: 255 });

    // Kein Retry: der nächste Aufruf flusht erneut
    board.clear_all().unwrap();
    assert_eq!(board.pixels(), &[OFF; PIXELS]);
}

// ============================================================================
// Tests: BoardCommand
// ============================================================================

#[test]
fn test_apply_commands() {
    let mut board = new_board(255);

    board.apply(BoardCommand::SetBrightness(10)).unwrap();
    board
        .apply(BoardCommand::SetPixel {
            index: 0,
            color: NamedColor::Red,
        })
        .unwrap();
    board
        .apply(BoardCommand::SetRaw {
            index: 1,
            color: RGB8 { r: 1, g: 2, b: 3 },
        })
        .unwrap();
    board.apply(BoardCommand::SetRandom { index: 2 }).unwrap();

    assert_eq!(board.pixel_raw_color(0).unwrap(), RGB8 { r: 10, g: 0, b: 0 });
    assert_eq!(board.pixel_raw_color(1).unwrap(), RGB8 { r: 1, g: 2, b: 3 });

    board.apply(BoardCommand::ColorAll(NamedColor::Green)).unwrap();
    assert_eq!(board.pixels(), &[RGB8 { r: 0, g: 10, b: 0 }; PIXELS]);

    board.apply(BoardCommand::ClearAll).unwrap();
    assert_eq!(board.pixels(), &[OFF; PIXELS]);
}

#[test]
fn test_apply_command_out_of_range() {
    let mut board = new_board(255);
    let result = board.apply(BoardCommand::SetRaw {
        index: 12,
        color: RGB8 { r: 1, g: 1, b: 1 },
    });
    assert_eq!(
        result,
        Err(BoardError::IndexOutOfRange {
            index: 12,
            count: PIXELS
        })
    );
}

// ============================================================================
// Tests: serde (serde-json-core)
// ============================================================================

#[test]
fn test_named_color_json() {
    let mut buffer = [0u8; 16];
    let n = serde_json_core::to_slice(&NamedColor::Cyan, &mut buffer).unwrap();
    assert_eq!(&buffer[..n], b"\"cyan\"");

    let (color, _) = serde_json_core::from_str::<NamedColor>("\"yellow\"").unwrap();
    assert_eq!(color, NamedColor::Yellow);
}

#[test]
fn test_board_command_json_unit_variant() {
    let (cmd, _) = serde_json_core::from_str::<BoardCommand>("\"clear_all\"").unwrap();
    assert_eq!(cmd, BoardCommand::ClearAll);
}

#[test]
fn test_named_color_json_ignores_case_and_accepts_alias() {
    let (color, _) = serde_json_core::from_str::<NamedColor>("\"RED\"").unwrap();
    assert_eq!(color, NamedColor::Red);

    let (color, _) = serde_json_core::from_str::<NamedColor>("\"nocolor\"").unwrap();
    assert_eq!(color, NamedColor::Black);

    assert!(serde_json_core::from_str::<NamedColor>("\"purple\"").is_err());
}

#[test]
fn test_board_command_json_matches_set_pixel_color() {
    let (cmd, _) = serde_json_core::from_str::<BoardCommand>(r#"{"color_all":"Red"}"#).unwrap();
    assert_eq!(cmd, BoardCommand::ColorAll(NamedColor::Red));

    let (cmd, _) =
        serde_json_core::from_str::<BoardCommand>(r#"{"set_pixel":{"index":1,"color":"NoColor"}}"#)
            .unwrap();
    assert_eq!(
        cmd,
        BoardCommand::SetPixel {
            index: 1,
            color: NamedColor::Black
        }
    );

    // Gleiches Ergebnis wie über den Namen
    let mut via_command = new_board(40);
    let mut via_name = new_board(40);
    via_command
        .apply(BoardCommand::ColorAll(NamedColor::Red))
        .unwrap();
    via_name.color_all("Red").unwrap();
    assert_eq!(via_command.pixels(), via_name.pixels());
}

// ============================================================================
// Tests: Fehler-Formatierung
// ============================================================================

#[test]
fn test_board_error_display() {
    assert_eq!(BoardError::UnknownColor.to_string(), "unknown color name");
    assert_eq!(
        BoardError::IndexOutOfRange { index: 5, count: 4 }.to_string(),
        "pixel index 5 out of range (count 4)"
    );
    assert_eq!(
        BoardError::from(LedError::WriteFailed).to_string(),
        "pixel strip write failed"
    );
}
