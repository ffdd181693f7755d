// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von status-board-core
pub use status_board_core::{
    BoardCommand, BoardError, LedError, NamedColor, PixelWriter, StatusBoard,
};

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::{COMMAND_CHANNEL_DEPTH, PIXEL_COUNT};
use crate::hal::RmtPixelWriter;

// ============================================================================
// Type-Aliase
// ============================================================================
//
// Statt:  Sender<'static, NoopRawMutex, BoardCommand, COMMAND_CHANNEL_DEPTH>
// Nutze:  BoardCommandSender

/// Status Board an der echten Hardware
pub type Board<'a> = StatusBoard<RmtPixelWriter<'a>, PIXEL_COUNT>;

/// Channel für Board-Kommandos (beliebiger Task → Status-Board-Task)
pub type BoardCommandChannel = Channel<NoopRawMutex, BoardCommand, COMMAND_CHANNEL_DEPTH>;

/// Sender für Board-Kommandos
/// Erzeugt aus BoardCommandChannel
pub type BoardCommandSender = Sender<'static, NoopRawMutex, BoardCommand, COMMAND_CHANNEL_DEPTH>;

/// Receiver für Board-Kommandos (Status-Board-Task empfängt)
pub type BoardCommandReceiver =
    Receiver<'static, NoopRawMutex, BoardCommand, COMMAND_CHANNEL_DEPTH>;
