// Task-Modul: Enthält alle Embassy Tasks
//
// Der Status-Board-Task besitzt den Pixel-Treiber exklusiv.
// Andere Tasks schicken Kommandos über einen Embassy Channel.

pub mod status_board;

// Re-export Tasks für einfachen Import
pub use status_board::{lamp_test, status_board_logic, status_board_task};
