// Hardware Abstraction Layer (HAL) Module
//
// Konkrete Implementierung des PixelWriter-Traits für das ESP32-C6.

pub mod pixel_writer;

pub use pixel_writer::RmtPixelWriter;
