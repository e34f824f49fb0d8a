//! Библиотека преобразования IQ захватов
//!
//! Разбирает 32-байтовый заголовок захвата SDR с проверкой CRC32 и
//! перекодирует 32-битные группы выборок в 16-битный PCM WAV.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use iqwav_core::{convert, ReportFormat};
//!
//! let input = std::fs::read("capture.iq")?;
//! let out = convert(&input, ReportFormat::Text)?;
//!
//! std::fs::write("raw-info.txt", &out.report)?;
//! std::fs::write("raw-iq.wav", &out.container)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binary;
pub mod convert;
pub mod format;
pub mod stream;
pub mod wav;

pub use binary::*;
pub use convert::*;
pub use format::*;
pub use stream::*;
pub use wav::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
