use thiserror::Error;

/// Результат для операций iqwav
pub type IqWavResult<T> = std::result::Result<T, IqWavError>;

/// Типы ошибок разбора захвата и сборки WAV.
///
/// Несовпадение CRC заголовка ошибкой не является: оно отражается флагом
/// [`crate::CaptureHeader::crc_valid`].
#[derive(Debug, Error)]
pub enum IqWavError {
    /// Входной буфер короче фиксированного заголовка
    #[error("Truncated header: need {expected} bytes, found {found}")]
    TruncatedHeader { expected: usize, found: usize },

    /// Размер WAV не помещается в 32-битные поля RIFF
    #[error("Container overflow: payload of {0} bytes exceeds RIFF size fields")]
    ContainerOverflow(usize),

    /// Ошибка формирования отчёта
    #[error("Report error: {0}")]
    Report(String),
}

impl IqWavError {
    /// Удобные конструкторы
    pub fn truncated(found: usize, expected: usize) -> Self {
        Self::TruncatedHeader { expected, found }
    }

    pub fn report<S: Into<String>>(s: S) -> Self {
        Self::Report(s.into())
    }
}
