use chrono::{DateTime, Utc};
use serde::Serialize;

/// Формат вывода метки времени в текстовом отчёте.
pub const REPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f UTC";

/// Заголовок IQ захвата (фиксированный размер 32 байта)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureHeader {
    /// Частота дискретизации в Гц
    pub sample_rate: u32,
    /// Несущая частота в Гц
    pub center_freq: u64,
    /// Время начала записи (мс от Unix epoch, как в файле)
    #[serde(rename = "timestamp_ms")]
    pub raw_timestamp: u64,
    /// Заявленный размер группы выборок (не сверяется с данными)
    pub sample_size: u32,
    /// Зарезервировано, не интерпретируется
    #[serde(skip)]
    pub reserved: u32,
    /// CRC32 из файла, покрывает байты [0..28)
    #[serde(rename = "crc")]
    pub stored_crc: u32,
    /// `raw_timestamp` в календарном виде (`None`, если вне диапазона chrono)
    pub timestamp: Option<DateTime<Utc>>,
    /// Совпадает ли вычисленный CRC с `stored_crc`
    pub crc_valid: bool,
}

impl CaptureHeader {
    /// Создаёт заголовок без CRC. Контрольную сумму проставляет
    /// `CaptureHeaderExt::seal` из `iqwav-core`.
    pub fn new(
        sample_rate: u32,
        center_freq: u64,
        raw_timestamp: u64,
        sample_size: u32,
    ) -> Self {
        CaptureHeader {
            sample_rate,
            center_freq,
            raw_timestamp,
            sample_size,
            reserved: 0,
            stored_crc: 0,
            timestamp: timestamp_from_millis(raw_timestamp),
            crc_valid: false,
        }
    }
}

/// Переводит миллисекунды от Unix epoch (UTC) в календарное время.
pub fn timestamp_from_millis(millis: u64) -> Option<DateTime<Utc>> {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

impl std::fmt::Display for CaptureHeader {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        writeln!(f, "SampleRate: {}", self.sample_rate)?;
        writeln!(f, "CenterFreq: {}", self.center_freq)?;
        match self.timestamp {
            Some(ts) => writeln!(f, "Timestamp: {}", ts.format(REPORT_TIME_FORMAT))?,
            None => writeln!(f, "Timestamp: invalid ({} ms)", self.raw_timestamp)?,
        }
        writeln!(f, "SampleSize: {}", self.sample_size)?;
        write!(f, "CRC: {}", self.crc_valid)
    }
}
