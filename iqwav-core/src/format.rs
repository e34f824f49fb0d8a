//! Формат IQ захвата
//!
//! Файл начинается с фиксированного 32-байтового заголовка, за которым идут
//! 4-байтовые группы выборок. Все многобайтовые числа хранятся в порядке
//! little-endian.
//!
//! ```text
//! [0..4)   SAMPLE_RATE   u32
//! [4..12)  CENTER_FREQ   u64
//! [12..20) TIMESTAMP_MS  u64
//! [20..24) SAMPLE_SIZE   u32
//! [24..28) RESERVED      u32
//! [28..32) CRC32         u32  — IEEE, покрывает [0..28)
//! [32..)   SAMPLES       4-байтовые группы i32
//! ```

use crc32fast::Hasher;
use iqwav_types::{timestamp_from_millis, CaptureHeader, IqWavError, IqWavResult};
use log::{info, warn};

use crate::binary::{read_u32_le, read_u64_le, write_u32_le, write_u64_le};

/// Размер фиксированного заголовка (32 байта)
pub const CAPTURE_HEADER_SIZE: usize = 32;

/// Смещение CRC32; контрольная сумма покрывает `[0..CAPTURE_CRC_OFFSET)`
pub const CAPTURE_CRC_OFFSET: usize = 28;

/// Формат отчёта о заголовке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Построчный текст `Поле: значение`
    #[default]
    Text,
    /// JSON с отступами
    Json,
}

/// Операции над [`CaptureHeader`], зависящие от бинарного формата.
pub trait CaptureHeaderExt: Sized {
    /// Разбирает заголовок из начала буфера.
    ///
    /// Несовпадение CRC не прерывает разбор: результат помечается
    /// `crc_valid = false`.
    fn decode(buf: &[u8]) -> IqWavResult<Self>;

    /// Сериализует заголовок в 32 байта, включая `reserved` и `stored_crc`
    /// как есть.
    fn encode(&self) -> [u8; CAPTURE_HEADER_SIZE];

    /// Пересчитывает `stored_crc` по текущим полям.
    fn seal(&mut self);

    /// Формирует человекочитаемый отчёт.
    fn report(
        &self,
        format: ReportFormat,
    ) -> IqWavResult<String>;
}

impl CaptureHeaderExt for CaptureHeader {
    fn decode(buf: &[u8]) -> IqWavResult<Self> {
        let hdr: &[u8; CAPTURE_HEADER_SIZE] = buf
            .get(..CAPTURE_HEADER_SIZE)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| IqWavError::truncated(buf.len(), CAPTURE_HEADER_SIZE))?;

        let mut off = 0;

        let sample_rate = read_u32_le(hdr, &mut off);
        let center_freq = read_u64_le(hdr, &mut off);
        let raw_timestamp = read_u64_le(hdr, &mut off);
        let sample_size = read_u32_le(hdr, &mut off);
        let reserved = read_u32_le(hdr, &mut off);
        let stored_crc = read_u32_le(hdr, &mut off);

        let calculated_crc = crc32_checksum(&hdr[..CAPTURE_CRC_OFFSET]);
        let crc_valid = stored_crc == calculated_crc;

        if !crc_valid {
            info!("CRC mismatch: expected {calculated_crc:08x}, found {stored_crc:08x}");
        }

        let timestamp = timestamp_from_millis(raw_timestamp);

        if timestamp.is_none() {
            warn!("Timestamp {raw_timestamp} ms is out of calendar range");
        }

        Ok(CaptureHeader {
            sample_rate,
            center_freq,
            raw_timestamp,
            sample_size,
            reserved,
            stored_crc,
            timestamp,
            crc_valid,
        })
    }

    fn encode(&self) -> [u8; CAPTURE_HEADER_SIZE] {
        let mut buf = [0u8; CAPTURE_HEADER_SIZE];
        let mut off = 0;

        write_u32_le(&mut buf, &mut off, self.sample_rate);
        write_u64_le(&mut buf, &mut off, self.center_freq);
        write_u64_le(&mut buf, &mut off, self.raw_timestamp);
        write_u32_le(&mut buf, &mut off, self.sample_size);
        write_u32_le(&mut buf, &mut off, self.reserved);
        write_u32_le(&mut buf, &mut off, self.stored_crc);

        buf
    }

    fn seal(&mut self) {
        self.stored_crc = crc32_checksum(&self.encode()[..CAPTURE_CRC_OFFSET]);
        self.crc_valid = true;
    }

    fn report(
        &self,
        format: ReportFormat,
    ) -> IqWavResult<String> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| IqWavError::report(e.to_string()))
            }
        }
    }
}

/// CRC32 (IEEE 802.3 / crc32fast)
pub fn crc32_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

impl std::fmt::Display for ReportFormat {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format '{s}'. Use: text, json")),
        }
    }
}
