//! Сборка RIFF/WAVE контейнера из области выборок захвата.
//!
//! Контейнер всегда объявлен как 16-битный PCM с двумя каналами, хотя на
//! каждую группу приходится одна 16-битная выборка. Такое объявление
//! сохраняется байт-в-байт ради совместимости с уже записанными файлами.

use iqwav_types::{IqWavError, IqWavResult};
use log::{debug, info};

use crate::{
    binary::{patch_u32_le, write_tag, write_u16_le, write_u32_le},
    SampleStream,
};

/// Размер заголовка WAV (44 байта)
pub const WAV_HEADER_SIZE: usize = 44;

/// Объявленное количество каналов
pub const WAV_CHANNELS: u16 = 2;

/// Разрядность выборки
pub const WAV_BITS_PER_SAMPLE: u16 = 16;

/// Выравнивание блока (байт на кадр)
pub const WAV_BLOCK_ALIGN: u16 = 4;

/// Код формата: несжатый PCM
pub const WAV_FORMAT_PCM: u16 = 1;

/// Размер подчанка `fmt `
pub const WAV_FMT_CHUNK_SIZE: u32 = 16;

/// Смещение поля «размер файла − 8»
pub const RIFF_SIZE_OFFSET: usize = 4;

/// Смещение поля размера чанка `data`
pub const DATA_SIZE_OFFSET: usize = 40;

/// Модуль диагностики выравнивания payload
pub const ALIGNMENT_CHECK_MODULUS: usize = 8;

/// Байт на выходную выборку
const PCM_SAMPLE_BYTES: usize = 2;

/// Заголовок WAV до back-patch размеров.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub sample_rate: u32,
    pub byte_rate: u32,
    /// Размер файла − 8
    pub riff_size: u32,
    /// Размер payload в байтах
    pub data_size: u32,
}

impl WavHeader {
    /// Заголовок с нулевыми размерами.
    pub fn new(sample_rate: u32) -> Self {
        WavHeader {
            sample_rate,
            byte_rate: byte_rate(sample_rate),
            riff_size: 0,
            data_size: 0,
        }
    }

    /// Сериализует заголовок в 44 байта
    pub fn to_bytes(&self) -> [u8; WAV_HEADER_SIZE] {
        let mut buf = [0u8; WAV_HEADER_SIZE];
        let mut off = 0;

        write_tag(&mut buf, &mut off, b"RIFF");
        write_u32_le(&mut buf, &mut off, self.riff_size);
        write_tag(&mut buf, &mut off, b"WAVE");

        write_tag(&mut buf, &mut off, b"fmt ");
        write_u32_le(&mut buf, &mut off, WAV_FMT_CHUNK_SIZE);
        write_u16_le(&mut buf, &mut off, WAV_FORMAT_PCM);
        write_u16_le(&mut buf, &mut off, WAV_CHANNELS);
        write_u32_le(&mut buf, &mut off, self.sample_rate);
        write_u32_le(&mut buf, &mut off, self.byte_rate);
        write_u16_le(&mut buf, &mut off, WAV_BLOCK_ALIGN);
        write_u16_le(&mut buf, &mut off, WAV_BITS_PER_SAMPLE);

        write_tag(&mut buf, &mut off, b"data");
        write_u32_le(&mut buf, &mut off, self.data_size);

        buf
    }
}

/// Байтовая скорость: `sample_rate × 16 × 2 / 8`.
///
/// Считается в u32 с переполнением по модулю 2^32, как в исходных файлах;
/// для частот ниже 2^27 Гц совпадает с `sample_rate × 4`.
pub fn byte_rate(sample_rate: u32) -> u32 {
    sample_rate.wrapping_mul(WAV_BITS_PER_SAMPLE as u32 * WAV_CHANNELS as u32) / 8
}

/// Усечение 32-битной группы до 16 бит: биты [8..24) со знаковым
/// расширением от 23-го бита.
pub fn truncate_sample(raw: i32) -> i16 {
    ((raw << 8) >> 16) as i16
}

/// Собирает полный WAV: заголовок, payload и исправленные поля размеров.
pub fn encode_wav(
    sample_rate: u32,
    stream: &SampleStream<'_>,
) -> IqWavResult<Vec<u8>> {
    let payload_len = stream.group_count() * PCM_SAMPLE_BYTES;

    // Оба поля размера должны уместиться в u32
    if u32::try_from(WAV_HEADER_SIZE - 8 + payload_len).is_err() {
        return Err(IqWavError::ContainerOverflow(payload_len));
    }

    let mut body = Vec::with_capacity(WAV_HEADER_SIZE + payload_len);
    body.extend_from_slice(&WavHeader::new(sample_rate).to_bytes());

    for raw in stream.samples() {
        body.extend_from_slice(&truncate_sample(raw).to_le_bytes());
    }

    if stream.trailing_bytes() > 0 {
        debug!(
            "Dropping {} trailing bytes of incomplete sample group",
            stream.trailing_bytes()
        );
    }

    let data_size = body.len() - WAV_HEADER_SIZE;
    let samples = data_size / PCM_SAMPLE_BYTES;

    info!(
        "Body samples: {samples}, alignment residue (mod {ALIGNMENT_CHECK_MODULUS}): {}",
        samples % ALIGNMENT_CHECK_MODULUS
    );

    let riff_size =
        u32::try_from(body.len() - 8).map_err(|_| IqWavError::ContainerOverflow(data_size))?;
    let data_size =
        u32::try_from(data_size).map_err(|_| IqWavError::ContainerOverflow(data_size))?;

    patch_u32_le(&mut body, RIFF_SIZE_OFFSET, riff_size);
    patch_u32_le(&mut body, DATA_SIZE_OFFSET, data_size);

    Ok(body)
}
