use byteorder::{ByteOrder, LittleEndian};

use crate::CAPTURE_HEADER_SIZE;

/// Размер одной группы выборок в байтах
pub const SAMPLE_GROUP_SIZE: usize = 4;

/// Представление области выборок захвата (всё, что после заголовка).
///
/// Данные трактуются как последовательность little-endian `i32`. Неполная
/// группа в конце (1–3 байта) в выборки не попадает.
#[derive(Debug, Clone, Copy)]
pub struct SampleStream<'a> {
    data: &'a [u8],
}

impl<'a> SampleStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Область выборок целого файла захвата. Для буфера не длиннее
    /// заголовка поток пуст.
    pub fn from_capture(buf: &'a [u8]) -> Self {
        Self::new(buf.get(CAPTURE_HEADER_SIZE..).unwrap_or(&[]))
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Количество полных групп.
    pub fn group_count(&self) -> usize {
        self.data.len() / SAMPLE_GROUP_SIZE
    }

    /// Байты неполной последней группы.
    pub fn trailing_bytes(&self) -> usize {
        self.data.len() % SAMPLE_GROUP_SIZE
    }

    /// Итератор по полным группам.
    pub fn samples(&self) -> impl Iterator<Item = i32> + 'a {
        self.data
            .chunks_exact(SAMPLE_GROUP_SIZE)
            .map(LittleEndian::read_i32)
    }
}
