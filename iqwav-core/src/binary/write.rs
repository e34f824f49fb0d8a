use byteorder::{ByteOrder, LittleEndian};

pub fn write_u16_le(
    buf: &mut [u8],
    off: &mut usize,
    val: u16,
) {
    LittleEndian::write_u16(&mut buf[*off..*off + 2], val);
    *off += 2;
}

pub fn write_u32_le(
    buf: &mut [u8],
    off: &mut usize,
    val: u32,
) {
    LittleEndian::write_u32(&mut buf[*off..*off + 4], val);
    *off += 4;
}

pub fn write_u64_le(
    buf: &mut [u8],
    off: &mut usize,
    val: u64,
) {
    LittleEndian::write_u64(&mut buf[*off..*off + 8], val);
    *off += 8;
}

/// Копирует 4-байтовый тег чанка (`RIFF`, `fmt ` и т.п.).
pub fn write_tag(
    buf: &mut [u8],
    off: &mut usize,
    tag: &[u8; 4],
) {
    buf[*off..*off + 4].copy_from_slice(tag);
    *off += 4;
}

/// Перезаписывает уже выделенное u32 поле (back-patch размеров).
pub fn patch_u32_le(
    buf: &mut [u8],
    off: usize,
    val: u32,
) {
    LittleEndian::write_u32(&mut buf[off..off + 4], val);
}
