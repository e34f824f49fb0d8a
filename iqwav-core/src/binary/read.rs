use byteorder::{ByteOrder, LittleEndian};

/// Читает little-endian u32 по смещению `off` и сдвигает его на 4 байта.
pub fn read_u32_le(
    buf: &[u8],
    off: &mut usize,
) -> u32 {
    let v = LittleEndian::read_u32(&buf[*off..*off + 4]);
    *off += 4;
    v
}

/// Читает little-endian u64 по смещению `off` и сдвигает его на 8 байт.
pub fn read_u64_le(
    buf: &[u8],
    off: &mut usize,
) -> u64 {
    let v = LittleEndian::read_u64(&buf[*off..*off + 8]);
    *off += 8;
    v
}
