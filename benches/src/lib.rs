//! Общие тест-данные для бенчмарков.

use iqwav_core::{synthesize_capture, CaptureHeaderExt};
use iqwav_types::CaptureHeader;

/// Захват 2 Msps с `groups` псевдослучайными группами и корректным CRC.
pub fn capture(groups: usize) -> Vec<u8> {
    let mut header = CaptureHeader::new(2_000_000, 1_602_000_000, 1_704_067_200_000, 4);
    header.seal();

    let samples: Vec<i32> = (0..groups as i32)
        .map(|i| i.wrapping_mul(0x0101_0101))
        .collect();

    synthesize_capture(&header, &samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_size() {
        assert_eq!(capture(0).len(), 32);
        assert_eq!(capture(10).len(), 32 + 40);
    }
}
