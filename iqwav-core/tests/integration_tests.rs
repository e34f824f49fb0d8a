use std::{fs, io::Cursor};

use iqwav_core::{
    convert, crc32_checksum, encode_wav, synthesize_capture, truncate_sample, CaptureHeaderExt,
    ReportFormat, SampleStream, CAPTURE_CRC_OFFSET, CAPTURE_HEADER_SIZE, WAV_HEADER_SIZE,
};
use iqwav_types::{CaptureHeader, IqWavError};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tempfile::NamedTempFile;

// ===========================================================================
// Helpers — детерминированные тест-данные
// ===========================================================================

/// Детерминированный заголовок (timestamp фиксирован, не Now).
fn deterministic_header(sample_rate: u32) -> CaptureHeader {
    let mut h = CaptureHeader::new(sample_rate, 1_602_000_000, 1_704_067_200_000, 4);
    h.reserved = 0xCAFE_F00D;
    h.seal();
    h
}

/// Пилообразный паттерн групп.
fn sawtooth(count: usize) -> Vec<i32> {
    (0..count)
        .map(|i| (((i % 256) as i32 - 128) << 16) | ((i as i32 & 0xFF) << 8))
        .collect()
}

fn le_u32(
    buf: &[u8],
    off: usize,
) -> u32 {
    u32::from_le_bytes(buf[off..off + 4].try_into().unwrap())
}

// ===========================================================================
// Заголовок захвата
// ===========================================================================

#[test]
fn test_any_single_bit_flip_invalidates_crc() {
    let bytes = deterministic_header(48_000).encode();

    for byte in 0..CAPTURE_CRC_OFFSET {
        for bit in 0..8 {
            let mut flipped = bytes;
            flipped[byte] ^= 1 << bit;

            let decoded = CaptureHeader::decode(&flipped).unwrap();
            assert!(!decoded.crc_valid, "бит {bit} байта {byte}");
        }
    }
}

#[test]
fn test_random_headers_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x1F0_2024);

    for _ in 0..256 {
        let mut bytes = [0u8; CAPTURE_HEADER_SIZE];
        rng.fill(&mut bytes[..]);

        let decoded = CaptureHeader::decode(&bytes).unwrap();

        assert_eq!(decoded.encode(), bytes, "все 32 байта воспроизводятся");
        assert_eq!(
            decoded.crc_valid,
            crc32_checksum(&bytes[..CAPTURE_CRC_OFFSET]) == decoded.stored_crc
        );
    }
}

#[test]
fn test_sealed_random_headers_are_valid() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..64 {
        let mut h = CaptureHeader::new(rng.gen(), rng.gen(), rng.gen(), rng.gen());
        h.reserved = rng.gen();
        h.seal();

        assert!(CaptureHeader::decode(&h.encode()).unwrap().crc_valid);
    }
}

// ===========================================================================
// Контейнер WAV
// ===========================================================================

#[test]
fn test_payload_length_for_any_stream_length() {
    let mut rng = StdRng::seed_from_u64(42);

    for len in 0..64usize {
        let mut data = vec![0u8; len];
        rng.fill(&mut data[..]);

        let wav = encode_wav(22_050, &SampleStream::new(&data)).unwrap();

        assert_eq!(wav.len(), WAV_HEADER_SIZE + (len / 4) * 2, "len={len}");
        assert_eq!(le_u32(&wav, 4) as usize, wav.len() - 8);
        assert_eq!(le_u32(&wav, 40) as usize, wav.len() - WAV_HEADER_SIZE);
    }
}

#[test]
fn test_payload_matches_shift_rule() {
    let samples = sawtooth(1_000);
    let input = synthesize_capture(&deterministic_header(2_000_000), &samples);

    let out = convert(&input, ReportFormat::Text).unwrap();
    let payload = &out.container[WAV_HEADER_SIZE..];

    for (i, (chunk, raw)) in payload.chunks_exact(2).zip(&samples).enumerate() {
        let got = i16::from_le_bytes([chunk[0], chunk[1]]);
        assert_eq!(got, truncate_sample(*raw), "выборка {i}");
    }
}

#[test]
fn test_container_readable_by_hound() {
    let samples = sawtooth(64);
    let input = synthesize_capture(&deterministic_header(48_000), &samples);
    let out = convert(&input, ReportFormat::Text).unwrap();

    let reader = hound::WavReader::new(Cursor::new(out.container)).unwrap();
    let spec = reader.spec();

    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 48_000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let decoded: Vec<i16> = reader
        .into_samples::<i16>()
        .collect::<Result<_, _>>()
        .unwrap();
    let expected: Vec<i16> = samples.iter().map(|s| truncate_sample(*s)).collect();

    assert_eq!(decoded, expected);
}

// ===========================================================================
// Сценарии
// ===========================================================================

#[test]
fn test_scenario_two_samples() {
    let mut header = CaptureHeader::new(8_000, 0, 0, 0);
    header.seal();
    let input = synthesize_capture(&header, &[0x0001_0000, 0xFFFE_0000u32 as i32]);

    let out = convert(&input, ReportFormat::Text).unwrap();

    assert!(out.header.crc_valid);
    assert_eq!(out.container.len(), 48);
    assert_eq!(le_u32(&out.container, 40), 4);
    assert_eq!(le_u32(&out.container, 28), 32_000);
    assert_eq!(&out.container[44..], &[0x00, 0x01, 0x00, 0xFE]);
}

#[test]
fn test_scenario_empty_sample_region() {
    let input = deterministic_header(44_100).encode();

    let out = convert(&input, ReportFormat::Text).unwrap();

    assert_eq!(out.container.len(), WAV_HEADER_SIZE);
    assert_eq!(le_u32(&out.container, 4), 36);
    assert_eq!(le_u32(&out.container, 40), 0);
    assert_eq!(out.sample_count, 0);
}

#[test]
fn test_scenario_truncated_input() {
    let input = deterministic_header(8_000).encode();

    let err = convert(&input[..31], ReportFormat::Text).unwrap_err();

    assert!(matches!(err, IqWavError::TruncatedHeader { found: 31, .. }));
}

#[test]
fn test_byte_rate_for_48k() {
    let input = deterministic_header(48_000).encode();
    let out = convert(&input, ReportFormat::Text).unwrap();

    assert_eq!(le_u32(&out.container, 28), 192_000);
}

// ===========================================================================
// Файловый round-trip
// ===========================================================================

#[test]
fn test_file_round_trip() {
    let capture = NamedTempFile::new().unwrap();
    let wav = NamedTempFile::new().unwrap();
    let samples = sawtooth(500);

    let mut raw = synthesize_capture(&deterministic_header(250_000), &samples);
    raw.extend_from_slice(&[0x11, 0x22, 0x33]); // неполная группа
    fs::write(capture.path(), &raw).unwrap();

    let input = fs::read(capture.path()).unwrap();
    let out = convert(&input, ReportFormat::Json).unwrap();
    fs::write(wav.path(), &out.container).unwrap();

    assert_eq!(out.trailing_bytes, 3);
    assert_eq!(out.sample_count, 500);

    let written = fs::read(wav.path()).unwrap();
    assert_eq!(written.len(), WAV_HEADER_SIZE + 1_000);
    assert_eq!(written, out.container);

    let report: serde_json::Value = serde_json::from_str(&out.report).unwrap();
    assert_eq!(report["sample_rate"], 250_000);
    assert_eq!(report["crc_valid"], true);
}
