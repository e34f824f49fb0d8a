//! Пример: запись IQ захвата с синтетическим тоном
//!
//! Демонстрирует:
//! - создание и запечатывание (CRC32) заголовка
//! - упаковку 16-битных значений в биты [8..24) 32-битных групп
//! - synthesize_capture

use iqwav_core::{synthesize_capture, CaptureHeaderExt};
use iqwav_types::CaptureHeader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = "iqwav-core/test_capture.iq";
    let sample_rate: u32 = 48_000;

    // --- Заголовок ---
    let mut header = CaptureHeader::new(sample_rate, 433_920_000, 1_704_067_200_000, 4);
    header.seal();

    // --- Синусоида 1 kHz, одна секунда ---
    let samples: Vec<i32> = (0..sample_rate)
        .map(|n| {
            let t = n as f32 / sample_rate as f32;
            let v = (32_767.0 * (2.0 * std::f32::consts::PI * 1_000.0 * t).sin()) as i16;
            (v as i32) << 8
        })
        .collect();

    let raw = synthesize_capture(&header, &samples);
    std::fs::write(output_path, &raw)?;

    println!("✓ Записано: {output_path}");
    println!("  Samples  : {}", samples.len());
    println!("  Bytes    : {}", raw.len());
    println!("  CRC      : {:08x}", header.stored_crc);

    Ok(())
}
