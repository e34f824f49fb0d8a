//! Пример: разбор IQ захвата и преобразование в WAV
//!
//! Демонстрирует:
//! - валидацию заголовка (CRC не прерывает обработку)
//! - convert() с текстовым отчётом

use iqwav_core::{convert, ReportFormat};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = "iqwav-core/test_capture.iq";
    let output_path = "iqwav-core/test_capture.wav";

    let input = std::fs::read(input_path)?;

    let out = match convert(&input, ReportFormat::Text) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("✗ Conversion failed: {e}");
            return Err(Box::new(e));
        }
    };

    if out.header.crc_valid {
        println!("✓ Header validated");
    } else {
        println!("⚠ Header CRC mismatch");
    }
    println!("{}", out.report);

    std::fs::write(output_path, &out.container)?;

    println!("\n✓ WAV: {output_path}");
    println!("  Samples        : {}", out.sample_count);
    println!("  Trailing bytes : {}", out.trailing_bytes);
    println!("  Container size : {} B", out.container.len());

    Ok(())
}
