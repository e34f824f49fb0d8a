use std::{path::PathBuf, time::Instant};

use iqwav_core::{Conversion, WAV_HEADER_SIZE};

/// Итоги одного преобразования для отображения / тестирования.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub duration_secs: f64,
    pub input_bytes: usize,
    pub sample_rate: u32,
    pub samples_converted: usize,
    pub payload_bytes: usize,
    pub container_bytes: usize,
    pub trailing_bytes: usize,
    pub crc_valid: bool,
    /// Текст отчёта, записанный на диск
    pub report: String,
    pub report_path: PathBuf,
    pub wav_path: PathBuf,
}

impl ConversionSummary {
    pub fn new(
        conversion: &Conversion,
        input_bytes: usize,
        started: &Instant,
        report_path: PathBuf,
        wav_path: PathBuf,
    ) -> Self {
        Self {
            duration_secs: started.elapsed().as_secs_f64(),
            input_bytes,
            sample_rate: conversion.header.sample_rate,
            samples_converted: conversion.sample_count,
            payload_bytes: conversion.container.len() - WAV_HEADER_SIZE,
            container_bytes: conversion.container.len(),
            trailing_bytes: conversion.trailing_bytes,
            crc_valid: conversion.header.crc_valid,
            report: conversion.report.clone(),
            report_path,
            wav_path,
        }
    }

    /// Длительность записи в секундах при заявленной частоте.
    pub fn audio_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }

        self.samples_converted as f64 / self.sample_rate as f64
    }
}

impl std::fmt::Display for ConversionSummary {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        writeln!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(f, "  Input         : {} B", self.input_bytes)?;
        writeln!(f, "  Samples       : {}", self.samples_converted)?;
        writeln!(f, "  Audio         : {:.3}s", self.audio_secs())?;
        writeln!(f, "  Payload       : {} B", self.payload_bytes)?;
        writeln!(f, "  Trailing      : {} B dropped", self.trailing_bytes)?;
        writeln!(
            f,
            "  Header CRC    : {}",
            if self.crc_valid { "ok" } else { "mismatch" }
        )?;
        writeln!(f, "  Report        : {:?}", self.report_path)?;
        writeln!(f, "  WAV           : {:?}", self.wav_path)?;
        writeln!(f, "  Duration      : {:.3}s", self.duration_secs)?;
        write!(f, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")
    }
}
