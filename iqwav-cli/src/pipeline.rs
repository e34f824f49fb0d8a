use std::{fs, time::Instant};

use iqwav_core::convert;
use log::{debug, info, warn};

use crate::{CliError, CliResult, ConversionSummary, ConvertConfig};

/// Оркестрирует преобразование: чтение → разбор → перекодирование → запись.
pub struct ConversionPipeline {
    config: ConvertConfig,
}

impl ConversionPipeline {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Запускает преобразование. Оба выходных буфера формируются до записи:
    /// при ошибке разбора на диске ничего не появляется, а при ошибке записи
    /// WAV уже записанный отчёт удаляется.
    pub fn run(&self) -> CliResult<ConversionSummary> {
        let cfg = &self.config;
        let started = Instant::now();

        cfg.validate()?;

        info!("Reading capture: {:?}", cfg.input_path);

        let input =
            fs::read(&cfg.input_path).map_err(|e| CliError::io("read", &cfg.input_path, e))?;

        debug!("Read {} bytes", input.len());

        let conversion = convert(&input, cfg.report_format)?;

        let report_path = cfg.report_path();
        let wav_path = cfg.wav_path();

        fs::write(&report_path, conversion.report.as_bytes())
            .map_err(|e| CliError::io("write", &report_path, e))?;

        debug!("Report written: {report_path:?}");

        if let Err(e) = fs::write(&wav_path, &conversion.container) {
            if let Err(rm) = fs::remove_file(&report_path) {
                warn!("Failed to remove report {report_path:?}: {rm}");
            }

            return Err(CliError::io("write", &wav_path, e));
        }

        debug!("WAV written: {wav_path:?}");

        Ok(ConversionSummary::new(
            &conversion,
            input.len(),
            &started,
            report_path,
            wav_path,
        ))
    }
}
