use std::{
    ffi::OsString,
    path::{Component, Path, PathBuf},
};

use iqwav_core::ReportFormat;

use crate::{CliError, CliResult};

/// Суффикс файла текстового отчёта
pub const REPORT_SUFFIX: &str = "-info.txt";

/// Суффикс файла JSON отчёта
pub const REPORT_JSON_SUFFIX: &str = "-info.json";

/// Суффикс WAV файла
pub const WAV_SUFFIX: &str = "-iq.wav";

/// Полная конфигурация преобразования.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Путь к файлу IQ захвата
    pub input_path: PathBuf,
    /// Префикс выходных файлов (`<prefix>-info.txt`, `<prefix>-iq.wav`)
    pub output_prefix: PathBuf,
    /// Формат отчёта о заголовке
    pub report_format: ReportFormat,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl ConvertConfig {
    /// Путь к файлу отчёта.
    pub fn report_path(&self) -> PathBuf {
        let suffix = match self.report_format {
            ReportFormat::Text => REPORT_SUFFIX,
            ReportFormat::Json => REPORT_JSON_SUFFIX,
        };

        with_suffix(&self.output_prefix, suffix)
    }

    /// Путь к WAV файлу.
    pub fn wav_path(&self) -> PathBuf {
        with_suffix(&self.output_prefix, WAV_SUFFIX)
    }

    /// Проверяет конфигурацию до начала работы.
    ///
    /// Совпадение входа и выхода проверяется лексически (без учёта `.`):
    /// `..`, симлинки и жёсткие ссылки не разрешаются, так как выходных
    /// файлов ещё может не быть.
    pub fn validate(&self) -> CliResult<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(CliError::Config("input file is required".into()));
        }

        if self.output_prefix.as_os_str().is_empty() {
            return Err(CliError::Config("output prefix must not be empty".into()));
        }

        let input = lexical(&self.input_path);

        if input == lexical(&self.wav_path()) || input == lexical(&self.report_path()) {
            return Err(CliError::Config(format!(
                "output would overwrite input {:?}",
                self.input_path
            )));
        }

        Ok(())
    }
}

/// Дописывает суффикс к пути без учёта расширения (`./raw` → `./raw-iq.wav`).
fn with_suffix(
    prefix: &Path,
    suffix: &str,
) -> PathBuf {
    let mut s: OsString = prefix.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}

/// Путь без компонентов `.` (`./x-iq.wav` → `x-iq.wav`).
fn lexical(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            output_prefix: PathBuf::from("./raw"),
            report_format: ReportFormat::Text,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
