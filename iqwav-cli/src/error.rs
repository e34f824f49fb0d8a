use std::path::PathBuf;

use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Ошибка чтения/записи файла
    #[error("Failed to {action} {path:?}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Ошибка разбора захвата или сборки WAV
    #[error("Conversion error: {0}")]
    IqWav(#[from] iqwav_types::IqWavError),

    /// Некорректная конфигурация
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub fn io<P: Into<PathBuf>>(
        action: &'static str,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
