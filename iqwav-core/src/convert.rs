use iqwav_types::{CaptureHeader, IqWavResult};
use log::debug;

use crate::{encode_wav, CaptureHeaderExt, ReportFormat, SampleStream};

/// Результат преобразования захвата. Оба выходных буфера готовы до того,
/// как что-либо будет записано на диск.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub header: CaptureHeader,
    /// Отчёт о заголовке
    pub report: String,
    /// Полный WAV файл
    pub container: Vec<u8>,
    /// Количество преобразованных групп
    pub sample_count: usize,
    /// Отброшенные байты неполной последней группы
    pub trailing_bytes: usize,
}

/// Разбирает заголовок, перекодирует выборки и формирует отчёт.
pub fn convert(
    input: &[u8],
    report_format: ReportFormat,
) -> IqWavResult<Conversion> {
    let header = CaptureHeader::decode(input)?;
    let stream = SampleStream::from_capture(input);

    debug!(
        "Capture: {} bytes, {} sample groups, sample_rate={} Hz",
        input.len(),
        stream.group_count(),
        header.sample_rate
    );

    let container = encode_wav(header.sample_rate, &stream)?;
    let report = header.report(report_format)?;

    Ok(Conversion {
        header,
        report,
        container,
        sample_count: stream.group_count(),
        trailing_bytes: stream.trailing_bytes(),
    })
}

/// Собирает буфер захвата из заголовка и сырых групп.
///
/// Заголовок пишется как есть: для корректного CRC сначала вызовите
/// [`CaptureHeaderExt::seal`].
pub fn synthesize_capture(
    header: &CaptureHeader,
    samples: &[i32],
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(crate::CAPTURE_HEADER_SIZE + samples.len() * 4);

    buf.extend_from_slice(&header.encode());

    for s in samples {
        buf.extend_from_slice(&s.to_le_bytes());
    }

    buf
}
