use std::path::PathBuf;

use clap::Parser;
use iqwav_cli::{ConversionPipeline, ConvertConfig};
use iqwav_core::ReportFormat;
use log::{error, info, warn, LevelFilter};

#[derive(Parser, Debug)]
#[command(
    name = "iqwav",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert a raw IQ capture to 16-bit PCM WAV and extract its header",
    long_about = None,
)]
struct Cli {
    /// Файл IQ захвата
    #[arg(short, long)]
    input: PathBuf,
    /// Префикс выходных файлов: <PREFIX>-info.txt, <PREFIX>-iq.wav
    #[arg(short, long, default_value = "./raw")]
    output: PathBuf,
    /// Формат отчёта: text, json
    #[arg(long, default_value = "text")]
    report_format: String,
    /// Тихий режим (только ошибки)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
    /// Подробный вывод (debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let report_format: ReportFormat = match cli.report_format.parse() {
        Ok(f) => f,
        Err(e) => {
            error!("--report-format: {e}");
            std::process::exit(1);
        }
    };

    let config = ConvertConfig {
        input_path: cli.input,
        output_prefix: cli.output,
        report_format,
    };

    let pipeline = ConversionPipeline::new(config);

    let summary = match pipeline.run() {
        Ok(s) => s,
        Err(e) => {
            error!("Conversion failed: {e}");
            std::process::exit(1);
        }
    };

    // Отчёт всегда в stdout, независимо от уровня логирования
    println!("{}", summary.report);

    if !summary.crc_valid {
        warn!("⚠ Header CRC mismatch: header fields may be unreliable");
    }

    info!("\n{summary}");
    info!("done");
}
