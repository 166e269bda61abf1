//! Noise Workbench binary entry point.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use noise_workbench::error::checked_count;
use noise_workbench::noise::{voss, NoiseColor, OverflowPolicy, RngSource, VossConfig};
use noise_workbench::spectrum::{AnalyzerConfig, NoiseAnalyzer, NoiseReport, WelchConfig};
use noise_workbench::Signal;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, View};

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean CSV
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Printed as well as logged: RUST_LOG may filter out the event
            eprintln!("error: {}", e);
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let samples = checked_count("samples", cli.samples)?;
    let ncols = checked_count("ncols", cli.ncols)?;
    let color = NoiseColor::from(cli.color);

    let mut source = match cli.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    tracing::info!(color = color.name(), samples, seed = ?cli.seed, "generating noise");

    let signal = match color {
        NoiseColor::Pink => {
            let config = VossConfig {
                ncols,
                overflow: if cli.discard_overflow {
                    OverflowPolicy::Discard
                } else {
                    OverflowPolicy::FoldIntoFirst
                },
            };
            Signal::new(voss(samples, &config, &mut source)?, cli.sample_rate)?
        }
        _ => Signal::noise(color, samples, cli.sample_rate, &mut source)?,
    };
    tracing::debug!(duration_secs = signal.duration(), "signal ready");

    let analyzer = NoiseAnalyzer::new(AnalyzerConfig {
        welch: WelchConfig::for_sample_rate(cli.sample_rate),
        ..AnalyzerConfig::default()
    });
    let report = analyzer.analyze(&signal)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_view(&mut out, cli.view, color, &signal, &report)?;
    out.flush()?;

    Ok(())
}

fn write_view<W: Write>(
    out: &mut W,
    view: View,
    color: NoiseColor,
    signal: &Signal,
    report: &NoiseReport,
) -> io::Result<()> {
    match view {
        View::Time => {
            writeln!(out, "time,value")?;
            for (t, v) in report.time.rows() {
                writeln!(out, "{},{}", t, v)?;
            }
        }
        View::Fft => {
            writeln!(out, "frequency,magnitude,log_magnitude")?;
            for (f, m, l) in report.frequency.rows() {
                writeln!(out, "{},{},{}", f, m, l)?;
            }
        }
        View::Welch => {
            writeln!(out, "frequency,power")?;
            for (f, p) in report.welch.rows() {
                writeln!(out, "{},{}", f, p)?;
            }
        }
        View::Summary => {
            let n = signal.len() as f64;
            let mean = signal.samples().iter().sum::<f64>() / n;
            let var = signal.samples().iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
            let slope = report
                .slope
                .map(|s| format!("{:.3}", s))
                .unwrap_or_else(|| "n/a".to_string());
            writeln!(
                out,
                "color={} samples={} sample_rate={} mean={:.6} std={:.6} psd_slope={} expected_slope={}",
                color.name(),
                signal.len(),
                signal.sample_rate(),
                mean,
                var.sqrt(),
                slope,
                color.expected_slope(),
            )?;
        }
    }
    Ok(())
}
