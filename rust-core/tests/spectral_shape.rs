/// Integration tests for the spectral shape of generated noise.
///
/// Long seeded signals are run through the Welch estimator and the log-log
/// slope of the PSD is checked against the colour's nominal exponent:
/// 1. White noise is flat
/// 2. Pink noise falls off as 1/f
/// 3. Brown noise falls off as 1/f^2
/// 4. The command-line driver reports the same thing
use std::process::Command;

use noise_workbench::noise::{generate, NoiseColor, RngSource};
use noise_workbench::spectrum::{loglog_slope, welch, WelchConfig};

const SAMPLES: usize = 1 << 18;
const SLOPE_BAND: (f64, f64) = (1.0, 100.0);
const TOLERANCE: f64 = 0.3;

fn measured_slope(color: NoiseColor, seed: u64) -> f64 {
    let mut source = RngSource::seeded(seed);
    let samples = generate(color, SAMPLES, &mut source).expect("generation failed");
    assert_eq!(samples.len(), SAMPLES);

    let psd = welch(&samples, &WelchConfig::default()).expect("welch failed");
    loglog_slope(&psd, SLOPE_BAND.0, SLOPE_BAND.1).expect("slope fit failed")
}

#[test]
fn test_white_noise_is_flat() {
    let slope = measured_slope(NoiseColor::White, 1);
    assert!(slope.abs() < TOLERANCE, "white slope = {}", slope);
}

#[test]
fn test_pink_noise_one_over_f() {
    let slope = measured_slope(NoiseColor::Pink, 2);
    assert!((slope + 1.0).abs() < TOLERANCE, "pink slope = {}", slope);
}

#[test]
fn test_brown_noise_one_over_f_squared() {
    let slope = measured_slope(NoiseColor::Brown, 3);
    assert!((slope + 2.0).abs() < TOLERANCE, "brown slope = {}", slope);
}

#[test]
fn test_colors_are_ordered_by_slope() {
    let white = measured_slope(NoiseColor::White, 4);
    let pink = measured_slope(NoiseColor::Pink, 4);
    let brown = measured_slope(NoiseColor::Brown, 4);
    assert!(white > pink && pink > brown, "{} {} {}", white, pink, brown);
}

fn noise_workbench() -> Command {
    Command::new(env!("CARGO_BIN_EXE_noise-workbench"))
}

#[test]
fn test_cli_summary() {
    let output = noise_workbench()
        .args(["pink", "-n", "20000", "--seed", "9"])
        .output()
        .expect("failed to run noise-workbench");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("color=pink samples=20000 sample_rate=1000"), "{}", stdout);
    assert!(stdout.contains("expected_slope=-1"));
}

#[test]
fn test_cli_welch_csv() {
    let output = noise_workbench()
        .args(["brown", "-n", "8000", "--seed", "9", "--view", "welch"])
        .output()
        .expect("failed to run noise-workbench");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("frequency,power"));
    assert_eq!(lines.count(), 400);
}

#[test]
fn test_cli_seeded_runs_repeat() {
    let run = || {
        noise_workbench()
            .args(["pink", "-n", "3000", "--ncols", "8", "--seed", "5", "--view", "time"])
            .output()
            .expect("failed to run noise-workbench")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_cli_rejects_negative_samples() {
    let output = noise_workbench()
        .args(["pink", "-n", "-5"])
        .output()
        .expect("failed to run noise-workbench");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("samples"), "{}", stderr);
}

#[test]
fn test_cli_reports_errors_with_logging_off() {
    let output = noise_workbench()
        .env("RUST_LOG", "off")
        .args(["white", "--ncols", "0"])
        .output()
        .expect("failed to run noise-workbench");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid argument `ncols`"), "{}", stderr);
}
