use box_annotate::{load_config, run_batch};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let report = run_batch(&config).map_err(|e| e.to_string())?;
    log::info!(
        "{} images written, {} skipped",
        report.processed,
        report.skipped
    );
    Ok(())
}

fn usage() -> String {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "annotate".to_string());
    format!("Usage: {program} <config.json>")
}
