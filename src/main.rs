use anyhow::Context;
use log::warn;
use std::path::PathBuf;
use triagem::utils::console;
use triagem::{TriageConfig, export_results, infer_format, load_mapping, load_reports, run_triage};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = parse_args()?;

    let kb = load_mapping(&config.mapping_path).with_context(|| {
        format!(
            "loading symptom mapping from {}",
            config.mapping_path.display()
        )
    })?;
    if kb.is_empty() {
        anyhow::bail!(
            "no symptom rules loaded from {}",
            config.mapping_path.display()
        );
    }

    let records = load_reports(&config.reports_path).with_context(|| {
        format!(
            "loading report corpus from {}",
            config.reports_path.display()
        )
    })?;
    if records.is_empty() {
        warn!("No reports found in {}", config.reports_path.display());
        return Ok(());
    }

    // Resolve the export destination before any work so a bad format
    // aborts the run without a partial export
    let export = match &config.export_path {
        Some(path) => Some((path.clone(), infer_format(path, config.export_format)?)),
        None => None,
    };

    let run = run_triage(&records, &kb, config.show_progress);

    if config.print_reports {
        for outcome in &run.outcomes {
            console::print_outcome(outcome);
        }
    }
    console::print_summary(&run.summary);

    if let Some((path, format)) = export {
        export_results(&path, format, &run.outcomes, &run.summary)
            .with_context(|| format!("exporting results to {}", path.display()))?;
        println!(
            "\nResultados exportados para {} ({}).",
            path.display(),
            format.extension().to_uppercase()
        );
    }

    Ok(())
}

fn parse_args() -> anyhow::Result<TriageConfig> {
    let mut config = TriageConfig::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--reports" => config.reports_path = PathBuf::from(value(&mut args, "--reports")?),
            "--mapping" => config.mapping_path = PathBuf::from(value(&mut args, "--mapping")?),
            "--export" => {
                config.export_path = Some(PathBuf::from(value(&mut args, "--export")?));
            }
            "--format" => config.export_format = Some(value(&mut args, "--format")?.parse()?),
            "--no-progress" => config.show_progress = false,
            "--quiet" => config.print_reports = false,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                print_usage();
                anyhow::bail!("unrecognized argument: {other}");
            }
        }
    }

    Ok(config)
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    args.next()
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn print_usage() {
    eprintln!("Usage: triagem [--reports FILE] [--mapping FILE] [--export FILE] [--format json|csv]");
    eprintln!("               [--no-progress] [--quiet]");
    eprintln!();
    eprintln!("Reads free-text patient reports, matches cardiac symptoms against the");
    eprintln!("mapping CSV and prints the suggested diagnoses with a corpus summary.");
}
