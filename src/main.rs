#![allow(non_snake_case)]
use RustedLieThe::Utils::logger::{init_logger, save_report_to_file};
use RustedLieThe::lie::error::{LieError, LieResult};
use RustedLieThe::lie::study::{StudyConfig, study_catalog};
use log::{error, info};
use std::env;
use std::fs;
use std::process::ExitCode;

/// usage: `RustedLieThe [task_file]`; without a task file the whole nonnice catalog is studied
fn run() -> LieResult<()> {
    let config = match env::args().nth(1) {
        Some(path) => {
            let document = fs::read_to_string(&path)
                .map_err(|e| LieError::Config(format!("cannot read {}: {}", path, e)))?;
            StudyConfig::from_task_document(&document)?
        }
        None => StudyConfig::default(),
    };
    init_logger(config.log_level, config.log_file);
    info!("configuration: {:?}", config);

    let study = study_catalog(&config)?;
    let report = study.report();
    println!("{}", report);
    println!("\n{}", study.summary_table());
    if study.failures() > 0 {
        error!("{} of {} entries failed", study.failures(), study.runs.len());
    }
    if let Some(path) = &config.report_file {
        save_report_to_file(path, &report)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
