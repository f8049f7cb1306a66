use crate::lie::error::LieResult;
use chrono::Local;
use log::{LevelFilter, info, warn};
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// name of the log file for a run started now
pub fn log_file_name() -> String {
    format!("lie_study_{}.log", Local::now().format("%Y-%m-%d_%H-%M-%S"))
}

/// Terminal logger, plus a time-stamped log file if `log_to_file`. Only the first call in a
/// process installs a logger.
pub fn init_logger(level: LevelFilter, log_to_file: bool) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));
    let mut file_error = None;
    if log_to_file {
        match create_log_file(Path::new(&log_file_name())) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(e) => file_error = Some(e),
        }
    }
    let _ = CombinedLogger::init(loggers);
    if let Some(e) = file_error {
        warn!("{}; logging to the terminal only", e);
    }
}

/// creates the log file, the error names the file
pub fn create_log_file(path: &Path) -> Result<File, String> {
    File::create(path).map_err(|e| format!("cannot create log file {}: {}", path.display(), e))
}

/// writes a report, replacing the file if it exists
pub fn save_report_to_file(path: &Path, report: &str) -> LieResult<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{}", report)?;
    info!("report saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_save_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        save_report_to_file(&path, "Lie algebra: (0,0,12)").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Lie algebra: (0,0,12)\n");
    }

    #[test]
    fn test_save_report_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        assert!(save_report_to_file(&path, "x").is_err());
    }

    #[test]
    fn test_create_log_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("run.log");
        assert!(create_log_file(&good).is_ok());
        assert!(good.exists());
        let bad = dir.path().join("missing").join("run.log");
        let message = create_log_file(&bad).unwrap_err();
        assert!(message.starts_with("cannot create log file"));
        assert!(message.contains("run.log"));
    }

    #[test]
    fn test_log_file_name() {
        let name = log_file_name();
        assert!(name.starts_with("lie_study_"));
        assert!(name.ends_with(".log"));
    }
}
