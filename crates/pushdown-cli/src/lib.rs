// pushdown-cli: shared utilities for the driver binaries.

use std::process;

use pushdown_sim::{Dpda, DpdaDefinition, DpdaError};

/// Load an automaton definition from a JSON file and build it.
pub fn load_dpda(path: &str) -> Result<Dpda, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    DpdaDefinition::from_json(&text)
        .and_then(|def| def.build())
        .map_err(|e: DpdaError| format!("invalid definition in {path}: {e}"))
}

/// True if the arguments ask for help.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Print an error and exit with a failure status.
pub fn fatal(message: &str) -> ! {
    eprintln!("error: {message}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = load_dpda("/nonexistent/machine.json").unwrap_err();
        assert!(err.contains("/nonexistent/machine.json"));
    }

    #[test]
    fn help_flags_detected() {
        let args = vec!["--help".to_string()];
        assert!(wants_help(&args));
        assert!(!wants_help(&["machine.json".to_string()]));
    }
}
