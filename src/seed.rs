//! Placeholder input reports for trying qdash without a CI run
//!
//! Only the explicit `qdash seed` command writes these; generation never
//! fabricates inputs on its own.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::DashboardConfig;

pub const PLACEHOLDER_COVERAGE: &str = r#"<coverage line-rate="0.85" version="6.0"><packages><package name="src" line-rate="0.85"><classes><class name="module.py" filename="src/module.py" line-rate="0.85"><lines><line number="1" hits="1"/><line number="2" hits="0"/></lines></class></classes></package></packages></coverage>"#;

pub const PLACEHOLDER_PYLINT: &str = r#"[{"type": "error", "message": "dummy error"}]"#;

pub const PLACEHOLDER_FLAKE8: &str = "src/module.py:1:1: E001 dummy flake8 error\n";

/// Write the placeholder reports into the configured input directory.
///
/// Existing files are left alone unless `force` is set. Returns the files
/// actually written.
pub fn write_placeholder_inputs(config: &DashboardConfig, force: bool) -> Result<Vec<PathBuf>> {
    let inputs = &config.inputs;
    fs::create_dir_all(&inputs.dir)
        .with_context(|| format!("Failed to create directory: {}", inputs.dir.display()))?;

    let mut written = Vec::new();
    for (path, content) in [
        (inputs.coverage_path(), PLACEHOLDER_COVERAGE),
        (inputs.pylint_path(), PLACEHOLDER_PYLINT),
        (inputs.flake8_path(), PLACEHOLDER_FLAKE8),
    ] {
        if path.exists() && !force {
            tracing::debug!("Keeping existing input: {}", path.display());
            continue;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write placeholder: {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_all_three_inputs() {
        let temp_dir = TempDir::new().unwrap();
        let config = DashboardConfig::with_dirs(temp_dir.path().join("in"), temp_dir.path().join("out"));

        let written = write_placeholder_inputs(&config, false).unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(
            fs::read_to_string(config.inputs.flake8_path()).unwrap(),
            PLACEHOLDER_FLAKE8
        );
        assert!(!config.outputs.dir.exists(), "seeding never touches outputs");
    }

    #[test]
    fn test_existing_files_are_kept_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let config = DashboardConfig::with_dirs(temp_dir.path(), temp_dir.path().join("out"));
        fs::write(config.inputs.pylint_path(), "[]").unwrap();

        let written = write_placeholder_inputs(&config, false).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(config.inputs.pylint_path()).unwrap(), "[]");

        let written = write_placeholder_inputs(&config, true).unwrap();
        assert_eq!(written.len(), 3);
        assert_eq!(
            fs::read_to_string(config.inputs.pylint_path()).unwrap(),
            PLACEHOLDER_PYLINT
        );
    }
}
