//! Placeholder input seeding command

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use crate::cli::Output;
use crate::config::{ConfigOverrides, DashboardConfig};
use crate::seed;

#[derive(Args, Debug, Default)]
pub struct SeedArgs {
    /// Directory to write the placeholder reports into
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Overwrite reports that already exist
    #[arg(short, long)]
    pub force: bool,
}

pub fn execute(args: SeedArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let overrides = ConfigOverrides {
        input_dir: args.input_dir,
        ..Default::default()
    };
    let config = DashboardConfig::load(config_path, Some(&overrides))?;

    let written = seed::write_placeholder_inputs(&config, args.force)?;
    if written.is_empty() {
        output.info(&format!(
            "All input reports already exist in {} (use --force to overwrite)",
            config.inputs.dir.display()
        ));
        return Ok(());
    }

    for path in &written {
        output.success(&format!("Wrote placeholder {}", path.display()));
    }
    Ok(())
}
