//! Write an example scenario file

use std::path::Path;

use missionctl::adapters::toml::{example_scenario, write_scenario};
use missionctl::output::{OperationResult, OutputMode};

/// Write the example scenario to `path`
pub fn init(path: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let written = write_scenario(path, &example_scenario(), force)?;

    let result = if written {
        OperationResult {
            success: true,
            message: format!(
                "Created {}\n\nNext steps:\n  missionctl run {}",
                path.display(),
                path.display()
            ),
        }
    } else {
        OperationResult {
            success: false,
            message: format!("{} already exists. Use --force to overwrite.", path.display()),
        }
    };
    result.render(mode);

    Ok(())
}
