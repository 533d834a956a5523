//! Information display handlers (config)

use crate::cli::output::print_config;
use crate::AppConfig;
use crate::Result;

/// Handle the config command
pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
