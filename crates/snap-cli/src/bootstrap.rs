use anyhow::Context;
use snap_config::SnapConfig;

use crate::cli::Cli;

/// Load layered config, then apply command-line overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<SnapConfig> {
    let mut config = SnapConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load snapgen configuration")?;
    apply_overrides(&mut config, cli)?;
    Ok(config)
}

fn apply_overrides(config: &mut SnapConfig, cli: &Cli) -> anyhow::Result<()> {
    if let Some(folder) = &cli.test_folder {
        config.generator.test_folder_name.clone_from(folder);
        config
            .validate()
            .context("invalid --test-folder value")?;
    }
    Ok(())
}
