//! Config subcommands handler

use anyhow::Result;

use mdmedia::Config;

/// Show current configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("# {}", Config::config_path()?.display());
    println!("{}", toml_str);
    Ok(())
}

/// Show the image width, or set it and save right away.
pub fn handle_width(value: Option<&str>) -> Result<()> {
    let mut config = Config::load()?;

    let Some(value) = value else {
        if config.width().is_empty() {
            println!("(none)");
        } else {
            println!("{}", config.width());
        }
        return Ok(());
    };

    if config.set_width(value) {
        config.save()?;
        tracing::info!(width = %config.width(), "saved width");
    }
    if config.width().is_empty() {
        println!("Image width cleared; embeds will have no width.");
    } else {
        println!("Image width set to {}.", config.width());
    }
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    // Ensure config exists
    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!("Opening {} with {}", config_path.display(), editor);

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}
