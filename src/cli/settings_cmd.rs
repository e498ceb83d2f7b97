//! Settings CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::storage::{Settings, SettingsFile};

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Change one setting
    ///
    /// Keys: enable_in_preview_mode, save_order_automatically,
    /// drag_handle_style (grab|move|custom), custom_drag_handle_class,
    /// animation_speed (0-500, step 50), indentation_marker,
    /// indentation_policy (follow-task|follow-slot)
    Set {
        /// Setting name
        key: String,

        /// New value
        value: String,
    },

    /// Restore default settings
    Reset,
}

pub fn run(cmd: SettingsCommands, output: &Output, settings_file: &SettingsFile) -> Result<()> {
    match cmd {
        SettingsCommands::Show => show(output, settings_file),
        SettingsCommands::Set { key, value } => set(output, settings_file, &key, &value),
        SettingsCommands::Reset => reset(output, settings_file),
    }
}

fn show(output: &Output, settings_file: &SettingsFile) -> Result<()> {
    let settings = settings_file.load()?;

    if output.is_json() {
        output.data(&settings);
    } else {
        for key in Settings::KEYS {
            println!("{} = {}", key, settings.get(key)?);
        }
    }

    Ok(())
}

fn set(output: &Output, settings_file: &SettingsFile, key: &str, value: &str) -> Result<()> {
    let current = settings_file.load()?;
    let next = current.with(key, value)?;

    output.verbose_ctx("settings", &format!("{}: {} -> {}", key, current.get(key)?, next.get(key)?));

    settings_file.save(&next)?;
    output.success(&format!("Set {} = {}", key, next.get(key)?));

    Ok(())
}

fn reset(output: &Output, settings_file: &SettingsFile) -> Result<()> {
    let current = settings_file.load()?;
    settings_file.save(&current.reset())?;
    output.success("Settings reset to defaults");

    Ok(())
}
