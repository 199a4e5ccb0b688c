//! Command dispatch for the translayer CLI.
//!
//! Builds the manager from configuration (file values overlaid with
//! command-line flags) and maps each subcommand onto one orchestrator
//! operation.

use std::{env, fs, path::Path};

use anyhow::Result;

use super::args::{
    Arguments, Command, CommonArgs, GroupsCommand, PromoteCommand, SetCommand, ShowCommand,
};
use super::exit_status::ExitStatus;
use super::report;
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json, load_config};
use crate::loader::ChainLoader;
use crate::manager::TranslationManager;
use crate::storage::DiskStorage;

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Groups(cmd)) => groups(&cmd),
        Some(Command::Show(cmd)) => show(&cmd),
        Some(Command::Set(cmd)) => set(&cmd),
        Some(Command::Promote(cmd)) => promote(&cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    report::print_created(CONFIG_FILE_NAME);
    Ok(ExitStatus::Success)
}

fn groups(cmd: &GroupsCommand) -> Result<ExitStatus> {
    let manager = manager_for(&cmd.common)?;
    let groups = manager.translation_groups()?;
    report::print_groups(&groups);
    Ok(ExitStatus::Success)
}

fn show(cmd: &ShowCommand) -> Result<ExitStatus> {
    let manager = manager_for(&cmd.common)?;
    let flat = manager.translations_for_group(&cmd.locale, &cmd.group)?;
    report::print_translations(&flat);
    Ok(ExitStatus::Success)
}

fn set(cmd: &SetCommand) -> Result<ExitStatus> {
    let manager = manager_for(&cmd.common)?;
    let saved = manager.save(&cmd.locale, &cmd.group, &cmd.key, cmd.value.clone())?;
    report::print_warnings(&saved.warnings);
    report::print_saved(&saved);
    Ok(ExitStatus::Success)
}

fn promote(cmd: &PromoteCommand) -> Result<ExitStatus> {
    let manager = manager_for(&cmd.common)?;
    let report_data = manager.merge_overrides_into_base(&cmd.locale)?;
    report::print_warnings(&report_data.warnings);
    report::print_promoted(&cmd.locale, &report_data, cmd.common.verbose);
    Ok(ExitStatus::Success)
}

/// Load configuration from the working directory and apply command-line
/// overrides on top.
fn resolve_config(common: &CommonArgs) -> Result<Config> {
    let cwd = env::current_dir()?;
    let mut config = load_config(&cwd)?.config;

    if let Some(lang_root) = &common.lang_root {
        config.lang_root = lang_root.to_string_lossy().into_owned();
    }
    if let Some(override_root) = &common.override_root {
        config.override_root = override_root.to_string_lossy().into_owned();
    }
    if let Some(fallback_locale) = &common.fallback_locale {
        config.fallback_locale = fallback_locale.clone();
    }

    config.validate()?;
    Ok(config)
}

fn manager_for(
    common: &CommonArgs,
) -> Result<TranslationManager<DiskStorage, ChainLoader<DiskStorage>>> {
    let config = resolve_config(common)?;
    let loader = ChainLoader::new(DiskStorage, &config.lang_root, &config.override_root);
    Ok(TranslationManager::new(DiskStorage, loader, &config))
}
