//! Command dispatch: load settings, run the catalog, print results

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::behavioural::interpreter::Expression;
use crate::catalog::demos::sample_shapes;
use crate::catalog::{Catalog, Category, PatternEntry};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings, LOCAL_CONFIG_FILE};

/// Local config to use: the explicit `--config`, else `./.patterns.toml` if present.
pub fn resolve_local_config(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(LOCAL_CONFIG_FILE);
            default.exists().then_some(default)
        }
    }
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let local = resolve_local_config(cli.config.as_deref());
    let settings = || Settings::load(local.as_deref()).map_err(CliError::from);

    match &cli.command {
        Some(Commands::List { category }) => cmd_list(category.as_deref()),
        Some(Commands::Run { names, all }) => cmd_run(&settings()?, names, *all),
        Some(Commands::Show { name }) => cmd_show(name),
        Some(Commands::Tree) => cmd_tree(&settings()?),
        Some(Commands::Eval { expression }) => cmd_eval(expression),
        Some(Commands::Config { command }) => cmd_config(command, local.as_deref(), settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "patternbook", &mut io::stdout());
            Ok(())
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| CliError::io("print help", e))?;
            Ok(())
        }
    }
}

#[instrument]
fn cmd_list(category: Option<&str>) -> CliResult<()> {
    let categories = match category {
        Some(key) => vec![key.parse::<Category>()?],
        None => Category::ALL.to_vec(),
    };
    let catalog = Catalog::new();
    for category in categories {
        output::heading(&category);
        for entry in catalog.by_category(category) {
            output::pattern_row(entry.name, entry.summary);
        }
    }
    Ok(())
}

/// Run the demos for `names`, or for every entry when `all` is set.
#[instrument(skip(settings))]
fn cmd_run(settings: &Settings, names: &[String], all: bool) -> CliResult<()> {
    let catalog = Catalog::new();
    let entries: Vec<&PatternEntry> = if all {
        catalog.entries().iter().collect()
    } else {
        names
            .iter()
            .map(|name| catalog.find(name))
            .collect::<Result<_, _>>()?
    };
    if entries.is_empty() {
        return Err(CliError::InvalidArgs("no pattern given".to_string()));
    }

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            output::blank();
        }
        debug!(pattern = entry.name, "running demo");
        output::heading(&format!("{} ({})", entry.name, entry.category));
        for line in entry.run(settings)? {
            output::demo_line(&line);
        }
    }
    Ok(())
}

#[instrument]
fn cmd_show(name: &str) -> CliResult<()> {
    let entry = Catalog::new().find(name)?;
    output::heading(entry.name);
    output::field("category", &entry.category);
    output::field("summary", entry.summary);
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_tree(settings: &Settings) -> CliResult<()> {
    output::plain(&sample_shapes(settings).to_tree());
    Ok(())
}

#[instrument]
fn cmd_eval(expression: &str) -> CliResult<()> {
    let parsed = Expression::parse(expression)?;
    output::plain(&format!("{parsed} = {}", parsed.evaluate()?));
    Ok(())
}

fn cmd_config(
    command: &ConfigCommands,
    local: Option<&Path>,
    settings: impl Fn() -> CliResult<Settings>,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::plain(&settings()?.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::field("global", &path.display()),
                None => output::field("global", "unavailable"),
            }
            match local {
                Some(path) => output::field("local", &path.display()),
                None => output::field("local", &format!("{LOCAL_CONFIG_FILE} (not present)")),
            }
            Ok(())
        }
        ConfigCommands::Init { global, force } => {
            let target = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::InvalidArgs("cannot determine global config directory".to_string())
                })?
            } else {
                PathBuf::from(LOCAL_CONFIG_FILE)
            };
            write_template(&target, *force)?;
            output::success(&format!("wrote {}", target.display()));
            Ok(())
        }
    }
}

/// Write the config template to `target`, refusing to clobber unless `force`.
pub fn write_template(target: &Path, force: bool) -> CliResult<()> {
    if target.exists() && !force {
        return Err(CliError::InvalidArgs(format!(
            "{} already exists (use --force to overwrite)",
            target.display()
        )));
    }
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CliError::io(format!("create {}", parent.display()), e))?;
    }
    fs::write(target, Settings::template())
        .map_err(|e| CliError::io(format!("write {}", target.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_explicit_path_when_resolving_then_uses_it() {
        let path = PathBuf::from("/tmp/custom.toml");
        assert_eq!(resolve_local_config(Some(path.as_path())), Some(path));
    }

    #[test]
    fn given_overflowing_expression_when_evaluating_then_exits_with_data_error() {
        let err = cmd_eval("9223372036854775807 + 1").unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn given_existing_target_when_writing_template_without_force_then_refuses() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("patterns.toml");
        fs::write(&target, "theme = \"macos\"\n").unwrap();

        let result = write_template(&target, false);

        assert!(matches!(result, Err(CliError::InvalidArgs(_))));
        assert_eq!(fs::read_to_string(&target).unwrap(), "theme = \"macos\"\n");
    }

    #[test]
    fn given_missing_parent_when_writing_template_then_creates_it() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested/dir/patterns.toml");

        write_template(&target, false).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), Settings::template());
    }
}
