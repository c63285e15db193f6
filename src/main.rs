//! quick-switch - Jump between related files
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;

use qswitch_app::config::init_config_dir;
use qswitch_app::{SettingsLoader, SwitchCommand, SwitchOutcome, Switcher};
use qswitch_core::{derive_keyword, logging, normalize_path};
use qswitch_tui::{install_panic_hook, TerminalWorkbench};

/// quick-switch - Jump between related files
#[derive(Parser, Debug)]
#[command(name = "qswitch", version)]
#[command(about = "Jump between related files (source/test, header/impl, ...)", long_about = None)]
struct Args {
    /// Workspace root used for config lookup and relative paths
    #[arg(long, short = 'w', global = true, value_name = "DIR")]
    workspace: Option<PathBuf>,

    /// Settings file (overrides .qswitch/config.toml)
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print chosen files to stdout instead of opening them
    #[arg(long, global = true)]
    print: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick among the related files of FILE
    Switch { file: PathBuf },
    /// Open the next related file
    Next { file: PathBuf },
    /// Open the previous related file
    Prev { file: PathBuf },
    /// Open the related file at position N (1-9) of the rule's list
    Index {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=9))]
        number: u8,
        file: PathBuf,
    },
    /// Diff FILE (left) against a related file
    CompareLeft { file: PathBuf },
    /// Diff a related file against FILE (right)
    CompareRight { file: PathBuf },
    /// List the available related files of FILE
    Candidates { file: PathBuf },
    /// Print the quick-open keyword derived from FILE
    Keyword { file: PathBuf },
    /// Serve NDJSON switch requests on stdin (headless mode)
    Session,
    /// Create .qswitch/config.toml with example rules
    Init,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let cwd = std::env::current_dir().wrap_err("Cannot read the current directory")?;
    let workspace = match &args.workspace {
        Some(dir) => dunce::canonicalize(dir)
            .wrap_err_with(|| format!("Workspace not found: {}", dir.display()))?,
        None => dunce::canonicalize(&cwd).unwrap_or_else(|_| cwd.clone()),
    };
    let loader = SettingsLoader::new(&workspace, args.config.clone());

    let (command, file) = match args.command {
        Command::Session => return Ok(quick_switch::run_headless(loader).await?),
        Command::Init => {
            let path = init_config_dir(&workspace)?;
            eprintln!("Config: {}", path.display());
            return Ok(());
        }
        Command::Candidates { file } => {
            let settings = loader.load()?;
            let workbench = TerminalWorkbench::new(&workspace, settings.editor.clone(), true);
            let switcher = Switcher::new(workbench, &workspace);
            for candidate in switcher.candidates(&settings, &normalize_path(&file, &cwd)) {
                println!("{}", candidate.display());
            }
            return Ok(());
        }
        Command::Keyword { file } => {
            let settings = loader.load()?;
            let keyword = derive_keyword(
                &normalize_path(&file, &cwd),
                settings.keyword_rule().as_ref(),
            );
            println!("{}", keyword);
            return Ok(());
        }
        Command::Switch { file } => (SwitchCommand::Switch, file),
        Command::Next { file } => (SwitchCommand::Next, file),
        Command::Prev { file } => (SwitchCommand::Previous, file),
        Command::Index { number, file } => (SwitchCommand::at_index(number as usize)?, file),
        Command::CompareLeft { file } => (SwitchCommand::CompareAsLeft, file),
        Command::CompareRight { file } => (SwitchCommand::CompareAsRight, file),
    };

    install_panic_hook();
    run_switch(&loader, &normalize_path(&file, &cwd), command, args.print).await
}

/// Run one interactive switch request.
async fn run_switch(
    loader: &SettingsLoader,
    file: &Path,
    command: SwitchCommand,
    print: bool,
) -> color_eyre::Result<()> {
    let settings = loader.load()?;
    let workbench = TerminalWorkbench::new(loader.workspace(), settings.editor.clone(), print);
    let mut switcher = Switcher::new(workbench, loader.workspace());

    match switcher.run(&settings, file, command).await? {
        SwitchOutcome::Opened { .. } | SwitchOutcome::Compared { .. } => {}
        SwitchOutcome::QuickOpen {
            keyword,
            opened: None,
        } => {
            eprintln!("No related file. Quick-open keyword: {}", keyword);
        }
        SwitchOutcome::QuickOpen { opened: Some(_), .. } => {}
        SwitchOutcome::Nothing { reason } => {
            eprintln!("Nothing to switch to ({}).", reason);
        }
    }

    Ok(())
}
