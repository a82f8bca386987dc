//! foldtree CLI - interactive collapsible tree viewer
//!
//! Usage: find . | foldtree [OPTIONS]
//!        foldtree [OPTIONS] <FILE>

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use foldtree::commands::CommandBindings;
use foldtree::config::Config;
use foldtree::lines::{open_input, read_lines, sort_lines};
use foldtree::logging;
use foldtree::tree::PathArena;
use foldtree::ui::{self, output::print_config_warnings, App, Glyphs, Settings};

/// foldtree - browse path lists as a collapsible tree
#[derive(Parser, Debug)]
#[command(name = "foldtree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read paths from FILE instead of standard input
    file: Option<PathBuf>,

    /// Start with every node folded
    #[arg(short, long)]
    folded: bool,

    /// Path separator
    #[arg(short, long, value_name = "CHAR")]
    separator: Option<char>,

    /// Config file (default: $XDG_CONFIG_HOME/foldtree/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a diagnostic log to PATH (also: FOLDTREE_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("foldtree: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = logging::log_file_path(cli.log_file.clone(), |k| std::env::var(k).ok()) {
        logging::init_file_logging(&path, cli.verbose)
            .with_context(|| format!("failed to open log file '{}'", path.display()))?;
    }

    let (mut config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    print_config_warnings(&mut io::stderr(), &warnings)?;

    // CLI flags override config and environment
    if let Some(separator) = cli.separator {
        config.tree.separator = separator.to_string();
    }
    if cli.folded {
        config.tree.folded = true;
    }
    config.validate()?;

    let input = open_input(cli.file.as_deref())?;
    let mut lines = read_lines(input).context("failed to read input")?;
    sort_lines(&mut lines, config.separator());

    let caps = ui::detect_capabilities();
    if !caps.is_tty {
        bail!("standard output is not a terminal");
    }

    let (arena, view) = PathArena::build(&lines, config.separator(), config.initial_state());
    tracing::info!(
        lines = lines.len(),
        nodes = arena.len(),
        "input loaded"
    );
    drop(lines);

    let settings = Settings {
        indent: config.ui.indent,
        glyphs: Glyphs::select(config.ui.glyphs, &caps),
        scroll_step: config.ui.scroll_step,
        bindings: CommandBindings::from_config(&config.commands),
    };

    let mut app = App::new(arena, view, settings, (caps.width, caps.height));
    ui::run(&mut app).context("terminal interface failed")?;
    Ok(())
}
