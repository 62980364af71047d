// src/cli.rs
//! `panel-cli`: list, scrape, analyze and inspect cached previews without the GUI.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::{
    config::{
        consts::CLI_LIMIT_DEFAULT,
        options::{AppOptions, ScrapeLimits},
    },
    data::{ListTab, match_view},
    progress::LogProgress,
    scrape, store,
};

#[derive(Parser)]
#[command(name = "panel-cli")]
#[command(about = "Match lists, light scrape and live h2h analysis", long_about = None)]
struct Cli {
    /// Directory data.json and the preview cache are resolved against
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the match list
    List {
        /// upcoming | finished | all
        #[arg(long, default_value = "upcoming")]
        tab: ListTab,
        /// Case-insensitive team filter
        #[arg(long, default_value = "")]
        search: String,
        /// Explicit data.json instead of the usual candidates
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Light scrape of both lists into a data.json
    Scrape {
        /// Output file (default: first data.json candidate)
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = CLI_LIMIT_DEFAULT)]
        upcoming: usize,
        #[arg(long, default_value_t = CLI_LIMIT_DEFAULT)]
        finished: usize,
    },
    /// Live analysis of one match (needs a headless browser)
    Analyze {
        id: String,
        /// Where to write <id>.json (default: the preview cache)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the cached analysis JSON for a match
    Preview { id: String },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(if cli.verbose { "debug" } else { "info" });

    let mut opts = AppOptions::from_env();
    if let Some(root) = cli.root {
        opts.data.root = root;
    }

    match cli.command {
        Command::List { tab, search, data } => list(&opts, tab, &search, data),
        Command::Scrape { out, upcoming, finished } => {
            scrape_lists(&opts, out, ScrapeLimits { upcoming, finished })
        }
        Command::Analyze { id, out_dir } => analyze(opts, &id, out_dir),
        Command::Preview { id } => preview(&opts, &id),
    }
}

fn list(opts: &AppOptions, tab: ListTab, search: &str, data: Option<PathBuf>) -> Result<()> {
    let (ds, source) = match data {
        Some(path) => {
            let ds = store::read_dataset(&path)?;
            (ds, store::DataSource::Local(path))
        }
        None => store::load_dataset(&opts.data, None)?,
    };
    let view = match_view(&ds, tab, search);
    eprintln!("{source} · {} · {} matches", tab.label(), view.len());
    for m in view {
        println!(
            "{}\t{}\t{} vs {}\tAH {}\tO/U {}\t{}",
            m.id,
            m.time,
            m.home_team,
            m.away_team,
            m.handicap,
            m.goal_line,
            m.score.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

fn scrape_lists(opts: &AppOptions, out: Option<PathBuf>, limits: ScrapeLimits) -> Result<()> {
    let mut prog = LogProgress;
    let ds = scrape::collect_matches(opts, limits, Some(&mut prog))?;
    let path = out
        .or_else(|| opts.data.dataset_paths().next())
        .ok_or_else(|| eyre!("no output path"))?;
    store::save_dataset(&path, &ds)?;
    let (u, f) = ds.counts();
    println!("{}: {u} upcoming, {f} finished", path.display());
    Ok(())
}

fn analyze(mut opts: AppOptions, id: &str, out_dir: Option<PathBuf>) -> Result<()> {
    if let Some(dir) = out_dir {
        opts.data.preview_dirs = vec![dir];
    }
    let preview = scrape::analyze_match(&opts, id).wrap_err_with(|| format!("analysis of {id}"))?;
    println!("{}", serde_json::to_string_pretty(&preview.raw_json())?);
    Ok(())
}

fn preview(opts: &AppOptions, id: &str) -> Result<()> {
    let p = store::load_cached_preview(&opts.data, id)
        .ok_or_else(|| eyre!("no cached analysis for match {id}"))?;
    println!("{}", serde_json::to_string_pretty(&p.raw_json())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_parse() {
        Cli::command().debug_assert();

        let cli = Cli::try_parse_from(["panel-cli", "list", "--tab", "finished", "--search", "real"]).unwrap();
        match cli.command {
            Command::List { tab, search, data } => {
                assert_eq!(tab, ListTab::Finished);
                assert_eq!(search, "real");
                assert!(data.is_none());
            }
            _ => panic!("expected list"),
        }

        let cli = Cli::try_parse_from(["panel-cli", "scrape", "--upcoming", "5"]).unwrap();
        assert!(matches!(cli.command, Command::Scrape { upcoming: 5, finished: CLI_LIMIT_DEFAULT, .. }));

        assert!(Cli::try_parse_from(["panel-cli", "list", "--tab", "live"]).is_err());
    }
}
