//! Command line arguments for the `tui-sort` binary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::GameConfig;

pub const USAGE: &str = "\
usage: tui-sort [options]

options:
  --catalog <file.json>   load categories and items from a JSON catalog
  --assets <dir>          scan an asset directory (<dir>/bins/<category>.*, <dir>/<category>/<item>.*)
  --seed <n>              shuffle seed (default: from the clock)
  --rounds <n>            number of rounds
  --per-round <n>         items per round
  -h, --help              show this help

environment:
  TUI_SORT_ROUNDS, TUI_SORT_ITEMS_PER_ROUND, TUI_SORT_SEED   config defaults
  TUI_SORT_LOG      log filter (default: info)
  TUI_SORT_LOG_DIR  log directory (default: system temp dir)
";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub catalog: Option<PathBuf>,
    pub assets: Option<PathBuf>,
    pub seed: Option<u32>,
    pub rounds: Option<u32>,
    pub per_round: Option<usize>,
}

impl CliArgs {
    /// Layer command line values over `config`.
    ///
    /// Without an explicit seed (flag or environment) every run gets a fresh one.
    pub fn apply(&self, mut config: GameConfig, env_seed: bool) -> GameConfig {
        if let Some(rounds) = self.rounds {
            config.total_rounds = rounds;
        }
        if let Some(n) = self.per_round {
            config.items_per_round = n;
        }
        match self.seed {
            Some(seed) => config.seed = seed,
            None if !env_seed => config.seed = clock_seed(),
            None => {}
        }
        config
    }
}

/// Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String]) -> Result<Option<CliArgs>> {
    let mut out = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => return Ok(None),
            "--catalog" => out.catalog = Some(PathBuf::from(value(args, i, flag)?)),
            "--assets" => out.assets = Some(PathBuf::from(value(args, i, flag)?)),
            "--seed" => out.seed = Some(number(args, i, flag)?),
            "--rounds" => out.rounds = Some(number(args, i, flag)?),
            "--per-round" => out.per_round = Some(number(args, i, flag)?),
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 2;
    }

    if out.catalog.is_some() && out.assets.is_some() {
        return Err(anyhow!("--catalog and --assets are mutually exclusive"));
    }
    Ok(Some(out))
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let v = value(args, i, flag)?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(GameConfig::DEFAULT_SEED)
}
