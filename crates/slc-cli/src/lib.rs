//! slc-cli/src/lib.rs — CLI lib pour le transpileur SL → C
//!
//! Sous-commandes :
//!   - translate : traduit un ou plusieurs `.sl` (ou stdin → stdout)
//!   - check     : vérifie sans rien écrire
//!   - build     : découvre les `.sl` d'une arborescence et les traduit tous
//!
//! Configuration : defaults → `slc.toml` → ENV `SLC_*` → flags CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use log::{debug, LevelFilter};
use slc_transpiler::{CliOverrides, TranspileConfig, Transpiler};

pub mod commands;

/// Manifest lu par défaut s'il existe dans le répertoire courant.
pub const DEFAULT_MANIFEST: &str = "slc.toml";

#[derive(Parser, Debug)]
#[command(name = "slc", version, about = "Transpileur SL → C-like", long_about = None)]
pub struct Cli {
    /// Verbosité (répéter pour plus de bruit : -v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Fichier de configuration (défaut : ./slc.toml s'il existe)
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// En-tête runtime inclus en tête de sortie (équiv. SLC_RUNTIME_HEADER)
    #[arg(long, global = true)]
    pub runtime_header: Option<String>,

    /// Point d'entrée retournant `int` (équiv. SLC_ENTRY_POINT)
    #[arg(long, global = true)]
    pub entry_point: Option<String>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Traduire des fichiers `.sl` en `.c`
    Translate(commands::translate::Args),
    /// Vérifier la syntaxe sans produire de sortie
    Check(commands::check::Args),
    /// Traduire tous les `.sl` d'une arborescence
    Build(commands::build::Args),
}

/// Niveau de log correspondant au nombre de `-v`.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise `env_logger` ; `RUST_LOG` garde le dernier mot.
pub fn init_logging(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Construit la configuration effective (ENV du processus).
pub fn load_config(cli: &Cli) -> Result<TranspileConfig> {
    load_config_with(cli, |k| std::env::var(k).ok())
}

/// Variante à ENV injectable de [`load_config`].
pub fn load_config_with(cli: &Cli, read_env: impl Fn(&str) -> Option<String>) -> Result<TranspileConfig> {
    let mut cfg = match &cli.config {
        Some(path) => TranspileConfig::load(path).wrap_err_with(|| format!("configuration {path}"))?,
        None if Utf8Path::new(DEFAULT_MANIFEST).is_file() => {
            TranspileConfig::load(Utf8Path::new(DEFAULT_MANIFEST))
                .wrap_err_with(|| format!("configuration {DEFAULT_MANIFEST}"))?
        }
        None => TranspileConfig::default(),
    };
    cfg.apply_env_with(read_env);
    cfg.apply_cli_overrides(&CliOverrides {
        runtime_header: cli.runtime_header.clone(),
        entry_point: cli.entry_point.clone(),
    });
    cfg.validate()?;
    debug!("configuration: {cfg:?}");
    Ok(cfg)
}

/// Point d'entrée du binaire (à appeler depuis src/main.rs)
pub fn run(cli: Cli) -> Result<()> {
    let transpiler = Transpiler::new(load_config(&cli)?);
    match cli.cmd {
        Cmd::Translate(a) => commands::translate::exec(a, &transpiler).map(|_| ()),
        Cmd::Check(a) => commands::check::exec(&a, &transpiler),
        Cmd::Build(a) => commands::build::exec(a, &transpiler).map(|_| ()),
    }
}
