//! config.rs — Configuration du transpileur.
//!
//! Couches, de la plus faible à la plus forte :
//! - Defaults sûrs (`TranspileConfig::default()`)
//! - Fichier `slc.toml`, section `[transpile]` (`TranspileConfig::load`)
//! - ENV (préfixe `SLC_...`) via `apply_env`
//! - **Overrides CLI** via `CliOverrides` (appliqués avec `apply_cli_overrides`)
//!
//! ENV supportés (tous facultatifs) :
//!   SLC_RUNTIME_HEADER=<fichier.h>
//!   SLC_ENTRY_POINT=<identifiant>

use std::fs;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/* ─────────────────────────── Types publics ─────────────────────────── */

/// Paramétrage d'une traduction SL → C.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranspileConfig {
    /// En-tête runtime inclus en tête de chaque sortie (`#include "<...>"`).
    pub runtime_header: String,
    /// Nom de la fonction point d'entrée (retourne `int` au lieu de `word`).
    pub entry_point: String,
    /// Extension des sources SL (sans point).
    pub source_ext: String,
    /// Extension des sorties (sans point).
    pub output_ext: String,
}

impl Default for TranspileConfig {
    fn default() -> Self {
        Self {
            runtime_header: "sim.h".into(),
            entry_point: "main".into(),
            source_ext: "sl".into(),
            output_ext: "c".into(),
        }
    }
}

/// Overrides fournis par une CLI en amont — tous optionnels.
#[derive(Default, Clone, Debug)]
pub struct CliOverrides {
    pub runtime_header: Option<String>,
    pub entry_point: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("lecture de {path}: {source}")]
    Read { path: String, #[source] source: std::io::Error },

    #[error("TOML invalide: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("valeur invalide pour `{key}`: {reason}")]
    Invalid { key: &'static str, reason: &'static str },
}

/// Forme du fichier `slc.toml`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    transpile: TranspileConfig,
}

impl TranspileConfig {
    /// Lit `slc.toml` (section `[transpile]`, champs absents = defaults).
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_string(), source })?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(s)?;
        let cfg = file.transpile;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Applique les variables d'environnement `SLC_*`.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|k| std::env::var(k).ok());
    }

    /// Variante injectable (tests) de [`apply_env`](Self::apply_env).
    pub fn apply_env_with(&mut self, read: impl Fn(&str) -> Option<String>) {
        if let Some(v) = read("SLC_RUNTIME_HEADER") { if !v.trim().is_empty() { self.runtime_header = v.trim().to_string(); } }
        if let Some(v) = read("SLC_ENTRY_POINT")    { if !v.trim().is_empty() { self.entry_point = v.trim().to_string(); } }
    }

    /// Applique des overrides “dernier mot” typiquement issus d'une CLI.
    pub fn apply_cli_overrides(&mut self, o: &CliOverrides) {
        if let Some(x) = &o.runtime_header { self.runtime_header.clone_from(x); }
        if let Some(x) = &o.entry_point    { self.entry_point.clone_from(x); }
    }

    /// Validation de base.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runtime_header.is_empty() || self.runtime_header.contains(['"', '\n']) {
            return Err(ConfigError::Invalid { key: "runtime_header", reason: "nom de fichier vide ou non imprimable" });
        }
        if !is_identifier(&self.entry_point) {
            return Err(ConfigError::Invalid { key: "entry_point", reason: "doit être un identifiant" });
        }
        for (key, ext) in [("source_ext", &self.source_ext), ("output_ext", &self.output_ext)] {
            if ext.is_empty() || ext.contains(['.', '/', '\\']) {
                return Err(ConfigError::Invalid { key, reason: "extension vide ou avec séparateur" });
            }
        }
        if self.source_ext == self.output_ext {
            return Err(ConfigError::Invalid { key: "output_ext", reason: "identique à source_ext" });
        }
        Ok(())
    }

    /// Ligne d'inclusion émise en tête de sortie.
    pub fn include_line(&self) -> String {
        format!("#include \"{}\"", self.runtime_header)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/* ───────────────────────────── Tests ───────────────────────────── */
