//! diagnostics.rs — Erreurs structurées de la traduction.
//!
//! Politique fail-fast : la première [`SyntaxError`] arrête la passe. Il n'y a
//! pas de niveau « warning » pour la traduction.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::block::BlockTag;

/// Forme fautive détectée par une règle de réécriture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("déclaration de variable vide")]
    BadVar,

    #[error("déclaration de tableau invalide ({tokens} jeton(s) après `array`)")]
    BadArray { tokens: usize },

    #[error("constante invalide, attendu `const [type] NOM VALEUR`")]
    BadConst,

    #[error("en-tête de fonction invalide, attendu `fun nom(type a, type b)`")]
    BadFunction,

    #[error("paramètre invalide `{0}`, attendu `type nom`")]
    BadParam(String),

    #[error("condition vide après `{0}`")]
    BadCondition(String),

    #[error("`{0}` sans bloc ouvert")]
    UnmatchedCloser(&'static str),

    #[error("`{closer}` ne peut pas fermer un bloc {found}")]
    MismatchedCloser { closer: &'static str, found: BlockTag },

    #[error("`else` hors d'un bloc conditionnel")]
    ElseOutsideConditional,

    #[error("bloc {0} non fermé en fin de fichier")]
    UnclosedBlock(BlockTag),

    #[error("ligne non UTF-8")]
    InvalidUtf8,
}

/// Erreur de syntaxe rattachée à sa ligne source (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("erreur de syntaxe ligne {line}: {kind}")]
pub struct SyntaxError {
    pub line: usize,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(line: usize, kind: SyntaxErrorKind) -> Self { Self { line, kind } }
}

/// Erreur d'une passe complète (lecture, traduction, écriture).
#[derive(Debug, Error)]
pub enum TranspileError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("io: {0}")]
    Io(#[from] io::Error),
}

impl TranspileError {
    /// Ligne fautive si l'erreur vient de la source.
    pub fn line(&self) -> Option<usize> {
        match self {
            TranspileError::Syntax(e) => Some(e.line),
            TranspileError::Io(_) => None,
        }
    }
}

/// Diagnostic prêt à afficher : `fichier:ligne: message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: Option<String>,
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn from_syntax(file: Option<&str>, err: &SyntaxError) -> Self {
        Self { file: file.map(str::to_string), line: err.line, message: err.kind.to_string() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{file}:{}: erreur de syntaxe: {}", self.line, self.message),
            None => write!(f, "ligne {}: erreur de syntaxe: {}", self.line, self.message),
        }
    }
}
