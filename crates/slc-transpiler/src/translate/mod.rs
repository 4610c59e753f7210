//! translate — Classification d'une ligne normalisée + règles de réécriture.
//!
//! La classification est purement par préfixe, dans un ordre fixe (la
//! première forme reconnue gagne) :
//!
//! | ligne                 | règle                          |
//! |-----------------------|--------------------------------|
//! | `else`                | [`close::else_branch`]         |
//! | `var …`               | [`decl::variable`]             |
//! | `const …`             | [`decl::constant`]             |
//! | `struct …`            | [`decl::structure`]            |
//! | `end`                 | [`close::end`]                 |
//! | `]`                   | [`close::array_end`]           |
//! | `extern …`            | [`func::function`] (sans corps)|
//! | `fun …`               | [`func::function`]             |
//! | `while …` / `if …`    | [`cond::conditional`]          |
//! | autre                 | [`literal::statement`]         |
//!
//! Aucune table de symboles : tout est réécrit syntaxiquement.

pub mod close;
pub mod cond;
pub mod decl;
pub mod func;
pub mod literal;

use log::debug;

use crate::config::TranspileConfig;
use crate::diagnostics::SyntaxErrorKind;
use crate::state::TranslationState;

/// Types scalaires passés par valeur.
pub const PRIMITIVES: &[&str] = &["byte", "word"];

/// Type « mot » : retour par défaut des fonctions et des constantes.
pub const WORD_TYPE: &str = "word";

/// Type de retour du point d'entrée.
pub const ENTRY_RETURN_TYPE: &str = "int";

pub fn is_primitive(ty: &str) -> bool { PRIMITIVES.contains(&ty) }

/// Forme reconnue d'une ligne, avant réécriture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    Else,
    /// Reste après `var`.
    Var(&'a str),
    /// Reste après `const`.
    Const(&'a str),
    Struct,
    End,
    ArrayEnd,
    /// Reste après `extern` (un en-tête `fun …`).
    Extern(&'a str),
    Function,
    Conditional,
    Other,
}

/// Classe une ligne normalisée (non vide, sans blancs autour).
pub fn classify(line: &str) -> Statement<'_> {
    if line == "else" {
        return Statement::Else;
    }
    if let Some(rest) = line.strip_prefix("var ") {
        return Statement::Var(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("const ") {
        return Statement::Const(rest.trim());
    }
    if line.starts_with("struct ") {
        return Statement::Struct;
    }
    if line == "end" {
        return Statement::End;
    }
    if line == "]" {
        return Statement::ArrayEnd;
    }
    if line == "extern" {
        return Statement::Extern("");
    }
    if let Some(rest) = keyword_rest(line, "extern") {
        return Statement::Extern(rest.trim());
    }
    if line.starts_with("fun ") {
        return Statement::Function;
    }
    if keyword_rest(line, "while").is_some() || keyword_rest(line, "if").is_some() {
        return Statement::Conditional;
    }
    Statement::Other
}

/// `Some(reste)` si `line` commence par le mot-clé `kw` suivi d'un blanc ou de `(`.
fn keyword_rest<'a>(line: &'a str, kw: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(kw)?;
    match rest.chars().next() {
        Some(c) if c.is_whitespace() || c == '(' => Some(rest),
        _ => None,
    }
}

/// Traduit une ligne normalisée en zéro, une ou plusieurs lignes cibles.
///
/// La pile de blocs de `state` est consultée et modifiée ; la mémorisation de
/// la ligne précédente reste à la charge de l'appelant.
pub fn translate_line(
    state: &mut TranslationState,
    cfg: &TranspileConfig,
    line: &str,
) -> Result<Vec<String>, SyntaxErrorKind> {
    let stmt = classify(line);
    debug!("ligne {}: {:?} <- {line:?}", state.line(), stmt);
    match stmt {
        Statement::Else => close::else_branch(state),
        Statement::Var(rest) => decl::variable(state, rest),
        Statement::Const(rest) => decl::constant(rest),
        Statement::Struct => Ok(decl::structure(state, line)),
        Statement::End => close::end(state),
        Statement::ArrayEnd => close::array_end(state),
        Statement::Extern(header) => func::function(state, cfg, header, true),
        Statement::Function => func::function(state, cfg, line, false),
        Statement::Conditional => cond::conditional(state, line),
        Statement::Other => Ok(vec![literal::statement(state, line)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_prefix() {
        assert_eq!(classify("else"), Statement::Else);
        assert_eq!(classify("var word x"), Statement::Var("word x"));
        assert_eq!(classify("const LIMIT 10"), Statement::Const("LIMIT 10"));
        assert_eq!(classify("struct Cell"), Statement::Struct);
        assert_eq!(classify("end"), Statement::End);
        assert_eq!(classify("]"), Statement::ArrayEnd);
        assert_eq!(classify("extern fun putc(byte c)"), Statement::Extern("fun putc(byte c)"));
        assert_eq!(classify("extern"), Statement::Extern(""));
        assert_eq!(classify("fun main()"), Statement::Function);
        assert_eq!(classify("while a < 8"), Statement::Conditional);
        assert_eq!(classify("if a = 1"), Statement::Conditional);
        assert_eq!(classify("if(a)"), Statement::Conditional);
        assert_eq!(classify("a = a + 1"), Statement::Other);
    }

    #[test]
    fn keywords_need_a_boundary() {
        assert_eq!(classify("iface = 2"), Statement::Other);
        assert_eq!(classify("whiled = 0"), Statement::Other);
        assert_eq!(classify("external = 1"), Statement::Other);
        assert_eq!(classify("variable = 1"), Statement::Other);
        assert_eq!(classify("ending = 1"), Statement::Other);
        assert_eq!(classify("elsewhere = 1"), Statement::Other);
    }

    #[test]
    fn primitives() {
        assert!(is_primitive("byte"));
        assert!(is_primitive("word"));
        assert!(!is_primitive("Cell"));
    }
}
