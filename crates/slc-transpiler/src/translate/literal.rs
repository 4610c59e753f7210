//! Instructions ordinaires et lignes de liste littérale.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::BlockTag;
use crate::state::TranslationState;

/// Suite d'entiers séparés par des virgules en début de ligne (`1, 2, 3,`).
static LITERAL_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*\d+,?)+").expect("regex liste littérale"));

pub fn is_literal_list(line: &str) -> bool {
    LITERAL_LIST.is_match(line)
}

/// Ligne de repli : terminée par `;`, sauf contenu d'un initialiseur de tableau.
pub fn statement(state: &TranslationState, line: &str) -> String {
    if state.innermost() == Some(BlockTag::Array) || is_literal_list(line) || line.ends_with(';') {
        line.to_string()
    } else {
        format!("{line};")
    }
}
