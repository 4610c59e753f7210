//! Ouvrants conditionnels : `if <cond>` et `while <cond>`.
//!
//! En SL, `=` veut dire « affecter » en position d'instruction et « comparer »
//! dans une condition. Ici chaque `=` nu devient `==` ; les opérateurs
//! `<=`, `>=`, `!=` et `==` existants ne bougent pas.

use crate::block::BlockTag;
use crate::diagnostics::SyntaxErrorKind;
use crate::state::TranslationState;

/// `if a = 1` → `if (a==1) {`
pub fn conditional(state: &mut TranslationState, line: &str) -> Result<Vec<String>, SyntaxErrorKind> {
    let split = line
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(line.len());
    let (keyword, cond) = line.split_at(split);
    let cond = cond.trim();
    if cond.is_empty() {
        return Err(SyntaxErrorKind::BadCondition(keyword.to_string()));
    }
    state.blocks.push(BlockTag::Conditional);
    Ok(vec![format!("{keyword} ({}) {{", rewrite_condition(cond))])
}

/// Réécrit les `=` nus en `==`, blancs autour de l'opérateur retirés.
pub fn rewrite_condition(cond: &str) -> String {
    let chars: Vec<char> = cond.chars().collect();
    let mut out = String::with_capacity(cond.len() + 4);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '=' && is_bare_assign(&chars, i) {
            let kept = out.trim_end().len();
            out.truncate(kept);
            out.push_str("==");
            i += 1;
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            continue;
        }
        out.push(c);
        i += 1;
    }
    out
}

fn is_bare_assign(chars: &[char], i: usize) -> bool {
    let prev = i.checked_sub(1).map(|p| chars[p]);
    let next = chars.get(i + 1).copied();
    !matches!(prev, Some('<' | '>' | '!' | '=')) && next != Some('=')
}
