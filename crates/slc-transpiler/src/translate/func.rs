//! Fonctions : `fun nom(params)` et `extern fun nom(params)`.
//!
//! Paramètres primitifs passés par valeur, tout le reste par référence.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::BlockTag;
use crate::config::TranspileConfig;
use crate::diagnostics::SyntaxErrorKind;
use crate::state::TranslationState;

use super::{is_primitive, ENTRY_RETURN_TYPE, WORD_TYPE};

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^fun\s+(\w+)\s*\((.*)\)$").expect("regex en-tête de fonction"));

/// Traduit un en-tête de fonction. `external` : déclaration seule (`;`, pas de bloc).
pub fn function(
    state: &mut TranslationState,
    cfg: &TranspileConfig,
    header: &str,
    external: bool,
) -> Result<Vec<String>, SyntaxErrorKind> {
    let caps = HEADER.captures(header).ok_or(SyntaxErrorKind::BadFunction)?;
    let name = &caps[1];
    let params = params(&caps[2])?;
    let ret = if name == cfg.entry_point { ENTRY_RETURN_TYPE } else { WORD_TYPE };

    let signature = format!("{ret} {name}({params})");
    if external {
        return Ok(vec![format!("{signature};")]);
    }
    state.blocks.push(BlockTag::Function);
    Ok(vec![format!("{signature} {{")])
}

/// `word a, Cell c` → `word a,Cell& c`
pub fn params(list: &str) -> Result<String, SyntaxErrorKind> {
    let list = list.trim();
    if list.is_empty() {
        return Ok(String::new());
    }
    let mut out = Vec::new();
    for param in list.split(',') {
        match *param.split_whitespace().collect::<Vec<_>>() {
            [ty, name] if is_primitive(ty) => out.push(format!("{ty} {name}")),
            [ty, name] => out.push(format!("{ty}& {name}")),
            _ => return Err(SyntaxErrorKind::BadParam(param.trim().to_string())),
        }
    }
    Ok(out.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(header: &str, external: bool) -> (Result<Vec<String>, SyntaxErrorKind>, TranslationState) {
        let mut s = TranslationState::new();
        let r = function(&mut s, &TranspileConfig::default(), header, external);
        (r, s)
    }

    #[test]
    fn definition_pushes_function() {
        let (r, s) = run("fun add(word a, word b)", false);
        assert_eq!(r.unwrap(), ["word add(word a,word b) {"]);
        assert_eq!(s.blocks.top(), Some(BlockTag::Function));
    }

    #[test]
    fn entry_point_returns_int() {
        let (r, _) = run("fun main()", false);
        assert_eq!(r.unwrap(), ["int main() {"]);

        let mut cfg = TranspileConfig::default();
        cfg.entry_point = "start".into();
        let mut s = TranslationState::new();
        assert_eq!(function(&mut s, &cfg, "fun start()", false).unwrap(), ["int start() {"]);
        assert_eq!(function(&mut s, &cfg, "fun main()", false).unwrap(), ["word main() {"]);
    }

    #[test]
    fn non_primitive_by_reference() {
        let (r, _) = run("fun area(Cell c, byte k)", false);
        assert_eq!(r.unwrap(), ["word area(Cell& c,byte k) {"]);
    }

    #[test]
    fn extern_has_no_body() {
        let (r, s) = run("fun putc(byte c)", true);
        assert_eq!(r.unwrap(), ["word putc(byte c);"]);
        assert!(s.blocks.is_empty());
    }

    #[test]
    fn malformed_headers() {
        assert_eq!(run("fun (word a)", false).0, Err(SyntaxErrorKind::BadFunction));
        assert_eq!(run("fun f(word a", false).0, Err(SyntaxErrorKind::BadFunction));
        assert_eq!(run("fun f() extra", false).0, Err(SyntaxErrorKind::BadFunction));
        assert_eq!(run("fun f(word)", false).0, Err(SyntaxErrorKind::BadParam("word".into())));
        assert_eq!(run("fun f(word a,,word b)", false).0, Err(SyntaxErrorKind::BadParam(String::new())));
    }

    #[test]
    fn failed_header_leaves_stack_alone() {
        let (_, s) = run("fun f(word a b)", false);
        assert!(s.blocks.is_empty());
    }
}
