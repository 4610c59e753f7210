//! Déclarations : `var`, `var array`, `const`, `struct`.

use crate::block::BlockTag;
use crate::diagnostics::SyntaxErrorKind;
use crate::state::TranslationState;

use super::{is_primitive, WORD_TYPE};

/// `var <type> <nom>` → `<type> <nom>;` ; `var array …` → [`array`].
pub fn variable(state: &mut TranslationState, rest: &str) -> Result<Vec<String>, SyntaxErrorKind> {
    let rest = strip_terminator(rest);
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    match tokens.split_first() {
        None => Err(SyntaxErrorKind::BadVar),
        Some((&"array", shape)) => array(state, shape).map(|l| vec![l]),
        Some(_) => Ok(vec![format!("{};", tokens.join(" "))]),
    }
}

/// Jetons après `array` :
/// - `<taille> <type> <nom>` → tableau fixe
/// - `<taille> <type> <nom> = [` → tableau initialisé, ouvre un bloc `Array`
/// - `<type> <nom>` → pointeur
pub fn array(state: &mut TranslationState, tokens: &[&str]) -> Result<String, SyntaxErrorKind> {
    match *tokens {
        [size, ty, name] => Ok(format!("{ty} {name}[{size}];")),
        [size, ty, name, "=", "["] | [size, ty, name, "=["] => {
            state.blocks.push(BlockTag::Array);
            Ok(format!("{ty} {name}[{size}] = {{"))
        }
        [ty, name] => Ok(format!("{ty}* {name};")),
        _ => Err(SyntaxErrorKind::BadArray { tokens: tokens.len() }),
    }
}

/// `const [type] NOM VALEUR…` → `constexpr <type> NOM = VALEUR…;`
pub fn constant(rest: &str) -> Result<Vec<String>, SyntaxErrorKind> {
    let tokens: Vec<&str> = strip_terminator(rest).split_whitespace().collect();
    let (ty, name, value) = match tokens.as_slice() {
        [ty, name, value @ ..] if is_primitive(ty) && !value.is_empty() => (*ty, *name, value),
        [ty, _] if is_primitive(ty) => return Err(SyntaxErrorKind::BadConst),
        [name, value @ ..] if !value.is_empty() => (WORD_TYPE, *name, value),
        _ => return Err(SyntaxErrorKind::BadConst),
    };
    Ok(vec![format!("constexpr {ty} {name} = {};", value.join(" "))])
}

/// `struct Nom` → `struct Nom {` ; les membres suivent comme instructions.
pub fn structure(state: &mut TranslationState, line: &str) -> Vec<String> {
    state.blocks.push(BlockTag::Struct);
    vec![format!("{line} {{")]
}

fn strip_terminator(s: &str) -> &str {
    s.trim().trim_end_matches(';').trim_end()
}
