//! Fermants : `end`, `]`, et la bascule `else`.

use crate::block::BlockTag;
use crate::diagnostics::SyntaxErrorKind;
use crate::state::TranslationState;

/// Instruction injectée quand une fonction se termine sans `return`.
pub const SYNTHETIC_RETURN: &str = "return 0;";

/// `end` : dépile et rend le fermant adapté au bloc.
pub fn end(state: &mut TranslationState) -> Result<Vec<String>, SyntaxErrorKind> {
    let tag = state.blocks.pop().ok_or(SyntaxErrorKind::UnmatchedCloser("end"))?;
    let lines = match tag {
        BlockTag::Function if state.previous_returns() => vec!["}"],
        BlockTag::Function => vec![SYNTHETIC_RETURN, "}"],
        BlockTag::Conditional => vec!["}"],
        BlockTag::Struct => vec!["};"],
        BlockTag::Array => {
            return Err(SyntaxErrorKind::MismatchedCloser { closer: "end", found: tag });
        }
    };
    Ok(lines.into_iter().map(String::from).collect())
}

/// `]` : ferme une liste d'initialisation de tableau.
pub fn array_end(state: &mut TranslationState) -> Result<Vec<String>, SyntaxErrorKind> {
    match state.blocks.pop() {
        Some(BlockTag::Array) => Ok(vec!["};".to_string()]),
        Some(found) => Err(SyntaxErrorKind::MismatchedCloser { closer: "]", found }),
        None => Err(SyntaxErrorKind::UnmatchedCloser("]")),
    }
}

/// `else` : referme la branche courante et en rouvre une, pile intacte.
pub fn else_branch(state: &TranslationState) -> Result<Vec<String>, SyntaxErrorKind> {
    match state.innermost() {
        Some(BlockTag::Conditional) => Ok(vec!["} else {".to_string()]),
        _ => Err(SyntaxErrorKind::ElseOutsideConditional),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(tags: &[BlockTag], previous: &str) -> TranslationState {
        let mut s = TranslationState::new();
        for t in tags {
            s.blocks.push(*t);
        }
        s.remember(previous);
        s
    }

    #[test]
    fn function_without_return_gets_one() {
        let mut s = with(&[BlockTag::Function], "x = 1");
        assert_eq!(end(&mut s).unwrap(), ["return 0;", "}"]);
        assert!(s.blocks.is_empty());
    }

    #[test]
    fn function_with_return_is_closed_plainly() {
        let mut s = with(&[BlockTag::Function], "return a");
        assert_eq!(end(&mut s).unwrap(), ["}"]);
    }

    #[test]
    fn cond_and_struct_closers() {
        let mut s = with(&[BlockTag::Struct, BlockTag::Conditional], "x = 1");
        assert_eq!(end(&mut s).unwrap(), ["}"]);
        assert_eq!(end(&mut s).unwrap(), ["};"]);
    }

    #[test]
    fn stray_end() {
        let mut s = TranslationState::new();
        assert_eq!(end(&mut s), Err(SyntaxErrorKind::UnmatchedCloser("end")));
    }

    #[test]
    fn end_cannot_close_array() {
        let mut s = with(&[BlockTag::Array], "1, 2");
        assert_eq!(
            end(&mut s),
            Err(SyntaxErrorKind::MismatchedCloser { closer: "end", found: BlockTag::Array })
        );
    }

    #[test]
    fn bracket_closes_array_only() {
        let mut s = with(&[BlockTag::Array], "1, 2");
        assert_eq!(array_end(&mut s).unwrap(), ["};"]);
        assert_eq!(array_end(&mut s), Err(SyntaxErrorKind::UnmatchedCloser("]")));

        let mut s = with(&[BlockTag::Function], "");
        assert_eq!(
            array_end(&mut s),
            Err(SyntaxErrorKind::MismatchedCloser { closer: "]", found: BlockTag::Function })
        );
    }

    #[test]
    fn else_needs_open_conditional() {
        let s = with(&[BlockTag::Function, BlockTag::Conditional], "x = 1");
        assert_eq!(else_branch(&s).unwrap(), ["} else {"]);
        assert_eq!(s.blocks.depth(), 2);

        let s = with(&[BlockTag::Function], "x = 1");
        assert_eq!(else_branch(&s), Err(SyntaxErrorKind::ElseOutsideConditional));
    }
}
