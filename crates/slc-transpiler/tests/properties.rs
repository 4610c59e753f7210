//! tests/properties.rs — propriétés sur des programmes SL générés.

use proptest::prelude::*;
use slc_transpiler::translate::cond::rewrite_condition;
use slc_transpiler::Transpiler;

/// Instruction simple (jamais un ouvrant ni un fermant).
fn simple_stmt() -> impl Strategy<Value = String> {
    prop_oneof![
        "v[a-z]{0,3} = [0-9]{1,3}",
        "var (byte|word) v[a-z]{0,3}",
        Just("putc(1)".to_string()),
    ]
}

/// Corps de fonction : instructions et conditionnelles imbriquées.
fn body(depth: u32) -> BoxedStrategy<Vec<String>> {
    let leaf = prop::collection::vec(simple_stmt(), 0..4).boxed();
    if depth == 0 {
        return leaf;
    }
    let nested = (
        prop_oneof![Just("if"), Just("while")],
        "v[a-z]{0,2} (=|<|<=|>=|!=) [0-9]{1,2}",
        body(depth - 1),
        prop::option::of(body(depth - 1)),
    )
        .prop_map(|(kw, cond, inner, alt)| {
            let mut v = vec![format!("{kw} {cond}")];
            v.extend(inner);
            if kw == "if" {
                if let Some(alt) = alt {
                    v.push("else".into());
                    v.extend(alt);
                }
            }
            v.push("end".into());
            v
        });
    prop::collection::vec(prop_oneof![leaf, nested.boxed()], 0..4)
        .prop_map(|parts| parts.into_iter().flatten().collect())
        .boxed()
}

fn program() -> impl Strategy<Value = (String, bool)> {
    (body(2), any::<bool>()).prop_map(|(stmts, explicit_return)| {
        let mut src = String::from("fun f(word a, Cell c)\n");
        for s in &stmts {
            src.push_str(s);
            src.push('\n');
        }
        if explicit_return {
            src.push_str("return a\n");
        }
        src.push_str("end\n");
        (src, explicit_return)
    })
}

proptest! {
    #[test]
    fn braces_balance_and_indent_returns_to_zero((src, _) in program()) {
        let out = Transpiler::default().translate_str(&src).unwrap();
        let opens = out.text.matches('{').count();
        let closes = out.text.matches('}').count();
        prop_assert_eq!(opens, closes);
        let last = out.text.lines().last().unwrap();
        prop_assert_eq!(last, "}");
        prop_assert!(out.line_map.is_order_preserving());
    }

    #[test]
    fn synthetic_return_iff_missing((src, explicit) in program()) {
        let out = Transpiler::default().translate_str(&src).unwrap();
        let lines: Vec<&str> = out.text.lines().collect();
        let before_close = lines[lines.len() - 2];
        if explicit {
            prop_assert_eq!(before_close, "  return a;");
        } else {
            prop_assert_eq!(before_close, "  return 0;");
        }
    }

    #[test]
    fn every_bare_equal_becomes_comparison(cond in "[a-z ]{0,3}(=|==|<=|>=|!=|<|>)[ ]{0,2}[a-z0-9]{1,3}") {
        let out = rewrite_condition(&cond);
        let chars: Vec<char> = out.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if *c == '=' {
                let prev = i.checked_sub(1).map(|p| chars[p]);
                let next = chars.get(i + 1).copied();
                prop_assert!(
                    matches!(prev, Some('<' | '>' | '!' | '=')) || next == Some('='),
                    "`=` nu restant dans {:?} (depuis {:?})", out, cond
                );
            }
        }
        for op in ["<=", ">=", "!="] {
            prop_assert_eq!(cond.matches(op).count(), out.matches(op).count());
        }
    }
}
