//! emit.rs — Écriture indentée des lignes traduites.
//!
//! Règles :
//! - ligne commençant par `}` → indentation −2 *avant* écriture
//! - ligne finissant par `{` → indentation +2 *après* écriture
//!
//! L'émetteur garde aussi la correspondance ligne source → ligne sortie
//! ([`LineMap`]), consommée par les outils de listing.

use std::io::{self, Write};

use log::trace;

/// Pas d'indentation (colonnes).
pub const INDENT_STEP: usize = 2;

/// Paires `(ligne source, ligne sortie)`, 1-based, dans l'ordre d'émission.
/// L'en-tête `#include` occupe la ligne de sortie 1 et n'a pas de source.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineMap {
    entries: Vec<(usize, usize)>,
}

impl LineMap {
    pub fn record(&mut self, source: usize, output: usize) { self.entries.push((source, output)); }

    pub fn entries(&self) -> &[(usize, usize)] { &self.entries }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Ligne source d'une ligne de sortie.
    pub fn source_of(&self, output: usize) -> Option<usize> {
        self.entries
            .binary_search_by_key(&output, |&(_, o)| o)
            .ok()
            .map(|ix| self.entries[ix].0)
    }

    /// Lignes source distinctes, dans l'ordre de sortie.
    pub fn source_lines(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.entries.iter().map(|&(s, _)| s).collect();
        out.dedup();
        out
    }

    /// Vrai si les lignes source ne reculent jamais le long de la sortie.
    pub fn is_order_preserving(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].0 <= w[1].0 && w[0].1 < w[1].1)
    }

    /// Format texte : une paire `"<source> <sortie>"` par ligne.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        for (src, out) in &self.entries {
            writeln!(w, "{src} {out}")?;
        }
        w.flush()
    }
}

/// Écrit les lignes traduites avec indentation.
#[derive(Debug)]
pub struct Emitter<W: Write> {
    out: W,
    indent: usize,
    written: usize,
    map: LineMap,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self { out, indent: 0, written: 0, map: LineMap::default() }
    }

    /// Ligne hors flux (en-tête), sans indentation ni correspondance.
    pub fn header(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.written += 1;
        Ok(())
    }

    /// Écrit une ligne traduite issue de la ligne source `source`.
    pub fn emit(&mut self, source: usize, line: &str) -> io::Result<()> {
        if line.starts_with('}') {
            self.indent = self.indent.saturating_sub(INDENT_STEP);
        }
        writeln!(self.out, "{:width$}{line}", "", width = self.indent)?;
        self.written += 1;
        self.map.record(source, self.written);
        trace!("{source} -> {}: {line}", self.written);
        if line.ends_with('{') {
            self.indent += INDENT_STEP;
        }
        Ok(())
    }

    /// Indentation courante (colonnes).
    pub fn indent(&self) -> usize { self.indent }

    pub fn flush(&mut self) -> io::Result<()> { self.out.flush() }

    pub fn finish(mut self) -> io::Result<(W, LineMap)> {
        self.out.flush()?;
        Ok((self.out, self.map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(lines: &[&str]) -> (String, usize) {
        let mut e = Emitter::new(Vec::new());
        for (i, l) in lines.iter().enumerate() {
            e.emit(i + 1, l).unwrap();
        }
        let indent = e.indent();
        let (buf, _) = e.finish().unwrap();
        (String::from_utf8(buf).unwrap(), indent)
    }

    #[test]
    fn nested_indentation() {
        let (text, indent) = render(&["int main() {", "while (a < 8) {", "a = a + 1;", "}", "return 0;", "}"]);
        assert_eq!(
            text,
            "int main() {\n  while (a < 8) {\n    a = a + 1;\n  }\n  return 0;\n}\n"
        );
        assert_eq!(indent, 0);
    }

    #[test]
    fn else_dedents_then_indents() {
        let (text, _) = render(&["if (a==1) {", "x = 1;", "} else {", "x = 2;", "}"]);
        assert_eq!(text, "if (a==1) {\n  x = 1;\n} else {\n  x = 2;\n}\n");
    }

    #[test]
    fn never_negative() {
        let (text, indent) = render(&["}", "x;"]);
        assert_eq!(text, "}\nx;\n");
        assert_eq!(indent, 0);
    }

    #[test]
    fn map_counts_header() {
        let mut e = Emitter::new(Vec::new());
        e.header("#include \"sim.h\"").unwrap();
        e.emit(3, "word x;").unwrap();
        e.emit(5, "return 0;").unwrap();
        e.emit(5, "}").unwrap();
        let (_, map) = e.finish().unwrap();
        assert_eq!(map.entries(), &[(3, 2), (5, 3), (5, 4)]);
        assert_eq!(map.source_of(3), Some(5));
        assert_eq!(map.source_of(1), None);
        assert_eq!(map.source_lines(), vec![3, 5]);
        assert!(map.is_order_preserving());

        let mut txt = Vec::new();
        map.write_to(&mut txt).unwrap();
        assert_eq!(String::from_utf8(txt).unwrap(), "3 2\n5 3\n5 4\n");
    }
}
