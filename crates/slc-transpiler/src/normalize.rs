//! normalize.rs — Nettoyage d'une ligne source SL.
//!
//! Coupe au premier marqueur de commentaire `#`, retire les blancs autour.
//! Une ligne vide après nettoyage est ignorée par le pipeline (aucune
//! émission, aucun changement d'état).

/// Marqueur de commentaire de fin de ligne.
pub const COMMENT_MARKER: char = '#';

/// Renvoie la ligne normalisée, ou `None` si elle ne contient rien d'utile.
pub fn normalize(raw: &str) -> Option<&str> {
    let code = match raw.find(COMMENT_MARKER) {
        Some(ix) => &raw[..ix],
        None => raw,
    };
    let line = code.trim();
    if line.is_empty() { None } else { Some(line) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_comment_and_whitespace() {
        assert_eq!(normalize("  var word x   # compteur\n"), Some("var word x"));
        assert_eq!(normalize("\tend\r"), Some("end"));
    }

    #[test]
    fn blank_and_comment_only_lines_vanish() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("     "), None);
        assert_eq!(normalize("# rien ici"), None);
        assert_eq!(normalize("    # indenté"), None);
    }

    #[test]
    fn marker_cuts_even_without_space() {
        assert_eq!(normalize("x = 1#fin"), Some("x = 1"));
    }
}
