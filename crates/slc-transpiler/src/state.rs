//! state.rs — Contexte mutable d'une traduction de fichier.
//!
//! Un `TranslationState` est créé au début d'une traduction et jeté à la
//! fin ; il n'est jamais partagé entre fichiers ni entre threads.

use crate::block::{BlockStack, BlockTag};

#[derive(Debug, Default)]
pub struct TranslationState {
    /// Blocs ouverts.
    pub blocks: BlockStack,
    /// Dernière ligne *normalisée* traitée (lookback d'une seule ligne pour le
    /// `return 0;` implicite). Les lignes vides/commentaires n'y arrivent pas.
    previous: String,
    /// Numéro (1-based) de la ligne d'entrée courante.
    line: usize,
}

impl TranslationState {
    pub fn new() -> Self { Self::default() }

    /// Avance le compteur ; appelé pour chaque ligne brute, même vide.
    pub fn next_line(&mut self) -> usize {
        self.line += 1;
        self.line
    }

    pub fn line(&self) -> usize { self.line }

    pub fn previous(&self) -> &str { &self.previous }

    /// Mémorise la ligne qui vient d'être traduite.
    pub fn remember(&mut self, normalized: &str) {
        self.previous.clear();
        self.previous.push_str(normalized);
    }

    /// Vrai si la ligne précédente contient le jeton `return`.
    pub fn previous_returns(&self) -> bool {
        self.previous
            .split_whitespace()
            .any(|tok| tok.trim_end_matches(';') == "return")
    }

    pub fn innermost(&self) -> Option<BlockTag> { self.blocks.top() }
}
