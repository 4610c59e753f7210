//! pipeline.rs — Orchestration d'une traduction : normaliser → traduire → émettre.
//!
//! Une [`Session`] par fichier : pile de blocs, lookback et indentation lui
//! appartiennent, rien n'est partagé entre deux traductions.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};

use camino::Utf8Path;
use log::{debug, info, warn};

use crate::config::TranspileConfig;
use crate::diagnostics::{SyntaxError, SyntaxErrorKind, TranspileError};
use crate::emit::{Emitter, LineMap};
use crate::normalize::normalize;
use crate::state::TranslationState;
use crate::translate::translate_line;
use crate::util::fs;

/// Résultat d'une traduction en mémoire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub line_map: LineMap,
}

/// Traduction en cours d'un flux d'entrée.
pub struct Session<'c, W: Write> {
    cfg: &'c TranspileConfig,
    state: TranslationState,
    emitter: Emitter<W>,
}

impl<'c, W: Write> Session<'c, W> {
    /// Ouvre la session et écrit l'en-tête runtime.
    pub fn start(cfg: &'c TranspileConfig, out: W) -> io::Result<Self> {
        let mut emitter = Emitter::new(out);
        emitter.header(&cfg.include_line())?;
        Ok(Self { cfg, state: TranslationState::new(), emitter })
    }

    /// Traite une ligne brute (fin de ligne comprise ou non).
    pub fn feed(&mut self, raw: &str) -> Result<(), TranspileError> {
        let line_no = self.state.next_line();
        let Some(line) = normalize(raw) else { return Ok(()) };
        let lines = translate_line(&mut self.state, self.cfg, line)
            .map_err(|kind| SyntaxError::new(line_no, kind))?;
        for out in &lines {
            self.emitter.emit(line_no, out)?;
        }
        self.state.remember(line);
        Ok(())
    }

    /// Comme [`feed`](Self::feed), pour une ligne lue en octets bruts.
    pub fn feed_bytes(&mut self, raw: &[u8]) -> Result<(), TranspileError> {
        match std::str::from_utf8(raw) {
            Ok(line) => self.feed(line),
            Err(_) => {
                let line_no = self.state.next_line();
                Err(SyntaxError::new(line_no, SyntaxErrorKind::InvalidUtf8).into())
            }
        }
    }

    /// Clôt la session : tout bloc encore ouvert est une erreur.
    pub fn finish(mut self) -> Result<(W, LineMap), TranspileError> {
        if let Some(tag) = self.state.innermost() {
            self.emitter.flush()?;
            return Err(SyntaxError::new(self.state.line(), SyntaxErrorKind::UnclosedBlock(tag)).into());
        }
        Ok(self.emitter.finish()?)
    }

    pub fn state(&self) -> &TranslationState { &self.state }

    /// Vide le tampon de sortie (sortie partielle après une erreur).
    fn abort(&mut self) {
        if let Err(e) = self.emitter.flush() {
            warn!("flush après erreur: {e}");
        }
    }
}

/// Point d'entrée du transpileur.
#[derive(Debug, Clone, Default)]
pub struct Transpiler {
    cfg: TranspileConfig,
}

impl Transpiler {
    pub fn new(cfg: TranspileConfig) -> Self { Self { cfg } }

    pub fn config(&self) -> &TranspileConfig { &self.cfg }

    /// Traduit un flux ligne à ligne. S'arrête à la première erreur ; ce qui
    /// a déjà été écrit reste dans `output`.
    pub fn translate<R: BufRead, W: Write>(&self, mut input: R, output: W) -> Result<(W, LineMap), TranspileError> {
        let mut session = Session::start(&self.cfg, output)?;
        let mut raw = Vec::new();
        loop {
            raw.clear();
            let res = match input.read_until(b'\n', &mut raw) {
                Ok(0) => break,
                Ok(_) => session.feed_bytes(&raw),
                Err(e) => Err(e.into()),
            };
            if let Err(e) = res {
                session.abort();
                return Err(e);
            }
        }
        session.finish()
    }

    /// Traduit une source en mémoire.
    pub fn translate_str(&self, source: &str) -> Result<Translation, TranspileError> {
        let (buf, line_map) = self.translate(source.as_bytes(), Vec::new())?;
        let text = String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Translation { text, line_map })
    }

    /// Vérifie une source sans rien produire.
    pub fn check<R: BufRead>(&self, input: R) -> Result<(), TranspileError> {
        self.translate(input, io::sink()).map(|_| ())
    }

    /// Traduit `input` vers `output` (répertoires parents créés au besoin).
    ///
    /// En cas d'erreur de syntaxe, le fichier partiel n'est pas supprimé.
    pub fn translate_file(&self, input: &Utf8Path, output: &Utf8Path) -> Result<LineMap, TranspileError> {
        info!("traduction {input} -> {output}");
        let src = io::BufReader::new(File::open(input)?);
        fs::ensure_parent(output)?;
        let out = BufWriter::new(File::create(output)?);
        match self.translate(src, out) {
            Ok((_, map)) => {
                debug!("{input}: {} ligne(s) émise(s)", map.len());
                Ok(map)
            }
            Err(e) => {
                warn!("{input}: traduction interrompue, sortie partielle laissée dans {output}");
                Err(e)
            }
        }
    }
}
