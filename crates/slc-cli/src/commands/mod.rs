pub mod build;
pub mod check;
pub mod translate;

use std::fs::File;
use std::io::BufWriter;

use camino::Utf8Path;
use color_eyre::eyre::{eyre, Result, WrapErr};
use color_eyre::Report;
use slc_transpiler::{map_path_for, Diagnostic, LineMap, TranspileError};

/// Erreur de traduction → rapport lisible `fichier:ligne: …`.
pub(crate) fn report(input: &str, err: TranspileError) -> Report {
    match err {
        TranspileError::Syntax(e) => eyre!("{}", Diagnostic::from_syntax(Some(input), &e)),
        TranspileError::Io(e) => Report::new(e).wrap_err(format!("traduction de {input}")),
    }
}

/// Écrit `<output>.map` à côté de la sortie.
pub(crate) fn write_line_map(output: &Utf8Path, map: &LineMap) -> Result<()> {
    let path = map_path_for(output);
    let f = File::create(&path).wrap_err_with(|| format!("création de {path}"))?;
    map.write_to(BufWriter::new(f)).wrap_err_with(|| format!("écriture de {path}"))?;
    Ok(())
}
