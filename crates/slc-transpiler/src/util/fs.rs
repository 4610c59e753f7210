use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};

use crate::config::TranspileConfig;

pub fn ensure_parent(p: &Utf8Path) -> io::Result<()> {
    if let Some(dir) = p.parent() {
        if !dir.as_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}

/// `src/foo.sl` → `src/foo.c` (ou `<out_dir>/foo.c`).
pub fn output_path_for(input: &Utf8Path, out_dir: Option<&Utf8Path>, cfg: &TranspileConfig) -> Utf8PathBuf {
    let out = input.with_extension(&cfg.output_ext);
    match (out_dir, out.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => out,
    }
}

/// Fichier de correspondance des lignes, à côté de la sortie : `foo.c.map`.
pub fn map_path_for(output: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{output}.map"))
}

/// Liste récursive (triée) des sources `*.<source_ext>`, répertoires `build` exclus.
pub fn discover_sources(dir: &Utf8Path, cfg: &TranspileConfig) -> io::Result<Vec<Utf8PathBuf>> {
    let mut out = Vec::new();
    walk(dir, &cfg.source_ext, &mut out)?;
    out.sort();
    Ok(out)
}

fn walk(dir: &Utf8Path, ext: &str, out: &mut Vec<Utf8PathBuf>) -> io::Result<()> {
    for entry in dir.read_dir_utf8()? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            if path.file_name() != Some("build") {
                walk(path, ext, out)?;
            }
        } else if path.extension() == Some(ext) {
            out.push(path.to_path_buf());
        }
    }
    Ok(())
}
