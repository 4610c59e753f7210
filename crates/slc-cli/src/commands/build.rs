use camino::Utf8PathBuf;
use clap::Args as ClapArgs;
use color_eyre::eyre::{Result, WrapErr};
use log::info;
use slc_transpiler::{discover_sources, output_path_for, Transpiler};

use super::{report, write_line_map};

#[derive(ClapArgs, Debug)]
pub struct Args {
    /// Racine à parcourir (les dossiers `build/` sont ignorés)
    #[arg(default_value = ".")]
    pub dir: Utf8PathBuf,

    /// Dossier de sortie commun (défaut : à côté de chaque source)
    #[arg(long)]
    pub out_dir: Option<Utf8PathBuf>,

    /// Écrire aussi `<sortie>.map` pour chaque fichier
    #[arg(long)]
    pub line_map: bool,
}

/// Traduit tous les sources trouvés ; renvoie les sorties dans l'ordre.
pub fn exec(args: Args, t: &Transpiler) -> Result<Vec<Utf8PathBuf>> {
    let sources = discover_sources(&args.dir, t.config())
        .wrap_err_with(|| format!("parcours de {}", args.dir))?;
    if sources.is_empty() {
        eprintln!("ℹ️  Aucun fichier .{} sous {}", t.config().source_ext, args.dir);
        return Ok(Vec::new());
    }

    let mut outputs = Vec::with_capacity(sources.len());
    for src in &sources {
        let out = output_path_for(src, args.out_dir.as_deref(), t.config());
        let map = t.translate_file(src, &out).map_err(|e| report(src.as_str(), e))?;
        if args.line_map {
            write_line_map(&out, &map)?;
        }
        info!("{src} -> {out}");
        outputs.push(out);
    }
    eprintln!("✅  {} fichier(s) traduit(s)", outputs.len());
    Ok(outputs)
}
