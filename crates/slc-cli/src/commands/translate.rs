use std::io::{self, BufWriter};

use camino::Utf8PathBuf;
use clap::Args as ClapArgs;
use color_eyre::eyre::{bail, Result};
use slc_transpiler::{output_path_for, Transpiler};

use super::{report, write_line_map};

#[derive(ClapArgs, Debug)]
pub struct Args {
    /// Fichiers source `.sl` (`-` : stdin → stdout)
    #[arg(required = true)]
    pub inputs: Vec<Utf8PathBuf>,

    /// Fichier de sortie (une seule entrée)
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// Dossier de sortie (défaut : à côté de chaque source)
    #[arg(long, conflicts_with = "output")]
    pub out_dir: Option<Utf8PathBuf>,

    /// Écrire aussi `<sortie>.map` (ligne source → ligne sortie)
    #[arg(long)]
    pub line_map: bool,
}

/// Traduit chaque entrée ; renvoie les chemins écrits.
pub fn exec(args: Args, t: &Transpiler) -> Result<Vec<Utf8PathBuf>> {
    if args.output.is_some() && args.inputs.len() > 1 {
        bail!("`-o` n'accepte qu'un seul fichier d'entrée ({} fournis)", args.inputs.len());
    }

    if args.inputs.iter().any(|p| p.as_str() == "-") {
        if args.inputs.len() > 1 || args.output.is_some() || args.line_map {
            bail!("`-` (stdin) s'utilise seul, sans -o ni --line-map");
        }
        let stdout = io::stdout();
        t.translate(io::stdin().lock(), BufWriter::new(stdout.lock()))
            .map_err(|e| report("<stdin>", e))?;
        return Ok(Vec::new());
    }

    let mut written = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        let output = match &args.output {
            Some(o) => o.clone(),
            None => output_path_for(input, args.out_dir.as_deref(), t.config()),
        };
        let map = t.translate_file(input, &output).map_err(|e| report(input.as_str(), e))?;
        if args.line_map {
            write_line_map(&output, &map)?;
        }
        println!("{output}");
        written.push(output);
    }
    Ok(written)
}
