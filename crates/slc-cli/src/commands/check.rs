use std::fs::File;
use std::io::BufReader;

use camino::Utf8PathBuf;
use clap::Args as ClapArgs;
use color_eyre::eyre::{Result, WrapErr};
use slc_transpiler::Transpiler;

use super::report;

#[derive(ClapArgs, Debug)]
pub struct Args {
    /// Fichiers source `.sl` à vérifier
    #[arg(required = true)]
    pub inputs: Vec<Utf8PathBuf>,
}

/// S'arrête au premier fichier fautif.
pub fn exec(args: &Args, t: &Transpiler) -> Result<()> {
    for input in &args.inputs {
        let f = File::open(input).wrap_err_with(|| format!("lecture {input}"))?;
        t.check(BufReader::new(f)).map_err(|e| report(input.as_str(), e))?;
        eprintln!("✅  {input}");
    }
    Ok(())
}
