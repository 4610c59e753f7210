//! slc-transpiler — transpileur mono-passe SL → C-like.
//!
//! - Normalise chaque ligne (commentaires `#`, blancs)
//! - Classe la ligne par préfixe et la réécrit (`translate`)
//! - Suit l'imbrication via une pile de blocs typée (`block`)
//! - Émet le texte indenté + la table de correspondance des lignes (`emit`)
//!
//! API orientée outil (CLI, build) : [`Transpiler`], [`TranspileConfig`].
//!
//! ```
//! use slc_transpiler::{Transpiler, TranspileConfig};
//!
//! let t = Transpiler::new(TranspileConfig::default());
//! let out = t.translate_str("var word x\n").unwrap();
//! assert_eq!(out.text, "#include \"sim.h\"\nword x;\n");
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]

pub mod block;
pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod normalize;
pub mod pipeline;
pub mod state;
pub mod translate;
mod util;

pub use block::{BlockStack, BlockTag};
pub use config::{CliOverrides, ConfigError, TranspileConfig};
pub use diagnostics::{Diagnostic, SyntaxError, SyntaxErrorKind, TranspileError};
pub use emit::{Emitter, LineMap};
pub use pipeline::{Session, Translation, Transpiler};
pub use state::TranslationState;
pub use util::fs::{discover_sources, map_path_for, output_path_for};
