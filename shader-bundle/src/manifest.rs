use std::collections::HashSet;

use crate::{Error, Result};

/// Prefix of every generated array name: symbol `Vert` is declared as `s_aVert`.
pub const SYMBOL_PREFIX: &str = "s_a";

pub const DEFAULT_OUTPUT: &str = "src/engine/client/shaders.h";

/// Shaders built into the engine, in the order they appear in the header.
pub const DEFAULT_MANIFEST: &[ShaderSpec] = &[
    ShaderSpec::new("datasrc/shaders/main.vert", "Vert"),
    ShaderSpec::new("datasrc/shaders/no-tex.frag", "FragNoTex"),
    ShaderSpec::new("datasrc/shaders/2d.frag", "Frag2D"),
    ShaderSpec::new("datasrc/shaders/2d-array.frag", "Frag2DArray"),
];

/// One shader source and the symbol its binary is exported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSpec {
    /// Source path, relative to the project root.
    pub path: &'static str,
    pub name: &'static str,
}

impl ShaderSpec {
    pub const fn new(path: &'static str, name: &'static str) -> Self {
        Self { path, name }
    }

    pub fn symbol(&self) -> String {
        format!("{SYMBOL_PREFIX}{}", self.name)
    }
}

/// Rejects manifests whose names would not make distinct C identifiers.
pub fn validate(manifest: &[ShaderSpec]) -> Result<()> {
    let mut seen = HashSet::new();
    for spec in manifest {
        if spec.name.is_empty()
            || !spec
                .name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(Error::InvalidManifest(format!(
                "`{}` is not a valid symbol name",
                spec.name
            )));
        }
        if !seen.insert(spec.name) {
            return Err(Error::InvalidManifest(format!(
                "symbol `{}` is declared more than once",
                spec.name
            )));
        }
    }

    Ok(())
}
