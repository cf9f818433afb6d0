use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    manifest, writer, CompiledShader, Encoding, Error, Result, ShaderCompiler, ShaderSpec,
};

/// Compiles a manifest and writes the resulting header.
///
/// All paths, both the manifest's sources and the output, are resolved
/// against `root`.
pub struct Generator<C> {
    root: PathBuf,
    compiler: C,
    encoding: Encoding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub shaders: usize,
    pub binary_bytes: usize,
    pub output: PathBuf,
}

impl Summary {
    fn new(compiled: &[CompiledShader], output: PathBuf) -> Self {
        Self {
            shaders: compiled.len(),
            binary_bytes: compiled.iter().map(|shader| shader.binary.len()).sum(),
            output,
        }
    }
}

impl<C: ShaderCompiler> Generator<C> {
    pub fn new(root: impl Into<PathBuf>, compiler: C) -> Self {
        Self {
            root: root.into(),
            compiler,
            encoding: Encoding::default(),
        }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compiles every entry in manifest order, stopping at the first failure.
    /// A compiler that succeeds without output counts as a failure: the
    /// resulting zero-length array would not compile.
    pub fn compile_all(&self, manifest: &[ShaderSpec]) -> Result<Vec<CompiledShader>> {
        manifest::validate(manifest)?;

        manifest
            .iter()
            .map(|spec| {
                let source = self.root.join(spec.path);
                let binary = self.compiler.compile(&source)?;
                if binary.is_empty() {
                    return Err(Error::EmptyOutput { path: source });
                }
                log::debug!("Compiled {} ({} bytes)", spec.path, binary.len());

                Ok(CompiledShader {
                    name: spec.name.to_string(),
                    binary,
                })
            })
            .collect()
    }

    /// Compiles the manifest without touching `output`.
    pub fn dry_run(&self, manifest: &[ShaderSpec], output: &Path) -> Result<Summary> {
        let compiled = self.compile_all(manifest)?;
        Ok(Summary::new(&compiled, self.root.join(output)))
    }

    /// Compiles the manifest and, only if every shader compiled, overwrites
    /// `output` with the generated declarations. Missing parent directories of
    /// `output` are created.
    pub fn run(&self, manifest: &[ShaderSpec], output: &Path) -> Result<Summary> {
        let compiled = self.compile_all(manifest)?;
        let output = self.root.join(output);
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        writer::write(&compiled, self.encoding.strategy(), &output)?;
        log::info!("Wrote {} shaders to {}", compiled.len(), output.display());

        Ok(Summary::new(&compiled, output))
    }
}
