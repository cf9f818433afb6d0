use std::path::Path;

use xshell::Shell;

use crate::{Error, Result};

/// Turns one shader source file into its binary form.
pub trait ShaderCompiler {
    fn compile(&self, source: &Path) -> Result<Vec<u8>>;
}

/// The binary of one manifest entry, waiting to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledShader {
    pub name: String,
    pub binary: Vec<u8>,
}

/// Runs `glslc` (or a compatible program found on `PATH`) once per shader,
/// optimizing for performance and reading the SPIR-V from stdout.
pub struct Glslc {
    shell: Shell,
    program: String,
}

impl Glslc {
    pub const DEFAULT_PROGRAM: &'static str = "glslc";

    pub fn new() -> Result<Self> {
        Self::with_program(Self::DEFAULT_PROGRAM)
    }

    pub fn with_program(program: impl Into<String>) -> Result<Self> {
        let program = program.into();
        let shell = Shell::new().map_err(|source| Error::Shell {
            program: program.clone(),
            source,
        })?;

        Ok(Self { shell, program })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ShaderCompiler for Glslc {
    fn compile(&self, source: &Path) -> Result<Vec<u8>> {
        let cmd = self
            .shell
            .cmd(&self.program)
            .args(["-O", "-o", "-"])
            .arg(source)
            .ignore_status()
            .quiet();
        log::debug!("$ {cmd}");

        let output = cmd.output().map_err(|err| Error::Spawn {
            program: self.program.clone(),
            source: err,
        })?;

        if !output.status.success() {
            return Err(Error::CompileFailure {
                path: source.to_path_buf(),
                code: output.status.code(),
                diagnostics: diagnostics(output.stderr, output.stdout),
            });
        }

        Ok(output.stdout)
    }
}

/// What a failed compiler printed for the user. Stdout only stands in for an
/// empty stderr when it is text; otherwise it may be partial SPIR-V.
fn diagnostics(stderr: Vec<u8>, stdout: Vec<u8>) -> Vec<u8> {
    if stderr.is_empty() && std::str::from_utf8(&stdout).is_ok() {
        stdout
    } else {
        stderr
    }
}
