//! Compiles a fixed list of GLSL shaders to SPIR-V and embeds the binaries as
//! C array literals in a single generated header.

mod compiler;
pub mod encode;
mod error;
mod generator;
mod manifest;
mod writer;

pub use compiler::{CompiledShader, Glslc, ShaderCompiler};
pub use encode::{ArrayEncoding, ByteArray, Encoding, WordArray};
pub use error::{Error, Result};
pub use generator::{Generator, Summary};
pub use manifest::{validate, ShaderSpec, DEFAULT_MANIFEST, DEFAULT_OUTPUT, SYMBOL_PREFIX};
pub use writer::{render, write};
