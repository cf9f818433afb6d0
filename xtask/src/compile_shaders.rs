use std::path::{Path, PathBuf};

use anyhow::Context;
use shader_bundle::{Encoding, Generator, Glslc, DEFAULT_MANIFEST, DEFAULT_OUTPUT};

#[derive(Debug)]
struct Options {
    root: PathBuf,
    output: PathBuf,
    compiler: String,
    encoding: Encoding,
    dry_run: bool,
}

impl Options {
    fn parse(mut args: pico_args::Arguments) -> anyhow::Result<Self> {
        let root = args
            .opt_value_from_str("--root")?
            .unwrap_or_else(workspace_root);
        let output = args
            .opt_value_from_str("--output")?
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let compiler = args
            .opt_value_from_str("--compiler")?
            .unwrap_or_else(|| Glslc::DEFAULT_PROGRAM.to_owned());
        let encoding = args.opt_value_from_str("--encoding")?.unwrap_or_default();
        let dry_run = args.contains("--dry-run");

        let remaining = args.finish();
        if !remaining.is_empty() {
            anyhow::bail!("Unexpected arguments: {remaining:?}");
        }

        Ok(Self {
            root,
            output,
            compiler,
            encoding,
            dry_run,
        })
    }
}

/// The directory above `xtask/`, where the shader sources live.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

pub(crate) fn run(args: pico_args::Arguments) -> anyhow::Result<()> {
    let options = Options::parse(args)?;
    log::debug!("{options:?}");

    let compiler = Glslc::with_program(options.compiler)?;
    let generator = Generator::new(&options.root, compiler).with_encoding(options.encoding);

    if options.dry_run {
        let summary = generator.dry_run(DEFAULT_MANIFEST, &options.output)?;
        log::info!(
            "Compiled {} shaders ({} bytes), not writing {}",
            summary.shaders,
            summary.binary_bytes,
            summary.output.display()
        );
        return Ok(());
    }

    let summary = generator
        .run(DEFAULT_MANIFEST, &options.output)
        .with_context(|| format!("Failed to generate {}", options.output.display()))?;
    log::info!(
        "Embedded {} bytes of {} SPIR-V",
        summary.binary_bytes,
        options.encoding
    );

    Ok(())
}
