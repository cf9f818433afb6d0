use std::{io::Write, process::ExitCode};

use anyhow::Context;
use shader_bundle::Error;

mod compile_shaders;

const HELP: &str = "\
Usage: xtask <COMMAND>

Commands:
  compile-shaders
    --root <DIR>            Project root that shader and output paths are relative to
                            (default: the workspace root)
    --output <PATH>         Generated header (default: src/engine/client/shaders.h)
    --compiler <PROGRAM>    Shader compiler to run (default: glslc)
    --encoding <ENCODING>   `words` for packed little-endian words, `bytes` for one
                            literal per byte (default: words)
    --dry-run               Compile everything but leave the header untouched

Options:
  -h, --help  Print help
";

/// Exit status for every failure: -1, as seen by the shell.
const FAILURE: u8 = 255;

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_indent(Some(4))
        .init();

    match run(pico_args::Arguments::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report(&err, &mut std::io::stderr().lock())),
    }
}

fn run(mut args: pico_args::Arguments) -> anyhow::Result<()> {
    let subcommand = args.subcommand().context("Expected subcommand to be UTF-8")?;

    // -h at the top level, or with no subcommand.
    let Some(subcommand) = subcommand.filter(|_| !args.contains(["-h", "--help"])) else {
        eprint!("{HELP}");
        return Ok(());
    };

    match subcommand.as_str() {
        "compile-shaders" => compile_shaders::run(args),
        other => {
            eprint!("{HELP}");
            anyhow::bail!("Unknown subcommand: {other}")
        }
    }
}

/// Compiler diagnostics are copied to `stderr` untouched; everything else is
/// logged. Returns the process exit status.
fn report(err: &anyhow::Error, stderr: &mut impl Write) -> u8 {
    if let Some(Error::CompileFailure { diagnostics, .. }) = err.downcast_ref::<Error>() {
        let _ = stderr.write_all(diagnostics);
        let _ = stderr.flush();
        log::debug!("{err:#}");
        return FAILURE;
    }

    log::error!("{err:#}");
    FAILURE
}
