//! The `nitroc` command-line compiler.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;

use nitro_drv::Target;
use nitro_util::{render, Handler, SourceMap};

/// Compiler for the Nitro programming language
#[derive(Parser)]
#[command(name = "nitroc", version, about)]
struct Cli {
    /// Input source file
    input: PathBuf,

    /// Output artifact path
    output: PathBuf,

    /// Compilation target
    #[arg(long, default_value = "debug")]
    target: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::from(2)
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let target = match cli.target.as_str() {
        "debug" => Target::Debug,
        other => bail!("unknown target '{}' (expected 'debug')", other),
    };

    let source = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let mut sources = SourceMap::new();
    let file = sources.add(cli.input.display().to_string(), source.as_str());

    let handler = Handler::new();
    let result = nitro_drv::compile(file, &source, target, &handler);

    for diagnostic in handler.diagnostics() {
        eprintln!("{}", render(&diagnostic, &sources));
    }

    match result {
        Ok(code) => {
            std::fs::write(&cli.output, &code)
                .with_context(|| format!("failed to write {}", cli.output.display()))?;
            tracing::info!(
                bytes = code.len(),
                output = %cli.output.display(),
                "compilation finished"
            );
            Ok(ExitCode::SUCCESS)
        },
        Err(error) => {
            eprintln!("{}", render(&error.into_diagnostic(), &sources));
            Ok(ExitCode::from(1))
        },
    }
}
