//! brewgen CLI entrypoint.
//!
//! This binary downloads a release artefact, hashes it, and writes a
//! Homebrew formula that installs it.

use brewgen::cli::Cli;
use brewgen::error::Result;
use brewgen::logging;
use brewgen::output::resolve_output_dir;
use brewgen::pipeline::{PipelineConfig, generate_formula};
use clap::Parser;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbosity);
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    let request = cli.request();
    let output_dir = resolve_output_dir(&cli.output_dir)?;
    let config = PipelineConfig {
        output_dir: &output_dir,
        quiet: cli.quiet,
        dry_run: cli.dry_run,
    };
    generate_formula(&request, &config, stdout)?;
    Ok(())
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, format_args!("error: {err}"));
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}
