//! Catalogue query CLI.
//!
//! This binary delegates to `product_catalogue::catalogue_cli` for parsing and
//! query logic, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use product_catalogue::catalogue_cli::{
    CliError, ParseOutcome, parse_args, render_products, run_query,
};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let result = run_query(&options)?;
            let output = render_products(&result.visible)?;
            write_output(&output);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: catalogue_query [options]\n",
        "\n",
        "Flags are applied in order, like clicks on the catalogue screen.\n",
        "\n",
        "Options:\n",
        "  --fixtures <path>    Load reference tables from a JSON file\n",
        "  --owner <name>       Show one owner's products (\"All\" clears)\n",
        "  --query <text>       Filter by product name substring\n",
        "  --category <title>   Toggle a category (repeatable)\n",
        "  --sort <column>      Click a column header: ID, Product, Category, User\n",
        "  --reset              Reset owner, query, and category filters\n",
        "  -h, --help           Print this help output\n",
        "\n",
        "Set RUST_LOG=debug to trace the join and filter stages.\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_output(output: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{output}") {
        drop(err);
    }
}
