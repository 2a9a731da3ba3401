//! symtidy CLI binary entry point
//!
//! This is a thin wrapper that calls the library's `run_cli()` function.

use anyhow::Result;
use symtidy_cli::{init_tracing, run_cli};

fn main() -> Result<()> {
    init_tracing();
    run_cli()
}
