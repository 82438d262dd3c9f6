//! Completions command handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io::{self, Write};

/// Print a completion script for `shell` to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle<C: CommandFactory>(shell: CompletionShell) -> Result<()> {
    generate_completions::<C, _>(shell, &mut io::stdout());
    Ok(())
}

pub(crate) fn generate_completions<C: CommandFactory, W: Write>(
    shell: CompletionShell,
    out: &mut W,
) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "drp", out);
}
