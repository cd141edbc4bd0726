use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use anyhow::{Context, Result};
use audit_cli::config::SessionConfig;
use audit_cli::shell::SessionShell;
use audit_cli::summary::standards_table;
use audit_standards::StandardRegistry;
use tracing::info_span;

use crate::cli::SessionArgs;

pub fn run_standards() -> Result<()> {
    let registry = StandardRegistry::builtin();
    println!("{}", standards_table(&registry));
    Ok(())
}

pub fn run_session(args: &SessionArgs) -> Result<()> {
    let config = SessionConfig::from_overrides(
        args.client.clone(),
        args.date,
        args.output_dir.clone(),
    );
    let span = info_span!("session", client = %config.client_name);
    let _guard = span.enter();

    let stdout = io::stdout();
    let mut shell = SessionShell::from_config(&config, stdout.lock());
    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("open session script {}", path.display()))?;
            shell.run(BufReader::new(file), false)
        }
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            shell.run(stdin.lock(), prompt)
        }
    }
}
