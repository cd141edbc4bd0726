//! Line-oriented checklist session.
//!
//! Reads one command per line, applies it through the session handlers and
//! writes human-readable feedback. Command errors are reported and the
//! session continues; only I/O failures end it.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::{Context, Result};
use audit_core::{AddOutcome, AuditSession};
use audit_report::{ExportFormat, SessionExport, write_artifact};
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::input::{HELP_TEXT, SessionCommand, parse_command};
use crate::summary::{
    SessionSummary, checklist_header, checklist_table, pending_lines, progress_line,
};

pub struct SessionShell<W> {
    session: AuditSession,
    output_dir: PathBuf,
    out: W,
}

impl<W: Write> SessionShell<W> {
    pub fn new(session: AuditSession, output_dir: impl Into<PathBuf>, out: W) -> Self {
        Self {
            session,
            output_dir: output_dir.into(),
            out,
        }
    }

    /// Shell over the built-in catalogue configured from `config`.
    pub fn from_config(config: &SessionConfig, out: W) -> Self {
        Self::new(
            AuditSession::with_builtin_standards(config.context()),
            config.output_dir.clone(),
            out,
        )
    }

    pub fn session(&self) -> &AuditSession {
        &self.session
    }

    pub fn into_parts(self) -> (AuditSession, W) {
        (self.session, self.out)
    }

    /// Process `input` until end of input or `quit`.
    ///
    /// With `prompt` set, a `> ` prompt is written before each line.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> Result<()> {
        writeln!(self.out, "{}", checklist_header(&self.session))?;
        writeln!(
            self.out,
            "{} standards loaded. Type `help` for commands.",
            self.session.registry().len()
        )?;
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("read session input")?;
            let outcome = parse_command(&line).and_then(|command| match command {
                Some(command) => self.execute(command),
                None => Ok(ControlFlow::Continue(())),
            });
            match outcome {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(error) => writeln!(self.out, "error: {error:#}")?,
            }
        }
        let progress = self.session.summary();
        info!(done = progress.done, total = progress.total, "session ended");
        Ok(())
    }

    /// Apply one command.
    pub fn execute(&mut self, command: SessionCommand) -> Result<ControlFlow<()>> {
        match command {
            SessionCommand::Client(name) => {
                self.session.on_set_client(name);
                writeln!(self.out, "{}", checklist_header(&self.session))?;
            }
            SessionCommand::Date(date) => {
                self.session.on_set_date(date);
                writeln!(self.out, "{}", checklist_header(&self.session))?;
            }
            SessionCommand::Done(code) => self.toggle(&code, true)?,
            SessionCommand::Undo(code) => self.toggle(&code, false)?,
            SessionCommand::Note { code, text } => {
                let cleared = text.is_empty();
                self.session.on_edit_notes(&code, text)?;
                let verb = if cleared { "cleared" } else { "updated" };
                writeln!(self.out, "Notes {verb} for {code}")?;
            }
            SessionCommand::Add { code, name } => {
                match self.session.on_add_standard(&code, &name) {
                    AddOutcome::Added(standard) => {
                        writeln!(self.out, "Added {}: {}", standard.code, standard.name)?;
                    }
                    AddOutcome::Duplicate { code } => {
                        writeln!(self.out, "warning: {code} already exists.")?;
                    }
                    AddOutcome::Ignored => {}
                }
            }
            SessionCommand::Reset => {
                self.session.on_reset();
                writeln!(self.out, "All compliance data reset.")?;
            }
            SessionCommand::Pending => {
                writeln!(self.out, "Pending SAs:")?;
                for line in pending_lines(&self.session) {
                    writeln!(self.out, "{line}")?;
                }
            }
            SessionCommand::Summary { json } => {
                if json {
                    let summary = SessionSummary::from_session(&self.session);
                    let text =
                        serde_json::to_string_pretty(&summary).context("serialize summary")?;
                    writeln!(self.out, "{text}")?;
                } else {
                    writeln!(self.out, "{}", progress_line(self.session.summary()))?;
                }
            }
            SessionCommand::List => {
                writeln!(self.out, "{}", checklist_table(&self.session))?;
            }
            SessionCommand::Export(formats) => {
                for format in formats {
                    self.export(format)?;
                }
            }
            SessionCommand::Help => writeln!(self.out, "{HELP_TEXT}")?,
            SessionCommand::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn toggle(&mut self, code: &str, done: bool) -> Result<()> {
        self.session.on_toggle_done(code, done)?;
        let name = self.session.lookup(code)?;
        let mark = if done { "x" } else { " " };
        writeln!(self.out, "[{mark}] {code}: {name}")?;
        Ok(())
    }

    /// Export one format; a failure is reported without ending the session.
    fn export(&mut self, format: ExportFormat) -> Result<()> {
        let saved = self
            .session
            .on_export(format)
            .and_then(|artifact| write_artifact(&self.output_dir, &artifact));
        match saved {
            Ok(path) => {
                writeln!(
                    self.out,
                    "Saved {} report to {}",
                    format.label(),
                    path.display()
                )?;
            }
            Err(error) => {
                warn!(format = %format, error = %error, "export failed");
                writeln!(
                    self.out,
                    "error: failed to export {} report: {error}",
                    format.label()
                )?;
            }
        }
        Ok(())
    }
}
