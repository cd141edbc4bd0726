//! Parsing of interactive session commands.
//!
//! One command per line. Standard codes contain spaces ("SA 200"), so
//! commands that take a code plus free text separate the two with `|`.

use anyhow::{Context, Result, anyhow, bail};
use audit_report::ExportFormat;
use chrono::NaiveDate;

use crate::config::parse_audit_date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Client(String),
    Date(NaiveDate),
    Done(String),
    Undo(String),
    Note { code: String, text: String },
    Add { code: String, name: String },
    Reset,
    Pending,
    Summary { json: bool },
    List,
    Export(Vec<ExportFormat>),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  client <name>              set the client name
  date <YYYY-MM-DD>          set the audit date
  done <code>                mark a standard as complied with
  undo <code>                clear the complied flag
  note <code> | <text>       replace notes (\\n for a line break; no text clears)
  add <code> | <name>        add a standard to the checklist
  reset                      clear all flags and notes
  pending                    list standards not yet complied with
  summary [--json]           show progress
  list                       show the full checklist
  export xlsx|docx|all       write reports to the output directory
  help                       show this help
  quit                       end the session";

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "client" => {
            if rest.is_empty() {
                bail!("usage: client <name>");
            }
            SessionCommand::Client(rest.to_string())
        }
        "date" => {
            let date = parse_audit_date(rest)
                .with_context(|| format!("invalid date `{rest}` (expected YYYY-MM-DD)"))?;
            SessionCommand::Date(date)
        }
        "done" => SessionCommand::Done(require_code(rest)?),
        "undo" => SessionCommand::Undo(require_code(rest)?),
        "note" | "notes" => {
            let (code, text) = split_pair(rest);
            SessionCommand::Note {
                code: require_code(code)?,
                text: unescape_notes(text),
            }
        }
        "add" => {
            let (code, name) = split_pair(rest);
            SessionCommand::Add {
                code: code.to_string(),
                name: name.to_string(),
            }
        }
        "reset" => SessionCommand::Reset,
        "pending" => SessionCommand::Pending,
        "summary" => match rest {
            "" => SessionCommand::Summary { json: false },
            "--json" | "json" => SessionCommand::Summary { json: true },
            other => bail!("unexpected argument `{other}` for summary"),
        },
        "list" => SessionCommand::List,
        "export" => SessionCommand::Export(parse_export_targets(rest)?),
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => bail!("unknown command `{other}` (type `help` for a list)"),
    };
    Ok(Some(command))
}

fn require_code(value: &str) -> Result<String> {
    let code = value.trim();
    if code.is_empty() {
        bail!("missing standard code");
    }
    Ok(code.to_string())
}

/// Split `left | right`; a missing separator leaves `right` empty.
fn split_pair(value: &str) -> (&str, &str) {
    match value.split_once('|') {
        Some((left, right)) => (left.trim(), right.trim()),
        None => (value.trim(), ""),
    }
}

fn unescape_notes(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn parse_export_targets(value: &str) -> Result<Vec<ExportFormat>> {
    match value.to_ascii_lowercase().as_str() {
        "" | "all" => Ok(ExportFormat::ALL.to_vec()),
        "xlsx" | "excel" => Ok(vec![ExportFormat::Xlsx]),
        "docx" | "word" => Ok(vec![ExportFormat::Docx]),
        other => Err(anyhow!("unknown export format `{other}` (xlsx, docx or all)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("# fieldwork day 1").unwrap(), None);
    }

    #[test]
    fn codes_keep_inner_spaces() {
        assert_eq!(parse("done SA 200"), SessionCommand::Done("SA 200".to_string()));
        assert_eq!(parse("UNDO  SA 210 "), SessionCommand::Undo("SA 210".to_string()));
    }

    #[test]
    fn note_splits_on_pipe_and_unescapes() {
        assert_eq!(
            parse("note SA 230 | Files reviewed\\nSign-off pending"),
            SessionCommand::Note {
                code: "SA 230".to_string(),
                text: "Files reviewed\nSign-off pending".to_string(),
            }
        );
        assert_eq!(
            parse("note SA 230"),
            SessionCommand::Note {
                code: "SA 230".to_string(),
                text: String::new(),
            }
        );
    }

    #[test]
    fn add_without_name_is_passed_through() {
        assert_eq!(
            parse("add SA 900"),
            SessionCommand::Add {
                code: "SA 900".to_string(),
                name: String::new(),
            }
        );
    }

    #[test]
    fn export_targets() {
        assert_eq!(parse("export"), SessionCommand::Export(ExportFormat::ALL.to_vec()));
        assert_eq!(parse("export XLSX"), SessionCommand::Export(vec![ExportFormat::Xlsx]));
        assert_eq!(parse("export word"), SessionCommand::Export(vec![ExportFormat::Docx]));
        assert!(parse_command("export pdf").is_err());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("date tomorrow").is_err());
        assert!(parse_command("done").is_err());
        assert!(parse_command("client").is_err());
        assert!(parse_command("frobnicate").is_err());
        assert!(parse_command("summary --yaml").is_err());
    }
}
