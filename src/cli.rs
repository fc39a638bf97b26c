//! Non-interactive subcommands.
//!
//! Every command goes through the same [`NoteStore`] the terminal UI uses, so
//! remote mode and the local fallback behave identically here. Output is
//! plain text.

use std::io::{BufRead, Write};

use clap::{Args, Parser, Subcommand};

use crate::domain::error::{NotesError, Result};
use crate::domain::{
    filter_notes, format_long, format_short, note_preview, sort_notes, validate_note_draft, Note,
    NoteColor, NoteDraft, NotePatch, UNTITLED,
};
use crate::storage::NoteStore;

#[derive(Parser, Debug)]
#[command(name = "simple-notes", version)]
#[command(about = "Take notes in the terminal, on this device or through a backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List notes, pinned first
    #[command(alias = "ls")]
    List {
        /// Only notes whose title or content contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print one note
    Show { id: String },

    /// Create a note
    New(NoteFields),

    /// Change fields of an existing note
    Edit {
        id: String,
        #[command(flatten)]
        fields: NoteFields,
    },

    /// Delete a note
    #[command(alias = "delete")]
    Rm {
        id: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFields {
    #[arg(short, long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub content: Option<String>,

    #[arg(short, long)]
    pub pinned: Option<bool>,

    /// blue or amber
    #[arg(long)]
    pub color: Option<NoteColor>,
}

impl NoteFields {
    fn into_patch(self) -> NotePatch {
        NotePatch {
            title: self.title,
            content: self.content,
            pinned: self.pinned,
            color: self.color,
        }
    }
}

/// Runs `command` against `store`, writing results to `out`.
///
/// `input` answers the delete confirmation when `--yes` is not given.
///
/// # Errors
///
/// Returns store errors, [`NotesError::NotFound`] for unknown ids on `show`,
/// and validation errors for blank titles on `edit`.
pub async fn run(
    command: Command,
    store: &mut dyn NoteStore,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> Result<()> {
    tracing::debug!(?command, mode = %store.mode(), "running command");

    match command {
        Command::List { search } => {
            let mut notes = store.list().await?;
            sort_notes(&mut notes);
            let query = search.unwrap_or_default();
            let visible = filter_notes(&notes, &query);
            if visible.is_empty() {
                writeln!(out, "No notes found.")?;
            }
            for note in visible {
                write_summary(out, note)?;
            }
        }
        Command::Show { id } => {
            let found = store.get(&id).await?;
            let Some(note) = found else {
                return Err(NotesError::NotFound { id });
            };
            write_note(out, &note)?;
        }
        Command::New(fields) => {
            let note = store.create(fields.into_patch()).await?;
            writeln!(out, "Created {}", note.id)?;
        }
        Command::Edit { id, fields } => {
            if let Some(title) = &fields.title {
                validate_note_draft(&NoteDraft::new(title.clone(), String::new()))?;
            }
            let patch = fields.into_patch();
            if patch.is_empty() {
                return Err(NotesError::Validation("Nothing to change.".to_string()));
            }
            let note = store.update(&id, patch).await?;
            writeln!(out, "Updated {}", note.id)?;
        }
        Command::Rm { id, yes } => {
            if !yes {
                write!(out, "Delete note {id}? This cannot be undone. [y/N] ")?;
                out.flush()?;
                let mut answer = String::new();
                input.read_line(&mut answer)?;
                if !matches!(answer.trim(), "y" | "Y" | "yes") {
                    writeln!(out, "Cancelled.")?;
                    return Ok(());
                }
            }
            store.delete(&id).await?;
            writeln!(out, "Deleted {id}")?;
        }
    }

    Ok(())
}

fn display_title(note: &Note) -> &str {
    if note.title.trim().is_empty() {
        UNTITLED
    } else {
        &note.title
    }
}

fn write_summary(out: &mut impl Write, note: &Note) -> Result<()> {
    let pin = if note.pinned { "PIN " } else { "    " };
    writeln!(
        out,
        "{pin}{:<6} {}  {}",
        note.color,
        display_title(note),
        note.id
    )?;
    writeln!(out, "           {} · Updated {}", note_preview(note), format_short(&note.updated_at))?;
    Ok(())
}

fn write_note(out: &mut impl Write, note: &Note) -> Result<()> {
    writeln!(out, "{}", display_title(note))?;
    writeln!(out, "id:      {}", note.id)?;
    writeln!(out, "pinned:  {}", if note.pinned { "yes" } else { "no" })?;
    writeln!(out, "color:   {}", note.color.label())?;
    writeln!(out, "created: {}", format_long(&note.created_at))?;
    writeln!(out, "updated: {}", format_long(&note.updated_at))?;
    writeln!(out)?;
    writeln!(out, "{}", note.content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalNoteStore;

    async fn run_to_string(command: Command, store: &mut LocalNoteStore, input: &str) -> Result<String> {
        let mut out = Vec::new();
        let mut input = input.as_bytes();
        run(command, store, &mut out, &mut input).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["simple-notes", "new", "--title", "Plan", "--color", "amber"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::New(NoteFields {
                title: Some("Plan".to_string()),
                color: Some(NoteColor::Amber),
                ..NoteFields::default()
            }))
        );

        let cli = Cli::try_parse_from(["simple-notes"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[tokio::test]
    async fn list_shows_seeded_note() {
        let mut store = LocalNoteStore::in_memory();
        let out = run_to_string(Command::List { search: None }, &mut store, "").await.unwrap();
        assert!(out.contains("Welcome to Simple Notes"));
        assert!(out.starts_with("PIN "));
    }

    #[tokio::test]
    async fn list_search_without_matches() {
        let mut store = LocalNoteStore::in_memory();
        let out = run_to_string(
            Command::List { search: Some("zzz-nothing".to_string()) },
            &mut store,
            "",
        )
        .await
        .unwrap();
        assert_eq!(out, "No notes found.\n");
    }

    #[tokio::test]
    async fn show_unknown_id_is_not_found() {
        let mut store = LocalNoteStore::in_memory();
        let err = run_to_string(Command::Show { id: "nope".to_string() }, &mut store, "")
            .await
            .unwrap_err();
        assert!(matches!(err, NotesError::NotFound { .. }));
    }

    #[tokio::test]
    async fn edit_rejects_blank_title() {
        let mut store = LocalNoteStore::in_memory();
        let created = store.create(NotePatch::default().title("Plan")).await.unwrap();

        let err = run_to_string(
            Command::Edit {
                id: created.id,
                fields: NoteFields { title: Some("   ".to_string()), ..NoteFields::default() },
            },
            &mut store,
            "",
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Title cannot be empty.");
    }

    #[tokio::test]
    async fn rm_asks_before_deleting() {
        let mut store = LocalNoteStore::in_memory();
        let created = store.create(NotePatch::default().title("Plan")).await.unwrap();

        let out = run_to_string(Command::Rm { id: created.id.clone(), yes: false }, &mut store, "n\n")
            .await
            .unwrap();
        assert!(out.ends_with("Cancelled.\n"));
        assert!(store.get(&created.id).await.unwrap().is_some());

        run_to_string(Command::Rm { id: created.id.clone(), yes: false }, &mut store, "y\n")
            .await
            .unwrap();
        assert!(store.get(&created.id).await.unwrap().is_none());
    }
}
