//! Contract tests for the on-device note store against a real directory.

use simple_notes::storage::{FileKeyValueStore, LocalNoteStore, NoteStore, SEED_TITLE, STORAGE_KEY};
use simple_notes::{NoteColor, NotePatch, NotesError};

fn notes_file(dir: &std::path::Path) -> std::path::PathBuf {
    FileKeyValueStore::new(dir).path_for(STORAGE_KEY)
}

#[tokio::test]
async fn empty_store_lists_the_welcome_note() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalNoteStore::open(dir.path());

    let notes = store.list().await.unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, SEED_TITLE);
    assert!(notes[0].pinned);
    assert!(notes_file(dir.path()).exists());
}

#[tokio::test]
async fn create_then_get_normalizes_title_only() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalNoteStore::open(dir.path());

    let created = store
        .create(NotePatch::default().title("  Weekly   plan ").content("  keep  spacing \n"))
        .await
        .unwrap();
    let fetched = store.get(&created.id).await.unwrap().unwrap();

    assert_eq!(fetched.title, "Weekly plan");
    assert_eq!(fetched.content, "  keep  spacing \n");
    assert_eq!(fetched.color, NoteColor::Blue);
    assert!(!fetched.pinned);
    assert_eq!(fetched.created_at, fetched.updated_at);
}

#[tokio::test]
async fn notes_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let id = {
        let mut store = LocalNoteStore::open(dir.path());
        store.create(NotePatch::default().title("Kept")).await.unwrap().id
    };

    let mut reopened = LocalNoteStore::open(dir.path());
    let note = reopened.get(&id).await.unwrap();

    assert_eq!(note.map(|n| n.title), Some("Kept".to_string()));
}

#[tokio::test]
async fn pinned_notes_come_first() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        notes_file(dir.path()),
        r#"[
            {"id":"b","title":"B","content":"","createdAt":"2026-02-01T00:00:00.000Z","updatedAt":"2026-02-01T00:00:00.000Z","pinned":false,"color":"blue"},
            {"id":"a","title":"A","content":"","createdAt":"2026-01-01T00:00:00.000Z","updatedAt":"2026-01-01T00:00:00.000Z","pinned":true,"color":"amber"}
        ]"#,
    )
    .unwrap();
    let mut store = LocalNoteStore::open(dir.path());

    let ids: Vec<String> = store.list().await.unwrap().into_iter().map(|n| n.id).collect();

    assert_eq!(ids, ["a", "b"]);
}

#[tokio::test]
async fn updating_a_missing_note_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalNoteStore::open(dir.path());
    store.create(NotePatch::default().title("Only")).await.unwrap();
    let before = std::fs::read_to_string(notes_file(dir.path())).unwrap();

    let err = store
        .update("missing-id", NotePatch::default().title("x"))
        .await
        .unwrap_err();

    assert!(matches!(err, NotesError::NotFound { .. }));
    assert_eq!(std::fs::read_to_string(notes_file(dir.path())).unwrap(), before);
}

#[tokio::test]
async fn deleting_twice_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalNoteStore::open(dir.path());
    let keep = store.create(NotePatch::default().title("Keep")).await.unwrap();
    let gone = store.create(NotePatch::default().title("Gone")).await.unwrap();

    store.delete(&gone.id).await.unwrap();
    let after_first = std::fs::read_to_string(notes_file(dir.path())).unwrap();
    store.delete(&gone.id).await.unwrap();

    assert_eq!(std::fs::read_to_string(notes_file(dir.path())).unwrap(), after_first);
    assert!(store.get(&gone.id).await.unwrap().is_none());
    assert!(store.get(&keep.id).await.unwrap().is_some());
}

#[tokio::test]
async fn malformed_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(notes_file(dir.path()), "{\"not\": \"an array\"}").unwrap();
    let mut store = LocalNoteStore::open(dir.path());

    let notes = store.list().await.unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, SEED_TITLE);
}

#[tokio::test]
async fn non_utf8_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(notes_file(dir.path()), [0xff, 0xfe, b'[']).unwrap();
    let mut store = LocalNoteStore::open(dir.path());

    let notes = store.list().await.unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, SEED_TITLE);
}

#[tokio::test]
async fn null_field_keeps_every_note() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        notes_file(dir.path()),
        r#"[
            {"id":"a","title":"Keep me","content":null,"createdAt":"2026-02-01T00:00:00.000Z","updatedAt":"2026-02-01T00:00:00.000Z","pinned":false,"color":"blue"},
            {"id":"b","title":"Also keep","content":"","createdAt":"2026-01-01T00:00:00.000Z","updatedAt":"2026-01-01T00:00:00.000Z","pinned":false,"color":"amber"}
        ]"#,
    )
    .unwrap();
    let mut store = LocalNoteStore::open(dir.path());

    let notes = store.list().await.unwrap();
    store.create(NotePatch::default().title("New")).await.unwrap();

    let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["Keep me", "Also keep"]);
    let on_disk = std::fs::read_to_string(notes_file(dir.path())).unwrap();
    assert!(on_disk.contains("Keep me"));
    assert!(on_disk.contains("Also keep"));
    assert!(!on_disk.contains(SEED_TITLE));
}

#[tokio::test]
async fn update_merges_patch_fields() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalNoteStore::open(dir.path());
    let created = store
        .create(NotePatch::default().title("Draft").content("body"))
        .await
        .unwrap();

    let updated = store
        .update(&created.id, NotePatch::default().pinned(true).color(NoteColor::Amber))
        .await
        .unwrap();

    assert_eq!(updated.title, "Draft");
    assert_eq!(updated.content, "body");
    assert!(updated.pinned);
    assert_eq!(updated.color, NoteColor::Amber);
    assert!(updated.updated_at >= updated.created_at);
}
