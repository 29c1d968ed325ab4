use std::fs;

use tempfile::{tempdir, TempDir};

use notes_core::crypto::{decrypt, encrypt, EncryptedRecord, MIN_RECORD_LEN};
use notes_core::rotation::{change_password, change_title_password};
use notes_core::{NoteLog, NotesError, SealedRecord, StoreConfig, TitledNotes};

struct TempStore {
    _dir: TempDir,
    config: StoreConfig,
}

impl TempStore {
    fn new() -> Self {
        let dir = tempdir().expect("temp dir should be available");
        let config = StoreConfig::new(dir.path().join("notes"), dir.path().join("notes.log.enc"));
        Self { _dir: dir, config }
    }

    fn titled(&self) -> TitledNotes {
        TitledNotes::new(&self.config)
    }

    fn log(&self) -> NoteLog {
        NoteLog::new(&self.config)
    }
}

#[test]
fn test_save_then_load_grocery() {
    let store = TempStore::new();
    let notes = store.titled();

    notes
        .save("grocery", "milk, eggs", "pw1")
        .expect("save should succeed");
    let content = notes.load("grocery", "pw1").expect("load should succeed");

    assert_eq!(content, "milk, eggs");
}

#[test]
fn test_load_with_wrong_password_fails() {
    let store = TempStore::new();
    let notes = store.titled();

    notes.save("grocery", "milk", "pw1").expect("save should succeed");
    let result = notes.load("grocery", "wrong");

    assert!(matches!(result, Err(NotesError::Authentication)));
}

#[test]
fn test_change_password_on_aggregate_log() {
    let store = TempStore::new();
    let log = store.log();

    log.append("buy milk", "pw1").expect("append should succeed");
    log.append("call mom", "pw1").expect("append should succeed");
    let before = log.load("pw1").expect("load should succeed");

    change_password(&log, "pw1", "pw2").expect("rotation should succeed");

    assert!(matches!(log.load("pw1"), Err(NotesError::Authentication)));
    assert_eq!(log.load("pw2").expect("load should succeed"), before);
}

#[test]
fn test_delete_after_load_removes_file() {
    let store = TempStore::new();
    let notes = store.titled();

    notes.save("grocery", "milk", "pw1").expect("save should succeed");
    notes.load("grocery", "pw1").expect("load should succeed");
    notes.delete("grocery", "pw1").expect("delete should succeed");

    assert!(!notes.exists("grocery"));
    assert!(notes.list().expect("list should succeed").is_empty());
}

#[test]
fn test_single_bit_flips_are_detected() {
    let store = TempStore::new();
    let notes = store.titled();
    notes
        .save("tamper", "the quick brown fox", "pw1")
        .expect("save should succeed");

    let path = notes.path_for("tamper").expect("valid title");
    let original = fs::read(&path).expect("read should succeed");

    // One bit in each region: salt, nonce, ciphertext, tag.
    let positions = [0, 31, 32, 43, 44, 50, original.len() - 16, original.len() - 1];
    for &byte in &positions {
        for bit in [0u8, 7] {
            let mut tampered = original.clone();
            tampered[byte] ^= 1 << bit;
            fs::write(&path, &tampered).expect("write should succeed");

            let result = notes.load("tamper", "pw1");
            assert!(
                matches!(result, Err(NotesError::Authentication)),
                "flip at byte {} bit {} was not detected",
                byte,
                bit
            );
        }
    }

    fs::write(&path, &original).expect("restore should succeed");
    assert_eq!(
        notes.load("tamper", "pw1").expect("load should succeed"),
        "the quick brown fox"
    );
}

#[test]
fn test_wrong_password_and_corruption_are_indistinguishable() {
    let blob = encrypt(b"secret", "pw1").expect("encrypt should succeed");
    let wrong_password = decrypt(&blob, "pw2").unwrap_err();

    let mut corrupted = blob.clone();
    let last = corrupted.len() - 1;
    corrupted[last] ^= 0x01;
    let corruption = decrypt(&corrupted, "pw1").unwrap_err();

    assert_eq!(wrong_password.to_string(), corruption.to_string());
    assert!(wrong_password.is_authentication());
    assert!(corruption.is_authentication());
}

#[test]
fn test_identical_saves_produce_different_bytes() {
    let store = TempStore::new();
    let notes = store.titled();
    let path = notes.path_for("same").expect("valid title");

    notes.save("same", "identical", "pw1").expect("save should succeed");
    let first = fs::read(&path).expect("read should succeed");
    notes.save("same", "identical", "pw1").expect("save should succeed");
    let second = fs::read(&path).expect("read should succeed");

    assert_ne!(first, second);
    let first = EncryptedRecord::parse(&first).expect("valid record");
    let second = EncryptedRecord::parse(&second).expect("valid record");
    assert_ne!(first.salt, second.salt);
    assert_ne!(first.nonce, second.nonce);
}

#[test]
fn test_undersized_file_is_format_error() {
    let store = TempStore::new();
    let notes = store.titled();
    notes.save("short", "x", "pw1").expect("save should succeed");

    let path = notes.path_for("short").expect("valid title");
    for len in [0, 32, 44, MIN_RECORD_LEN - 1] {
        fs::write(&path, vec![0u8; len]).expect("write should succeed");
        let result = notes.load("short", "pw1");
        assert!(matches!(result, Err(NotesError::Format(_))), "len {}", len);
    }
}

#[test]
fn test_on_disk_layout_and_no_plaintext() {
    let store = TempStore::new();
    let notes = store.titled();
    let content = "secret entry with marker: PLAINTEXT_MARKER_123";
    notes.save("layout", content, "pw1").expect("save should succeed");

    let on_disk = fs::read(notes.path_for("layout").expect("valid title")).expect("read");
    assert_eq!(on_disk.len(), MIN_RECORD_LEN + content.len());
    assert!(!String::from_utf8_lossy(&on_disk).contains("PLAINTEXT_MARKER_123"));
}

#[test]
fn test_list_exposes_titles_without_password() {
    let store = TempStore::new();
    let notes = store.titled();
    notes.save("work/plan", "a", "pw-a").expect("save");
    notes.save("home", "b", "pw-b").expect("save");

    assert_eq!(notes.list().expect("list"), vec!["home", "work_plan"]);
    assert!(notes.exists("work/plan"));
    assert!(notes.exists("work_plan"));
}

#[test]
fn test_titled_rotation_only_touches_one_title() {
    let store = TempStore::new();
    let notes = store.titled();
    notes.save("a", "alpha", "pw1").expect("save");
    notes.save("b", "beta", "pw1").expect("save");
    let b_before = fs::read(notes.path_for("b").expect("valid")).expect("read");

    change_title_password(&notes, "a", "pw1", "pw2").expect("rotate");

    assert_eq!(notes.load("a", "pw2").expect("load"), "alpha");
    assert_eq!(fs::read(notes.path_for("b").expect("valid")).expect("read"), b_before);
}

#[test]
fn test_aggregate_lifecycle() {
    let store = TempStore::new();
    let log = store.log();
    assert!(!log.is_initialized());
    assert!(matches!(log.entries("pw1"), Err(NotesError::NotInitialized(_))));

    log.initialize("pw1").expect("initialize");
    assert!(log.is_initialized());
    assert!(log.entries("pw1").expect("entries").is_empty());

    log.append("Buy milk", "pw1").expect("append");
    log.append("Dentist at 3", "pw1").expect("append");

    let found = log.find("MILK", "pw1").expect("find");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text, "Buy milk");
    assert!(found[0].timestamp.is_some());

    log.delete("pw1").expect("delete");
    assert!(!log.exists());
}
