use std::fs;

use vimkit::Error;
use vimkit::host::{MemoryHost, WriterHost};
use vimkit::prelude::*;

#[test]
fn test_let_serializable_into_host() {
    #[derive(serde::Serialize)]
    struct Hit {
        file: String,
        line: u32,
        score: f64,
    }

    let hits = vec![
        Hit {
            file: "src/it's.rs".to_string(),
            line: 3,
            score: 0.75,
        },
        Hit {
            file: "a b.rs".to_string(),
            line: 10,
            score: 1.0,
        },
    ];
    let value = Value::from_serialize(&hits).unwrap();

    let mut host = MemoryHost::new();
    let_vim_repr(&mut host, "g:hits", &value).unwrap();
    assert_eq!(
        host.commands(),
        [
            "let g:hits = [{'file': 'src/it''s.rs', 'line': 3, 'score': 0.75, }, \
             {'file': 'a b.rs', 'line': 10, 'score': 1.0, }]"
        ]
    );
}

#[test]
fn test_writer_host_emits_sourceable_lines() {
    let mut host = WriterHost::new(Vec::new());
    let_vim_repr(&mut host, "s:x", &Value::from(vec![1, 2])).unwrap();
    let_vim_repr(&mut host, "s:y", &Value::from("q'")).unwrap();
    let out = String::from_utf8(host.into_inner()).unwrap();
    assert_eq!(out, "let s:x = [1, 2]\nlet s:y = 'q'''\n");
}

#[test]
fn test_unsupported_value_never_reaches_host() {
    let err = repr_of(&serde_json::json!({"ok": 1, "flag": false})).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { type_name: "bool" }));
}

#[test]
fn test_escape_then_edit_command() {
    let cmd = format!("edit {}", escape_for_command("my \"notes\" it's.md"));
    assert_eq!(cmd, "edit my\\ \\\"notes\\\"\\ it\\'s.md");
}

#[test]
fn test_find_ancestor_from_working_directory() {
    // cargo runs integration tests from the package root
    let cwd = std::env::current_dir().unwrap();
    let found = find_ancestor("Cargo.toml", TargetKind::File).unwrap();
    assert_eq!(found, Some(cwd.join("Cargo.toml")));

    let found = find_ancestor("Cargo.toml", TargetKind::Dir).unwrap();
    assert_eq!(found, None);
}

#[test]
fn test_find_project_root_marker() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    let deep = dir.path().join("src").join("host").join("tests");
    fs::create_dir_all(&deep).unwrap();

    let found = find_ancestor_from(&deep, ".git", TargetKind::Dir, MatchMode::Joined).unwrap();
    assert_eq!(found, Some(dir.path().join(".git")));
}

#[test]
fn test_opened_files_from_buffer_dump() {
    let dir = tempfile::tempdir().unwrap();
    let kept = dir.path().join("kept.rs");
    let removed = dir.path().join("removed.rs");
    fs::write(&kept, "fn main() {}").unwrap();
    fs::write(&removed, "").unwrap();

    let dump = serde_json::json!([
        {"bufnr": 1, "name": kept, "options": {"buftype": ""}},
        {"bufnr": 2, "name": "[Scratch]", "options": {"buftype": "nofile"}},
        {"bufnr": 3, "name": kept, "options": {"buftype": "nofile"}},
        {"bufnr": 4, "name": removed, "options": {"buftype": ""}},
    ]);
    let dump_path = dir.path().join("buffers.json");
    fs::write(&dump_path, dump.to_string()).unwrap();
    fs::remove_file(&removed).unwrap();

    let host = MemoryHost::from_json_file(&dump_path).unwrap();
    assert_eq!(host.buffers().len(), 4);
    assert_eq!(list_opened_files(&host), vec![kept]);
}

#[test]
fn test_custom_host_option_lookup() {
    // A host that only knows buftype through its own lookup.
    struct Terminalish;

    impl Host for Terminalish {
        fn command(&mut self, _command: &str) -> Result<(), vimkit::HostError> {
            Ok(())
        }

        fn buffers(&self) -> Vec<BufferInfo> {
            vec![BufferInfo::new(1, "Cargo.toml")]
        }

        fn buffer_option(&self, _buffer: &BufferInfo, name: &str) -> Option<String> {
            (name == "buftype").then(|| "terminal".to_string())
        }
    }

    assert!(list_opened_files(&Terminalish).is_empty());
}
