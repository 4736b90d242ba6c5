//! Command Tests
//!
//! Tests for command parsing and response rendering.

use filemap::command::{split_line, Command, Response};
use filemap::CommandError;

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_put() {
    assert_eq!(
        Command::parse("put key value").unwrap(),
        Some(Command::Put {
            key: "key".to_string(),
            value: "value".to_string(),
        })
    );
}

#[test]
fn test_parse_collapses_whitespace() {
    assert_eq!(
        Command::parse("  get \t  key  ").unwrap(),
        Some(Command::Get {
            key: "key".to_string()
        })
    );
}

#[test]
fn test_parse_remove_list_exit() {
    assert_eq!(
        Command::parse("remove k").unwrap(),
        Some(Command::Remove {
            key: "k".to_string()
        })
    );
    assert_eq!(Command::parse("list").unwrap(), Some(Command::List));
    assert_eq!(Command::parse("exit").unwrap(), Some(Command::Exit));
}

#[test]
fn test_parse_blank() {
    assert_eq!(Command::parse("").unwrap(), None);
    assert_eq!(Command::parse("   ").unwrap(), None);
}

#[test]
fn test_parse_wrong_arity() {
    let cases = [
        ("put k", "put"),
        ("put k v extra", "put"),
        ("get", "get"),
        ("get a b", "get"),
        ("remove", "remove"),
        ("list x", "list"),
        ("exit now", "exit"),
    ];

    for (text, command) in cases {
        assert_eq!(
            Command::parse(text),
            Err(CommandError::WrongArity {
                command: command.to_string()
            }),
            "parsing {:?}",
            text
        );
    }
}

#[test]
fn test_parse_unknown() {
    let err = Command::parse("frobnicate a b").unwrap_err();

    assert_eq!(err, CommandError::Unknown("frobnicate".to_string()));
    assert_eq!(err.to_string(), "frobnicate: invalid command");
}

#[test]
fn test_parse_is_case_sensitive() {
    assert!(matches!(
        Command::parse("PUT a b"),
        Err(CommandError::Unknown(_))
    ));
}

#[test]
fn test_wrong_arity_message() {
    let err = Command::parse("get").unwrap_err();
    assert_eq!(err.to_string(), "get: wrong number of arguments");
}

#[test]
fn test_split_line() {
    let parts: Vec<&str> = split_line(" put a 1 ; get a;list ").collect();
    assert_eq!(parts, vec!["put a 1", "get a", "list"]);
}

// =============================================================================
// Response Rendering Tests
// =============================================================================

#[test]
fn test_response_display() {
    assert_eq!(Response::New.to_string(), "new");
    assert_eq!(
        Response::Overwrite("old".to_string()).to_string(),
        "overwrite\nold"
    );
    assert_eq!(Response::Found("v".to_string()).to_string(), "found\nv");
    assert_eq!(Response::NotFound.to_string(), "not found");
    assert_eq!(Response::Removed.to_string(), "removed");
}

#[test]
fn test_response_keys_display() {
    let keys = Response::Keys(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    assert_eq!(keys.to_string(), "a, b, c");
    assert_eq!(Response::Keys(Vec::new()).to_string(), "");
}
