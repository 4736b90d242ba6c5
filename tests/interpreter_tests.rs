//! Tests for Interpreter
//!
//! These tests verify:
//! - Command execution against a Store
//! - `;`-separated lines, `exit` handling
//! - Batch vs interactive error policy

use filemap::command::{Command, Response};
use filemap::interpreter::{Flow, Interpreter, Mode};
use filemap::{FilemapError, Store};

// =============================================================================
// Helper Functions
// =============================================================================

/// Run one line, returning (flow or error, stdout, stderr)
fn run_line(store: &mut Store, mode: Mode, line: &str) -> (filemap::Result<Flow>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let flow = Interpreter::new(store, mode).run_line(line, &mut out, &mut err);
    (
        flow,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

// =============================================================================
// Execute Tests
// =============================================================================

#[test]
fn test_execute_put_get_remove() {
    let mut store = Store::new();
    let mut interpreter = Interpreter::new(&mut store, Mode::Interactive);

    let put = |k: &str, v: &str| Command::Put {
        key: k.to_string(),
        value: v.to_string(),
    };

    assert_eq!(interpreter.execute(put("k", "v1")), Some(Response::New));
    assert_eq!(
        interpreter.execute(put("k", "v2")),
        Some(Response::Overwrite("v1".to_string()))
    );
    assert_eq!(
        interpreter.execute(Command::Get { key: "k".to_string() }),
        Some(Response::Found("v2".to_string()))
    );
    assert_eq!(
        interpreter.execute(Command::Remove { key: "k".to_string() }),
        Some(Response::Removed)
    );
    assert_eq!(
        interpreter.execute(Command::Remove { key: "k".to_string() }),
        Some(Response::NotFound)
    );
    assert_eq!(interpreter.execute(Command::Exit), None);
}

#[test]
fn test_execute_list() {
    let mut store: Store = [("b", "2"), ("a", "1")].into_iter().collect();
    let mut interpreter = Interpreter::new(&mut store, Mode::Batch);

    assert_eq!(
        interpreter.execute(Command::List),
        Some(Response::Keys(vec!["a".to_string(), "b".to_string()]))
    );
}

// =============================================================================
// Line Tests
// =============================================================================

#[test]
fn test_run_line_scenario() {
    let mut store = Store::new();

    let (flow, out, err) = run_line(
        &mut store,
        Mode::Batch,
        "put a 1; put b 2; list; remove a; get a; get b",
    );

    assert_eq!(flow.unwrap(), Flow::Continue);
    assert_eq!(out, "new\nnew\na, b\nremoved\nnot found\nfound\n2\n");
    assert!(err.is_empty());
}

#[test]
fn test_run_line_overwrite_prints_previous() {
    let mut store = Store::new();

    let (_, out, _) = run_line(&mut store, Mode::Interactive, "put k old; put k new");

    assert_eq!(out, "new\noverwrite\nold\n");
    assert_eq!(store.get("k"), Some("new"));
}

#[test]
fn test_run_line_list_empty_prints_empty_line() {
    let mut store = Store::new();

    let (_, out, _) = run_line(&mut store, Mode::Interactive, "list");

    assert_eq!(out, "\n");
}

#[test]
fn test_run_line_skips_blank_commands() {
    let mut store = Store::new();

    let (flow, out, err) = run_line(&mut store, Mode::Batch, "put a 1;; ;");

    assert_eq!(flow.unwrap(), Flow::Continue);
    assert_eq!(out, "new\n");
    assert!(err.is_empty());
}

#[test]
fn test_run_line_exit_stops_line() {
    let mut store = Store::new();

    let (flow, out, _) = run_line(&mut store, Mode::Interactive, "put a 1; exit; put b 2");

    assert_eq!(flow.unwrap(), Flow::Exit);
    assert_eq!(out, "new\n");
    assert_eq!(store.get("b"), None);
}

#[test]
fn test_wrong_arity_interactive_continues() {
    let mut store = Store::new();

    let (flow, out, err) = run_line(&mut store, Mode::Interactive, "get; put a 1");

    assert_eq!(flow.unwrap(), Flow::Continue);
    assert_eq!(out, "new\n");
    assert_eq!(err, "get: wrong number of arguments\n");
}

#[test]
fn test_wrong_arity_batch_is_fatal() {
    let mut store = Store::new();

    let (flow, out, err) = run_line(&mut store, Mode::Batch, "put a 1; put b; put c 3");

    assert!(matches!(flow, Err(FilemapError::Command(_))));
    assert_eq!(out, "new\n");
    assert_eq!(err, "put: wrong number of arguments\n");
    assert_eq!(store.get("c"), None);
}

#[test]
fn test_unknown_command_is_reported_and_ignored() {
    let mut store = Store::new();

    let (flow, out, err) = run_line(&mut store, Mode::Batch, "dance; put a 1");

    assert_eq!(flow.unwrap(), Flow::Continue);
    assert_eq!(out, "new\n");
    assert_eq!(err, "dance: invalid command\n");
}

// =============================================================================
// Interactive Loop Tests
// =============================================================================

#[test]
fn test_run_interactive_until_exit() {
    let mut store = Store::new();
    let mut out = Vec::new();
    let mut err = Vec::new();

    Interpreter::new(&mut store, Mode::Interactive)
        .run_interactive(&b"put x 1\nget x\nexit\nput y 2\n"[..], "$ ", &mut out, &mut err)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "$ new\n$ found\n1\n$ ");
    assert_eq!(store.get("y"), None);
}

#[test]
fn test_run_interactive_end_of_input() {
    let mut store = Store::new();
    let mut out = Vec::new();
    let mut err = Vec::new();

    Interpreter::new(&mut store, Mode::Interactive)
        .run_interactive(&b"put x 1"[..], "> ", &mut out, &mut err)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "> new\n> ");
    assert_eq!(store.get("x"), Some("1"));
}
