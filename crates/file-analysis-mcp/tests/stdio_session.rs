use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::process::{ChildStdout, Command, Stdio};

use serde_json::{json, Value};
use tempfile::TempDir;

/// Read newline-delimited JSON-RPC messages until the response for `id`.
fn read_response(reader: &mut BufReader<ChildStdout>, id: u64) -> Value {
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader.read_line(&mut line).expect("read from server");
        assert!(n > 0, "server closed stdout before answering request {id}");
        let message: Value = serde_json::from_str(line.trim()).expect("valid JSON-RPC line");
        if message["id"] == json!(id) {
            return message;
        }
    }
}

/// Integration test: drive the stdio server through initialize, a tool call
/// and a resource read, the way an MCP host does.
#[test]
fn stdio_session_serves_tools_and_resources() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, "hello world\n").unwrap();
    let path = path.to_str().unwrap().to_string();

    let mut child = Command::new(env!("CARGO_BIN_EXE_file-analysis-mcp"))
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn server");
    let mut stdin = child.stdin.take().unwrap();
    let mut stdout = BufReader::new(child.stdout.take().unwrap());

    let mut send = |message: Value| {
        writeln!(stdin, "{message}").unwrap();
        stdin.flush().unwrap();
    };

    send(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "integration-test", "version": "0.0.0"}
        }
    }));
    let init = read_response(&mut stdout, 1);
    assert!(init["result"]["capabilities"]["tools"].is_object());
    assert!(init["result"]["capabilities"]["resources"].is_object());
    assert_eq!(init["result"]["serverInfo"]["name"], "file-analysis-mcp");

    send(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}));

    send(json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/call",
        "params": {"name": "read_file", "arguments": {"file_path": path}}
    }));
    let call = read_response(&mut stdout, 2);
    assert_eq!(call["result"]["content"][0]["text"], "hello world\n");

    send(json!({
        "jsonrpc": "2.0",
        "id": 3,
        "method": "resources/read",
        "params": {"uri": format!("file://{path}")}
    }));
    let read = read_response(&mut stdout, 3);
    assert_eq!(read["result"]["contents"][0]["text"], "hello world\n");

    send(json!({
        "jsonrpc": "2.0",
        "id": 4,
        "method": "tools/call",
        "params": {"name": "read_file", "arguments": {"file_path": "no-such-file.txt"}}
    }));
    let missing = read_response(&mut stdout, 4);
    assert_eq!(missing["result"]["isError"], true);
    assert_eq!(
        missing["result"]["content"][0]["text"],
        "Error: File not found at no-such-file.txt"
    );

    drop(send);
    drop(stdin);
    let _ = child.wait();
}
