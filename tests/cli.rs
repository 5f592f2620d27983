use std::{
    io::{ErrorKind, Read, Write},
    net::TcpListener,
    thread::{self, JoinHandle},
};

use assert_cmd::Command;
use predicates::prelude::*;

/// Answers exactly one HTTP request with `status` and a JSON `body`, returning the request line.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buf = [0; 1024];
        while !request.ends_with(b"\r\n\r\n") {
            let n = socket.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        write!(
            socket,
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
        .unwrap();

        let request = String::from_utf8(request).unwrap();
        request.lines().next().unwrap_or_default().to_owned()
    });

    (url, handle)
}

fn github_activity() -> Command {
    Command::cargo_bin("github-activity").unwrap()
}

#[test]
fn missing_username() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    github_activity()
        .args(["--api-url", &url])
        .assert()
        .code(1)
        .stdout("Please provide a github username.\n");

    // nothing should have tried to reach the API
    listener.set_nonblocking(true).unwrap();
    let err = listener.accept().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WouldBlock);
}

#[test]
fn empty_username() {
    github_activity()
        .arg("")
        .assert()
        .code(1)
        .stdout("Please provide a github username.\n");
}

#[test]
fn user_not_found() {
    let (url, server) = serve_once("404 Not Found", r#"{"message":"Not Found"}"#);

    github_activity()
        .args(["--api-url", &url, "nobody"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "User not found. Please check the username.",
        ));

    assert_eq!(server.join().unwrap(), "GET /users/nobody/events HTTP/1.1");
}

#[test]
fn remote_error() {
    let (url, _server) = serve_once("500 Internal Server Error", "{}");

    github_activity()
        .args(["--api-url", &url, "octo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error fetching data: 500"));
}

#[test]
fn unreachable_api() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    github_activity()
        .args(["--api-url", &url, "octo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("An unknown error occurred."));
}

#[test]
fn prints_activity() {
    let (url, _server) = serve_once(
        "200 OK",
        r#"[
            {"type":"PushEvent","repo":{"name":"octo/hello"},"payload":{"commits":[{},{},{}]}},
            {"type":"IssuesEvent","repo":{"name":"octo/hello"},"payload":{"action":"closed"}},
            {"type":"CreateEvent","repo":{"name":"octo/hello"},"payload":{"ref_type":"tag"}},
            {"type":"DeleteEvent","repo":{"name":"octo/hello"},"payload":{}}
        ]"#,
    );

    github_activity()
        .args(["--api-url", &url, "octo"])
        .assert()
        .success()
        .stdout(
            "- Pushed 3 commit(s) to octo/hello .\n\
             - Closed an issue in octo/hello .\n\
             - Created tag in octo/hello .\n\
             - Delete in octo/hello .\n",
        );
}

#[test]
fn extra_arguments_are_ignored() {
    let (url, server) = serve_once(
        "200 OK",
        r#"[{"type":"WatchEvent","repo":{"name":"octo/hello"},"payload":null}]"#,
    );

    github_activity()
        .args(["--api-url", &url, "octo", "extra", "--whatever"])
        .assert()
        .success()
        .stdout("- Starred octo/hello .\n");

    assert_eq!(server.join().unwrap(), "GET /users/octo/events HTTP/1.1");
}

#[test]
fn no_recent_activity() {
    let (url, _server) = serve_once("200 OK", "[]");

    github_activity()
        .args(["--api-url", &url, "octo"])
        .assert()
        .success()
        .stdout("No recent activity found.\n");
}
