//! Minimal HTTP/1.1 stub server for integration tests.
//!
//! Serves one fixed response for every request and records the raw requests
//! (request line, headers, body) so tests can assert on what was sent.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl StubResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: Vec::new(),
        }
    }

    pub fn bytes(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: "application/octet-stream",
            body,
        }
    }
}

/// Starts a server in a background thread serving `response` for every
/// request. Returns the base URL (e.g. "http://127.0.0.1:12345/"). The
/// server runs until the process exits.
pub fn start(response: StubResponse) -> String {
    start_recording(response).0
}

/// Like `start`, but also returns the raw requests received so far.
pub fn start_recording(response: StubResponse) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = response.clone();
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &response, &recorded));
        }
    });
    (format!("http://127.0.0.1:{}/", port), requests)
}

fn handle(mut stream: std::net::TcpStream, response: &StubResponse, recorded: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let request = match read_request(&mut stream) {
        Some(r) => r,
        None => return,
    };
    if let Ok(mut log) = recorded.lock() {
        log.push(request);
    }

    let reason = match response.status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Response",
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason,
        response.body.len(),
        response.content_type
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
}

/// Reads one request: headers plus a Content-Length body if present.
fn read_request(stream: &mut std::net::TcpStream) -> Option<String> {
    let mut data: Vec<u8> = Vec::new();
    let mut buf = [0u8; 8192];

    let header_end = loop {
        let n = match stream.read(&mut buf) {
            Ok(0) => return None,
            Ok(n) => n,
            Err(_) => return None,
        };
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = find_header_end(&data) {
            break pos;
        }
        if data.len() > 64 * 1024 {
            return None;
        }
    };

    let headers = String::from_utf8_lossy(&data[..header_end]).to_string();
    let body_len = content_length(&headers).unwrap_or(0);
    let body_start = header_end + 4;
    while data.len() < body_start + body_len {
        let n = match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(_) => break,
        };
        data.extend_from_slice(&buf[..n]);
    }

    Some(String::from_utf8_lossy(&data).to_string())
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(headers: &str) -> Option<usize> {
    for line in headers.lines() {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                return value.trim().parse().ok();
            }
        }
    }
    None
}
