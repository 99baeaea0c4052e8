//! One-shot HTTP fixtures for integration tests.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// A server that answers exactly one request.
pub struct Fixture {
    /// Root address to hand to the verifier.
    pub base_url: String,
    requests: Receiver<String>,
}

impl Fixture {
    /// Raw request head (request line plus headers) the server received.
    pub fn request(&self) -> String {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("fixture received no request")
    }

    /// First line of the received request, e.g. `GET /verify/K1 HTTP/1.1`.
    pub fn request_line(&self) -> String {
        self.request().lines().next().unwrap_or_default().to_string()
    }
}

/// Serve one response with the given status code and body.
pub fn serve_once(status: u16, body: &'static str) -> Fixture {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind http fixture");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let head = read_head(&mut stream);
        let _ = tx.send(head);

        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason(status),
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush");
    });

    Fixture {
        base_url: format!("http://{}", addr),
        requests: rx,
    }
}

/// Accept one connection and never answer it within `hold`.
pub fn serve_silent(hold: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind http fixture");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let _ = read_head(&mut stream);
            thread::sleep(hold);
        }
    });

    format!("http://{}", addr)
}

/// An address nothing is listening on.
pub fn dead_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

fn read_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
