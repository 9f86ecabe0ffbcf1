//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed routing table: bodies with 200, redirects with a `Location`
//! header, or bare error statuses. Every connection is closed after one
//! response. Counts requests so tests can assert that none were made.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Route {
    /// 200 OK with this body.
    Body(Vec<u8>),
    /// Redirect with the given status (301/302/307/...) to a path or absolute URL.
    Redirect(u16, String),
    /// Bare status with an empty body.
    Status(u16),
}

pub struct PdfServer {
    base: String,
    hits: Arc<AtomicUsize>,
}

impl PdfServer {
    /// Starts a server in a background thread. Routes are keyed by request
    /// target (path plus query). Unknown targets get 404.
    pub fn start(routes: Vec<(&str, Route)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes: Arc<HashMap<String, Route>> = Arc::new(
            routes
                .into_iter()
                .map(|(target, route)| (target.to_string(), route))
                .collect(),
        );
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_srv = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                hits_srv.fetch_add(1, Ordering::SeqCst);
                thread::spawn(move || handle(stream, &routes));
            }
        });
        PdfServer {
            base: format!("http://127.0.0.1:{}", port),
            hits,
        }
    }

    /// Absolute URL for `target` (which must start with `/`).
    pub fn url(&self, target: &str) -> String {
        format!("{}{}", self.base, target)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let response = match routes.get(target) {
        Some(Route::Body(body)) => {
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/pdf\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let mut bytes = head.into_bytes();
            bytes.extend_from_slice(body);
            bytes
        }
        Some(Route::Redirect(code, location)) => format!(
            "HTTP/1.1 {} {}\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            code,
            reason(*code),
            location
        )
        .into_bytes(),
        Some(Route::Status(code)) => format!(
            "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            code,
            reason(*code)
        )
        .into_bytes(),
        None => b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec(),
    };
    let _ = stream.write_all(&response);
    let _ = stream.flush();
}

fn reason(code: u16) -> &'static str {
    match code {
        200 => "OK",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
