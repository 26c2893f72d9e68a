//! Test helpers.

use std::io::{
    Read,
    Write,
};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

/// Serve a single HTTP response on a local port.
///
/// Returns the badge service base URL pointing at the listener and a
/// receiver yielding the request line of the one request it answers.
pub fn serve_once(status: &str, body: &str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let response = format!(
        concat!(
            "HTTP/1.1 {}\r\n",
            "Content-Type: image/svg+xml\r\n",
            "Content-Length: {}\r\n",
            "Connection: close\r\n\r\n{}"
        ),
        status,
        body.len(),
        body
    );
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let text = String::from_utf8_lossy(&request);
        let request_line = text.lines().next().unwrap_or_default().to_string();
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        let _ = tx.send(request_line);
    });

    (format!("http://127.0.0.1:{}/badge", port), rx)
}
