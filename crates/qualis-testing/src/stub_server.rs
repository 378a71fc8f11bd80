//! Canned-response HTTP endpoint for fetch tests.
//!
//! Every request gets the same status and body. The listener runs on its
//! own thread with a private runtime, so it serves both `#[tokio::test]`
//! code in this process and CLI binaries spawned by `assert_cmd`.
//! Dropping the server stops the listener and joins its thread.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::JoinHandle;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

pub struct StubServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl StubServer {
    /// Start serving `body` with `status` on an ephemeral localhost port.
    pub fn start(status: u16, body: impl Into<String>) -> Result<Self> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let body: Arc<str> = Arc::from(body.into());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_io()
            .build()?;

        let (shutdown, mut stop) = oneshot::channel::<()>();

        let thread = std::thread::spawn(move || {
            runtime.block_on(async move {
                let Ok(listener) = TcpListener::from_std(listener) else {
                    return;
                };
                loop {
                    let stream = tokio::select! {
                        _ = &mut stop => break,
                        accepted = listener.accept() => match accepted {
                            Ok((stream, _)) => stream,
                            Err(_) => break,
                        },
                    };
                    counter.fetch_add(1, Ordering::SeqCst);
                    let body = Arc::clone(&body);
                    tokio::spawn(async move {
                        let _ = respond(stream, status, &body).await;
                    });
                }
            });
        });

        Ok(Self {
            addr,
            hits,
            shutdown: Some(shutdown),
            thread: Some(thread),
        })
    }

    /// Serve a JSON document with status 200.
    pub fn json(document: &serde_json::Value) -> Result<Self> {
        Self::start(200, document.to_string())
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Number of connections accepted so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

async fn respond(mut stream: TcpStream, status: u16, body: &str) -> std::io::Result<()> {
    // Read until the end of the request head; bodies are never sent by the client.
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let response = format!(
        "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
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
