//! Test doubles shared by the integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use analysis_workbench_core::{
    AnalysisKind, AnalysisProvider, ProviderError, ProviderMode, ProviderResult, ResultModel,
    Token,
};

/// Provider whose calls resolve only when the test releases them.
///
/// Each call is keyed by its source text; `gate(text)` returns the sender that
/// resolves the call made with that text.
#[derive(Default)]
pub struct GatedProvider {
    gates: Mutex<HashMap<String, oneshot::Receiver<ProviderResult<ResultModel>>>>,
    calls: AtomicUsize,
}

impl GatedProvider {
    pub fn gate(&self, text: &str) -> oneshot::Sender<ProviderResult<ResultModel>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(text.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisProvider for GatedProvider {
    fn name(&self) -> &'static str {
        "gated"
    }

    fn mode(&self) -> ProviderMode {
        ProviderMode::Simulated
    }

    async fn fetch(&self, _kind: AnalysisKind, text: &str) -> ProviderResult<ResultModel> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().remove(text);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ProviderError::network("gate dropped"))),
            None => Err(ProviderError::network(format!("no gate for {:?}", text))),
        }
    }
}

/// Result carrying a single marker token.
pub fn marked(marker: &str) -> ResultModel {
    ResultModel {
        tokens: vec![Token::new("IDENTIFIER", marker).at_line(1)],
        ..Default::default()
    }
}

/// Serve one HTTP exchange per entry of `responses`, in order, and return the
/// base URL.
pub async fn stub_service(responses: Vec<(&'static str, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        for (status_line, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        }
    });
    format!("http://{}", addr)
}

async fn read_request(socket: &mut tokio::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    line.to_ascii_lowercase()
                        .strip_prefix("content-length:")
                        .and_then(|v| v.trim().parse::<usize>().ok())
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                return;
            }
        }
    }
}
