use api_key_auth::extract_api_key;
use http::{HeaderMap, HeaderValue};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_success_logs_masked_key_only() {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Authorization",
        HeaderValue::from_static("ApiKey abcd1234efgh5678"),
    );

    let output = capture(|| {
        extract_api_key(&headers).unwrap();
    });

    assert!(output.contains("extracted api key"));
    assert!(output.contains("abcd...5678"));
    assert!(!output.contains("abcd1234efgh5678"));
}

#[test]
fn test_rejection_logs_reason() {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Authorization",
        HeaderValue::from_static("Bearer abcd1234efgh5678"),
    );

    let output = capture(|| {
        extract_api_key(&headers).unwrap_err();
    });

    assert!(output.contains("malformed authorization header"));
    assert!(!output.contains("abcd1234efgh5678"));
}
