//! # Response Sinks
//!
//! The abstract destination a response is written to, plus a recording
//! implementation for tests and embedders without a live connection.

use std::io;
use std::sync::{Arc, Mutex};

use crate::response::envelope::Envelope;

/// Destination for one HTTP response.
///
/// Implementations are supplied by the embedding handler layer. A full
/// emission calls `set_header`, then `write_status`, then `write_body`;
/// the status line is committed exactly once per response.
pub trait ResponseSink {
    /// Set a response header, replacing any previous value for the name.
    fn set_header(&mut self, name: &str, value: &str);

    /// Commit the HTTP status line.
    fn write_status(&mut self, status: u16);

    /// Append body bytes to the response stream.
    fn write_body(&mut self, body: &[u8]) -> io::Result<()>;
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn set_header(&mut self, name: &str, value: &str) {
        (**self).set_header(name, value);
    }

    fn write_status(&mut self, status: u16) {
        (**self).write_status(status);
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        (**self).write_body(body)
    }
}

impl<S: ResponseSink + ?Sized> ResponseSink for Box<S> {
    fn set_header(&mut self, name: &str, value: &str) {
        (**self).set_header(name, value);
    }

    fn write_status(&mut self, status: u16) {
        (**self).write_status(status);
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        (**self).write_body(body)
    }
}

#[derive(Debug, Default)]
struct Recorded {
    status: Option<u16>,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
    body_writes: usize,
}

/// In-memory response sink for tests and capture.
///
/// Clones share the same recording, so a test can hand one clone to a
/// responder and inspect the other after emission.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    state: Arc<Mutex<Recorded>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed status code, if any.
    pub fn status(&self) -> Option<u16> {
        self.state.lock().unwrap().status
    }

    /// Look up a recorded header; names compare case-insensitively.
    pub fn header(&self, name: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }

    /// The recorded body bytes.
    pub fn body(&self) -> Vec<u8> {
        self.state.lock().unwrap().body.clone()
    }

    /// The recorded body as a UTF-8 string.
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body()).into_owned()
    }

    /// Decode the recorded body as an [`Envelope`].
    pub fn envelope(&self) -> Result<Envelope, serde_json::Error> {
        Envelope::from_slice(&self.body())
    }

    /// Number of body writes accepted.
    pub fn body_writes(&self) -> usize {
        self.state.lock().unwrap().body_writes
    }

    /// True while nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.status.is_none() && state.headers.is_empty() && state.body.is_empty()
    }
}

impl ResponseSink for MemorySink {
    fn set_header(&mut self, name: &str, value: &str) {
        let mut state = self.state.lock().unwrap();
        let existing = state
            .headers
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name));
        match existing {
            Some(i) => state.headers[i].1 = value.to_string(),
            None => state.headers.push((name.to_string(), value.to_string())),
        }
    }

    fn write_status(&mut self, status: u16) {
        let mut state = self.state.lock().unwrap();
        // First commit wins; a status line cannot be rewritten.
        if state.status.is_none() {
            state.status = Some(status);
        }
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.body.extend_from_slice(body);
        state.body_writes += 1;
        Ok(())
    }
}
