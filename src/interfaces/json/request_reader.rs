use crate::domain::request::PaymentRequest;
use crate::error::{PaymentError, Result};
use std::io::{BufRead, BufReader, Read};

/// Reads payment requests from a JSON Lines source.
///
/// Each non-empty line holds one request object, spelled the way it would
/// arrive in a JSON body. Undecodable lines surface as `Err` items without
/// ending the stream.
pub struct RequestReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Returns an iterator that lazily reads and decodes requests, skipping
    /// blank lines.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader.lines().filter_map(|line| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(serde_json::from_str(&line).map_err(PaymentError::from)),
            Err(e) => Some(Err(PaymentError::from(e))),
        })
    }
}
