use crate::domain::operation::Operation;
use crate::error::{ReplayError, Result};
use std::io::Read;

/// Reads wallet operations from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths, so
/// `balance,` and `balance` are both accepted.
pub struct OperationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OperationReader<R> {
    /// Creates a new `OperationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes operations.
    ///
    /// A malformed row yields an error item; the rows after it are still read.
    pub fn operations(self) -> impl Iterator<Item = Result<Operation>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ReplayError::from))
    }
}
