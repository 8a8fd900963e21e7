//! Classifying a transport outcome into success bytes or an [`Error`].

use crate::transport::{RawResponse, TransportError};
use crate::Error;
use bytes::Bytes;
use std::ops::Range;

/// Lowest status code an acceptable range may start or end at.
pub const MIN_STATUS: u16 = 100;

/// Highest status code an acceptable range may start or end at.
pub const MAX_STATUS: u16 = 600;

/// Half-open interval of status codes treated as success.
///
/// Both bounds are clamped into `[100, 600]` on construction. The default is
/// `[200, 300)`.
///
/// # Examples
///
/// ```
/// use netservice::StatusRange;
///
/// assert_eq!(StatusRange::new(0..300).range(), 100..300);
/// assert_eq!(StatusRange::new(100..700).range(), 100..600);
/// assert!(StatusRange::default().contains(204));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRange(Range<u16>);

impl StatusRange {
    /// Creates a range, clamping both bounds into `[100, 600]`.
    pub fn new(range: Range<u16>) -> Self {
        let start = range.start.clamp(MIN_STATUS, MAX_STATUS);
        let end = range.end.clamp(MIN_STATUS, MAX_STATUS);
        Self(start..end)
    }

    /// Returns the stored, already clamped range.
    pub fn range(&self) -> Range<u16> {
        self.0.clone()
    }

    /// Returns `true` if `status` is inside the range.
    pub fn contains(&self, status: u16) -> bool {
        self.0.contains(&status)
    }
}

impl Default for StatusRange {
    fn default() -> Self {
        Self(200..300)
    }
}

impl From<Range<u16>> for StatusRange {
    fn from(range: Range<u16>) -> Self {
        Self::new(range)
    }
}

/// Maps a transport outcome to the response body or an error.
///
/// Checks run in order and the first failing one decides the error:
/// transport failure, missing status, unacceptable status, missing or empty
/// body.
pub fn classify(
    outcome: Result<RawResponse, TransportError>,
    acceptable: &StatusRange,
) -> Result<Bytes, Error> {
    let response = outcome.map_err(Error::DataTask)?;

    let status = response.status.ok_or(Error::Response)?;

    if !acceptable.contains(status) {
        return Err(Error::BadStatusCode(status));
    }

    response
        .body
        .filter(|body| !body.is_empty())
        .ok_or(Error::BadData)
}
