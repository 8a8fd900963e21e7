//! Decoding response bodies into typed values.

use crate::Error;
use serde::de::DeserializeOwned;

/// Decodes a JSON body into `T`.
///
/// On failure the serde error is kept as the source of
/// [`Error::Decoding`] together with the raw body.
///
/// # Examples
///
/// ```
/// use netservice::decode;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Todo { title: String }
///
/// let todo: Todo = decode(br#"{"title":"Test"}"#).unwrap();
/// assert_eq!(todo.title, "Test");
///
/// assert!(decode::<Todo>(b"not json").is_err());
/// ```
pub fn decode<T>(bytes: &[u8]) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(|source| Error::Decoding {
        source,
        raw_response: String::from_utf8_lossy(bytes).into_owned(),
    })
}
