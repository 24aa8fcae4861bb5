use super::*;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input is syntactically something other than an object at the top
    /// level, e.g. a bare array or scalar.
    #[error("Expected a top-level object")]
    NotAnObject,

    /// The scanner found a structural syntax error somewhere in the buffer.
    #[error(transparent)]
    Malformed(#[from] scan::Error),
}

/// Decode `data` as a single JSON object, preserving member order.
///
/// Each member becomes an [`Entry`] whose key and value borrow the exact
/// byte spans of the source text, so numbers, escapes and nested structure
/// all survive re-encoding untouched.  A nested object value can be decoded
/// one level deeper by passing `entry.value` back into this function.
///
/// ```
/// let object = ordered_json::decode::parse(br#"{"b":1,"a":{"y":2,"x":3}}"#).unwrap();
/// assert_eq!(b"\"b\"", object[0].key);
/// assert_eq!(b"{\"y\":2,\"x\":3}", object[1].value);
/// ```
pub fn parse(data: &[u8]) -> Result<Object<'_>, Error> {
    parse_detail(data, 0).map(|(object, _)| object)
}

/// As [`parse`], but starting at `offset` and also returning the offset one
/// past the end of the object.  Content after that offset is not examined.
pub fn parse_detail(data: &[u8], offset: usize) -> Result<(Object<'_>, usize), Error> {
    let mut entries = Vec::new();
    match scan::scan_object(data, offset, |key, value| {
        entries.push(Entry {
            key: &data[key],
            value: &data[value],
        });
    })? {
        Some(end) => Ok((Object(entries), end)),
        None => Err(Error::NotAnObject),
    }
}
