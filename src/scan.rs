use core::ops::Range;
use thiserror::Error;

/// A byte range into the buffer being scanned.
pub type Span = Range<usize>;

/// Objects and arrays nested deeper than this are rejected, so hostile
/// input cannot exhaust the call stack.
pub const MAX_DEPTH: usize = 128;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Not enough data for a complete value")]
    NotEnoughData,

    #[error("Unexpected byte {0:#04x} at offset {1}")]
    UnexpectedByte(u8, usize),

    #[error("Unterminated string starting at offset {0}")]
    UnterminatedString(usize),

    #[error("Invalid escape sequence at offset {0}")]
    InvalidEscape(usize),

    #[error("Control character {0:#04x} in string at offset {1}")]
    ControlCharacter(u8, usize),

    #[error("Nesting too deep at offset {0}")]
    TooDeep(usize),
}

/// Scan one JSON object starting at `offset`, reporting each member through
/// `on_member` as a (key span, value span) pair in source order.
///
/// Leading insignificant whitespace is skipped.  If the first significant
/// byte is not `{`, no input is consumed and `Ok(None)` is returned; the
/// caller decides whether that is an error.  Otherwise the whole object is
/// walked and `Ok(Some(end))` is returned, with `end` one past the closing
/// `}`.  Reported spans are token-tight: the key span covers the quoted key
/// string including its quotes, the value span covers exactly the value
/// token, and neither includes surrounding whitespace.
///
/// Members of containers nested inside values are skipped structurally and
/// not reported.
pub fn scan_object<F>(data: &[u8], offset: usize, mut on_member: F) -> Result<Option<usize>, Error>
where
    F: FnMut(Span, Span),
{
    let offset = skip_ws(data, offset);
    if data.get(offset) != Some(&b'{') {
        return Ok(None);
    }
    scan_object_body(data, offset, 0, &mut on_member).map(Some)
}

const fn is_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn skip_ws(data: &[u8], mut offset: usize) -> usize {
    while offset < data.len() && is_ws(data[offset]) {
        offset += 1;
    }
    offset
}

// `offset` is at the `{`; returns one past the matching `}`.
fn scan_object_body(
    data: &[u8],
    offset: usize,
    depth: usize,
    on_member: &mut dyn FnMut(Span, Span),
) -> Result<usize, Error> {
    let mut offset = skip_ws(data, offset + 1);
    if data.get(offset) == Some(&b'}') {
        return Ok(offset + 1);
    }
    loop {
        let key_start = offset;
        match data.get(offset) {
            Some(b'"') => offset = scan_string(data, offset)?,
            Some(&b) => return Err(Error::UnexpectedByte(b, offset)),
            None => return Err(Error::NotEnoughData),
        }
        let key = key_start..offset;

        offset = skip_ws(data, offset);
        match data.get(offset) {
            Some(b':') => offset = skip_ws(data, offset + 1),
            Some(&b) => return Err(Error::UnexpectedByte(b, offset)),
            None => return Err(Error::NotEnoughData),
        }

        let value_start = offset;
        offset = scan_value(data, offset, depth + 1)?;
        on_member(key, value_start..offset);

        offset = skip_ws(data, offset);
        match data.get(offset) {
            Some(b',') => offset = skip_ws(data, offset + 1),
            Some(b'}') => return Ok(offset + 1),
            Some(&b) => return Err(Error::UnexpectedByte(b, offset)),
            None => return Err(Error::NotEnoughData),
        }
    }
}

// `offset` is at the first byte of the value token.
fn scan_value(data: &[u8], offset: usize, depth: usize) -> Result<usize, Error> {
    if depth > MAX_DEPTH {
        return Err(Error::TooDeep(offset));
    }
    match data.get(offset) {
        Some(b'"') => scan_string(data, offset),
        Some(b'{') => scan_object_body(data, offset, depth, &mut |_, _| {}),
        Some(b'[') => scan_array(data, offset, depth),
        Some(b't') => scan_literal(data, offset, b"true"),
        Some(b'f') => scan_literal(data, offset, b"false"),
        Some(b'n') => scan_literal(data, offset, b"null"),
        Some(b'-' | b'0'..=b'9') => scan_number(data, offset),
        Some(&b) => Err(Error::UnexpectedByte(b, offset)),
        None => Err(Error::NotEnoughData),
    }
}

// `offset` is at the `[`; returns one past the matching `]`.
fn scan_array(data: &[u8], offset: usize, depth: usize) -> Result<usize, Error> {
    let mut offset = skip_ws(data, offset + 1);
    if data.get(offset) == Some(&b']') {
        return Ok(offset + 1);
    }
    loop {
        offset = scan_value(data, offset, depth + 1)?;
        offset = skip_ws(data, offset);
        match data.get(offset) {
            Some(b',') => offset = skip_ws(data, offset + 1),
            Some(b']') => return Ok(offset + 1),
            Some(&b) => return Err(Error::UnexpectedByte(b, offset)),
            None => return Err(Error::NotEnoughData),
        }
    }
}

// `offset` is at the opening quote; returns one past the closing quote.
fn scan_string(data: &[u8], offset: usize) -> Result<usize, Error> {
    let start = offset;
    let mut offset = offset + 1;
    while let Some(&b) = data.get(offset) {
        match b {
            b'"' => return Ok(offset + 1),
            b'\\' => match data.get(offset + 1) {
                Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => offset += 2,
                Some(b'u') => {
                    let Some(digits) = data.get(offset + 2..offset + 6) else {
                        return Err(Error::UnterminatedString(start));
                    };
                    if !digits.iter().all(|d| d.is_ascii_hexdigit()) {
                        return Err(Error::InvalidEscape(offset));
                    }
                    offset += 6;
                }
                Some(_) => return Err(Error::InvalidEscape(offset)),
                None => return Err(Error::UnterminatedString(start)),
            },
            b if b < 0x20 => return Err(Error::ControlCharacter(b, offset)),
            _ => offset += 1,
        }
    }
    Err(Error::UnterminatedString(start))
}

fn scan_literal(data: &[u8], offset: usize, literal: &'static [u8]) -> Result<usize, Error> {
    let end = offset + literal.len();
    match data.get(offset..end) {
        Some(s) if s == literal => Ok(end),
        Some(_) => Err(Error::UnexpectedByte(data[offset], offset)),
        None => Err(Error::NotEnoughData),
    }
}

// `offset` is at the `-` or first digit.
fn scan_number(data: &[u8], offset: usize) -> Result<usize, Error> {
    let mut end = offset;
    if data.get(end) == Some(&b'-') {
        end += 1;
    }
    let int_start = end;
    end = scan_digits(data, end)?;
    if data[int_start] == b'0' && end - int_start > 1 {
        // Leading zeros are not valid JSON
        return Err(Error::UnexpectedByte(data[int_start + 1], int_start + 1));
    }
    if data.get(end) == Some(&b'.') {
        end = scan_digits(data, end + 1)?;
    }
    if matches!(data.get(end), Some(b'e' | b'E')) {
        end += 1;
        if matches!(data.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        end = scan_digits(data, end)?;
    }
    Ok(end)
}

// At least one digit, then as many as follow.
fn scan_digits(data: &[u8], offset: usize) -> Result<usize, Error> {
    let mut end = offset;
    while matches!(data.get(end), Some(b'0'..=b'9')) {
        end += 1;
    }
    if end == offset {
        return match data.get(end) {
            Some(&b) => Err(Error::UnexpectedByte(b, end)),
            None => Err(Error::NotEnoughData),
        };
    }
    Ok(end)
}
