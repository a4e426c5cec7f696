use super::error::DecodeError;
use super::value::Value;
use bytes::Bytes;
use std::collections::BTreeMap;

const MAX_DEPTH: usize = 64;

/// Decodes a single bencode value that spans the whole of `data`.
///
/// Decoding is strict: anything a canonical encoder would not have produced
/// (padded numbers, unsorted or duplicate dictionary keys, trailing bytes) is
/// rejected, so a successfully decoded value always re-encodes to `data`.
///
/// # Errors
///
/// Returns a [`DecodeError`] describing the first malformed construct.
///
/// # Examples
///
/// ```
/// use torrent_mover::bencode::{decode, DecodeError};
///
/// let value = decode(b"d9:directory5:/datae").unwrap();
/// assert_eq!(value.get(b"directory").and_then(|v| v.as_str()), Some("/data"));
///
/// assert_eq!(decode(b"5:abc"), Err(DecodeError::UnexpectedEof(5)));
/// ```
pub fn decode(data: &[u8]) -> Result<Value, DecodeError> {
    let mut pos = 0;
    let value = decode_value(data, &mut pos, 0)?;

    if pos != data.len() {
        return Err(DecodeError::TrailingData(pos));
    }

    Ok(value)
}

fn decode_value(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, DecodeError> {
    if depth > MAX_DEPTH {
        return Err(DecodeError::NestingTooDeep);
    }

    if *pos >= data.len() {
        return Err(DecodeError::UnexpectedEof(*pos));
    }

    match data[*pos] {
        b'i' => decode_integer(data, pos),
        b'l' => decode_list(data, pos, depth),
        b'd' => decode_dict(data, pos, depth),
        b'0'..=b'9' => decode_bytes(data, pos).map(Value::Bytes),
        c => Err(DecodeError::UnexpectedChar {
            offset: *pos,
            ch: c as char,
        }),
    }
}

fn decode_integer(data: &[u8], pos: &mut usize) -> Result<Value, DecodeError> {
    *pos += 1;

    let start = *pos;
    while *pos < data.len() && data[*pos] != b'e' {
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(DecodeError::UnexpectedEof(*pos));
    }

    let invalid = |reason: &str| DecodeError::InvalidInteger {
        offset: start,
        reason: reason.into(),
    };

    let token = &data[start..*pos];
    let digits = token.strip_prefix(b"-").unwrap_or(token);

    if digits.is_empty() {
        return Err(invalid("empty"));
    }

    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid("non-digit character"));
    }

    if token.starts_with(b"-0") || (digits[0] == b'0' && digits.len() > 1) {
        return Err(invalid("leading zeros"));
    }

    // Only ASCII remains at this point.
    let int_str = std::str::from_utf8(token).map_err(|_| invalid("invalid utf8"))?;
    let value: i64 = int_str.parse().map_err(|_| invalid("out of range"))?;

    *pos += 1;
    Ok(Value::Integer(value))
}

fn decode_bytes(data: &[u8], pos: &mut usize) -> Result<Bytes, DecodeError> {
    let start = *pos;
    while *pos < data.len() && data[*pos] != b':' {
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(DecodeError::UnexpectedEof(*pos));
    }

    let prefix = &data[start..*pos];
    if !prefix.iter().all(u8::is_ascii_digit) || (prefix.len() > 1 && prefix[0] == b'0') {
        return Err(DecodeError::InvalidStringLength(start));
    }

    let len: usize = std::str::from_utf8(prefix)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(DecodeError::InvalidStringLength(start))?;

    *pos += 1;

    if len > data.len() - *pos {
        return Err(DecodeError::UnexpectedEof(data.len()));
    }

    let bytes = Bytes::copy_from_slice(&data[*pos..*pos + len]);
    *pos += len;

    Ok(bytes)
}

fn decode_list(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, DecodeError> {
    *pos += 1;
    let mut list = Vec::new();

    while *pos < data.len() && data[*pos] != b'e' {
        list.push(decode_value(data, pos, depth + 1)?);
    }

    if *pos >= data.len() {
        return Err(DecodeError::UnexpectedEof(*pos));
    }

    *pos += 1;
    Ok(Value::List(list))
}

fn decode_dict(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, DecodeError> {
    *pos += 1;
    let mut dict: BTreeMap<Bytes, Value> = BTreeMap::new();

    while *pos < data.len() && data[*pos] != b'e' {
        let key_start = *pos;
        if !data[*pos].is_ascii_digit() {
            return Err(DecodeError::NonStringKey(key_start));
        }
        let key = decode_bytes(data, pos)?;

        // BTreeMap iterates in key order, so the last entry is the largest key so far.
        if let Some((last, _)) = dict.last_key_value() {
            if key <= *last {
                return Err(DecodeError::UnsortedKey(key_start));
            }
        }

        let value = decode_value(data, pos, depth + 1)?;
        dict.insert(key, value);
    }

    if *pos >= data.len() {
        return Err(DecodeError::UnexpectedEof(*pos));
    }

    *pos += 1;
    Ok(Value::Dict(dict))
}
