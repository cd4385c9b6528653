use bytes::{Buf, BufMut};
use commonware_codec::{Error, ReadExt, Write};

/// Writes `s` as a u16 length prefix followed by its UTF-8 bytes.
///
/// Callers bound string lengths well below `u16::MAX` (see [super::MAX_PLAYER_ID_LENGTH]).
pub fn write_string(s: &str, writer: &mut impl BufMut) {
    let bytes = s.as_bytes();
    (bytes.len() as u16).write(writer);
    writer.put_slice(bytes);
}

/// Reads a string written by [write_string], rejecting anything longer than `max_len`.
pub fn read_string(reader: &mut impl Buf, max_len: usize) -> Result<String, Error> {
    let len = u16::read(reader)? as usize;
    if len > max_len {
        return Err(Error::Invalid("String", "too long"));
    }
    if reader.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    let mut bytes = vec![0u8; len];
    reader.copy_to_slice(&mut bytes);
    String::from_utf8(bytes).map_err(|_| Error::Invalid("String", "invalid UTF-8"))
}

pub fn string_encode_size(s: &str) -> usize {
    2 + s.len()
}
