//! Decoder
//!
//! Reads the key table until the running byte count reaches the first
//! offset, then slices the value blob along the remaining offsets.

use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};

use crate::error::{FilemapError, Result};
use crate::store::Store;

use super::{ENTRY_OVERHEAD, KEY_TERMINATOR, OFFSET_SIZE};

/// Decode a whole database image held in memory
pub fn decode_from_slice(bytes: &[u8]) -> Result<Store> {
    let mut store = Store::new();
    decode_into(bytes, bytes.len() as u64, &mut store)?;
    Ok(store)
}

/// Decode from a seekable source, using its end position as the file length
pub fn decode<R: Read + Seek>(reader: &mut R) -> Result<Store> {
    let file_len = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;

    let mut store = Store::new();
    decode_into(BufReader::new(reader), file_len, &mut store)?;
    Ok(store)
}

/// Decode `file_len` bytes from `reader` (positioned at offset 0) into `store`.
///
/// Values are inserted as they are read, so on a `CorruptFile` error the
/// store keeps the records that preceded the damage.
pub fn decode_into<R: BufRead>(mut reader: R, file_len: u64, store: &mut Store) -> Result<()> {
    if file_len == 0 {
        return Ok(());
    }

    // Key table: stop once `counter` reaches the first offset
    let mut counter: u64 = 0;
    let mut first_offset: Option<u64> = None;
    let mut keys = Vec::new();
    let mut offsets = Vec::new();

    loop {
        let key = read_key(&mut reader, counter)?;
        counter += key.len() as u64;

        let offset = read_offset(&mut reader, counter + 1)?;
        counter += ENTRY_OVERHEAD;

        match first_offset {
            None => first_offset = Some(offset),
            Some(_) => offsets.push(offset),
        }
        keys.push(key);

        if first_offset.is_some_and(|first| counter >= first) {
            break;
        }
    }
    offsets.push(file_len);

    tracing::trace!(keys = keys.len(), key_table_len = counter, "decoded key table");

    // Value blob: each offset closes the span opened by the previous one
    for (key, boundary) in keys.into_iter().zip(offsets) {
        if boundary <= counter {
            return Err(FilemapError::corrupt(format!(
                "zero-length value for key {key:?} at offset {counter}"
            )));
        }
        if boundary > file_len {
            return Err(FilemapError::corrupt(format!(
                "value for key {key:?} ends at {boundary}, past end of file ({file_len})"
            )));
        }

        let mut value = vec![0u8; (boundary - counter) as usize];
        reader
            .read_exact(&mut value)
            .map_err(|e| eof_as_corrupt(e, format!("value for key {key:?} is truncated")))?;
        let value = String::from_utf8(value).map_err(|_| {
            FilemapError::corrupt(format!("value for key {key:?} is not valid UTF-8"))
        })?;

        tracing::trace!(key = %key, start = counter, end = boundary, "decoded record");
        counter = boundary;
        store.put(key, value);
    }

    Ok(())
}

/// Read one NUL-terminated key
fn read_key<R: BufRead>(reader: &mut R, at: u64) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_until(KEY_TERMINATOR, &mut bytes)?;
    if bytes.pop() != Some(KEY_TERMINATOR) {
        return Err(FilemapError::corrupt(format!(
            "unterminated key at offset {at}"
        )));
    }
    String::from_utf8(bytes)
        .map_err(|_| FilemapError::corrupt(format!("key at offset {at} is not valid UTF-8")))
}

/// Read one big-endian offset field
fn read_offset<R: BufRead>(reader: &mut R, at: u64) -> Result<u64> {
    let mut buf = [0u8; OFFSET_SIZE as usize];
    reader
        .read_exact(&mut buf)
        .map_err(|e| eof_as_corrupt(e, format!("truncated offset field at {at}")))?;

    let offset = i32::from_be_bytes(buf);
    u64::try_from(offset)
        .map_err(|_| FilemapError::corrupt(format!("negative offset {offset} at {at}")))
}

fn eof_as_corrupt(err: io::Error, reason: String) -> FilemapError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        FilemapError::CorruptFile(reason)
    } else {
        FilemapError::Io(err)
    }
}
