//! Encoder
//!
//! Writes a Store in two passes: the key table with placeholder offsets,
//! then the value blob, then patches each placeholder with the real offset.

use std::io::{Cursor, Seek, SeekFrom, Write};

use crate::error::{FilemapError, Result};
use crate::store::Store;

use super::{ENTRY_OVERHEAD, KEY_TERMINATOR};

/// Encode `store` into `writer`, returning the number of bytes written.
///
/// The writer is rewound to position 0 first; offsets are absolute, so it
/// must be empty (a freshly truncated file or an empty buffer).
pub fn encode<W: Write + Seek>(store: &Store, writer: &mut W) -> Result<u64> {
    writer.seek(SeekFrom::Start(0))?;

    // Pass 1: key table with zeroed offset fields
    let mut position: u64 = 0;
    let mut reserved = Vec::with_capacity(store.len());
    for (key, _) in store.iter() {
        writer.write_all(key.as_bytes())?;
        writer.write_all(&[KEY_TERMINATOR])?;
        reserved.push(position + key.len() as u64 + 1);
        writer.write_all(&0i32.to_be_bytes())?;
        position += key.len() as u64 + ENTRY_OVERHEAD;
    }

    // Pass 2: value blob
    let mut offsets = Vec::with_capacity(store.len());
    for (_, value) in store.iter() {
        offsets.push(to_offset(position)?);
        writer.write_all(value.as_bytes())?;
        position += value.len() as u64;
    }
    // The end of the file is the implicit boundary of the last value
    to_offset(position)?;

    // Pass 3: patch the reserved fields
    for (field, offset) in reserved.iter().zip(&offsets) {
        writer.seek(SeekFrom::Start(*field))?;
        writer.write_all(&offset.to_be_bytes())?;
    }
    writer.seek(SeekFrom::Start(position))?;
    writer.flush()?;

    tracing::trace!(entries = store.len(), bytes = position, "encoded store");
    Ok(position)
}

/// Encode `store` into a fresh byte vector
pub fn encode_to_vec(store: &Store) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    encode(store, &mut cursor)?;
    Ok(cursor.into_inner())
}

fn to_offset(position: u64) -> Result<i32> {
    i32::try_from(position).map_err(|_| FilemapError::OffsetOverflow(position))
}
