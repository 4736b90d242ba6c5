//! Codec Module
//!
//! Translates between a [`Store`](crate::store::Store) and the on-disk byte
//! layout of the database file.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Key Table (variable)                                    │
//! │   [Key bytes][0x00][Offset: i32 BE (4)]                 │
//! │   ... repeated for each key, ascending byte order ...   │
//! ├─────────────────────────────────────────────────────────┤
//! │ Value Blob (variable)                                   │
//! │   [Value bytes][Value bytes] ...                        │
//! │   no delimiters, same order as the key table            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Offsets are absolute positions from the start of the file. There is no
//! magic number, version, record count or checksum.
//!
//! ## Key Table Boundary
//! Nothing in the file says where the key table ends. The first entry's
//! offset points at the first value, which sits right after the key table,
//! so the decoder keeps consuming key/offset pairs until it has read that
//! many bytes. A first offset that is not exactly the key table length makes
//! the file undecodable. Files written by older tools rely on this, so the
//! layout is kept as is.
//!
//! An empty Store encodes to a zero-length file and a zero-length file
//! decodes to an empty Store.

mod decoder;
mod encoder;

pub use decoder::{decode, decode_from_slice, decode_into};
pub use encoder::{encode, encode_to_vec};

/// Byte terminating each key in the key table
pub const KEY_TERMINATOR: u8 = 0x00;

/// Size of an offset field: big-endian i32
pub const OFFSET_SIZE: u64 = 4;

/// Per-entry bytes in the key table besides the key itself
pub const ENTRY_OVERHEAD: u64 = 1 + OFFSET_SIZE;
