#![forbid(unsafe_code)]

//! Archive layout (all integers little-endian u32):
//!
//! - [u32 entry_count]
//! - entries, in directory-walk discovery order:
//!   - [u32 name_len][name bytes UTF-8, `/` separators]
//!   - [u32 payload_len][payload: zlib DEFLATE, then XOR 0x5A]
//!
//! No magic, no version field, no checksum. The payload transform is
//! obfuscation only; XOR with the same key and inflate to get the file back.

/// Single-byte key XORed over every payload byte after compression.
pub const XOR_KEY: u8 = 0x5A;

/// Roots packed when the CLI is given none.
pub const DEFAULT_ROOTS: [&str; 2] = ["assets", "resources"];

/// Archive written when the CLI is given no output path.
pub const DEFAULT_OUTPUT: &str = "resources.pak";

/// Suffix of the packer's own sources; such files are never archived.
pub const SOURCE_SUFFIX: &str = ".rs";

#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub name: String,
    pub payload: Vec<u8>,
}
