#![forbid(unsafe_code)]

use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

use crate::pak::error::PakResult;
use crate::pak::format::XOR_KEY;

/// zlib DEFLATE at the default level, so any stock inflate can undo it.
pub(crate) fn compress(raw: &[u8]) -> PakResult<Vec<u8>> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(raw)?;
    Ok(enc.finish()?)
}

/// XORs every byte with [`XOR_KEY`]. Obfuscation, not encryption;
/// applying it twice restores the input.
pub(crate) fn obfuscate(data: &mut [u8]) {
    for b in data.iter_mut() {
        *b ^= XOR_KEY;
    }
}
