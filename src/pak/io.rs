#![forbid(unsafe_code)]

use std::io::Write;

use crate::pak::error::PakResult;

pub(crate) fn write_u32(w: &mut dyn Write, v: u32) -> PakResult<()> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}
