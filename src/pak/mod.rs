#![forbid(unsafe_code)]

mod build;
mod codec;
mod error;
mod format;
mod io;
mod path;

pub use build::pack;
pub use error::{PakError, PakResult};
pub use format::{DEFAULT_OUTPUT, DEFAULT_ROOTS, SOURCE_SUFFIX, XOR_KEY};
