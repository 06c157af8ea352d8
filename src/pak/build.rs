#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::pak::codec::{compress, obfuscate};
use crate::pak::error::{PakError, PakResult};
use crate::pak::format::Entry;
use crate::pak::io::write_u32;
use crate::pak::path::{normalize, should_skip};

/// Walks `roots` in order and packs every regular file found into a single
/// archive at `output`. Entry names are the walked paths, relativized to the
/// working directory when they fall under it, normalized to `/`-separated
/// strings. Prints each name as it is packed, plus a summary line.
///
/// All entries are collected in memory before the output file is created;
/// a failure mid-walk leaves no partial archive behind. Returns the number
/// of entries written.
pub fn pack(roots: &[PathBuf], output: &Path) -> PakResult<usize> {
    let output_name = output.to_string_lossy();
    let cwd = std::env::current_dir()?;

    let mut entries: Vec<Entry> = Vec::new();
    for root in roots {
        // A missing root walks as empty rather than failing the run.
        if !root.is_dir() {
            continue;
        }
        for ent in WalkDir::new(root).follow_links(false) {
            let ent = ent.map_err(|e| {
                let msg = e.to_string();
                let io = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, msg));
                PakError::Io(io)
            })?;

            if !ent.file_type().is_file() {
                continue;
            }

            // Absolute roots under the working directory still get
            // cwd-relative names.
            let rel = ent.path().strip_prefix(&cwd).unwrap_or(ent.path());
            let name = normalize(rel);
            if should_skip(&name, &output_name) {
                continue;
            }

            let raw = std::fs::read(ent.path())?;
            let mut payload = compress(&raw)?;
            obfuscate(&mut payload);

            println!("{name}");
            entries.push(Entry { name, payload });
        }
    }

    let mut out = BufWriter::new(File::create(output)?);
    write_u32(&mut out, len_u32(entries.len())?)?;
    for e in &entries {
        write_u32(&mut out, len_u32(e.name.len())?)?;
        out.write_all(e.name.as_bytes())?;
        write_u32(&mut out, len_u32(e.payload.len())?)?;
        out.write_all(&e.payload)?;
    }
    out.flush()?;

    println!("packed {} files into {}", entries.len(), output.display());
    Ok(entries.len())
}

fn len_u32(len: usize) -> PakResult<u32> {
    u32::try_from(len).map_err(|_| PakError::Invalid(format!("length exceeds u32: {len}")))
}
