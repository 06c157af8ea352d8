#![forbid(unsafe_code)]

use std::path::Path;

use crate::pak::format::SOURCE_SUFFIX;

/// Joins the path's components with `/`, dropping leading `.` segments.
/// Entry names stay forward-slashed regardless of the host separator.
pub(crate) fn normalize(path: &Path) -> String {
    let mut out = String::new();
    for comp in path.components() {
        let c = comp.as_os_str().to_string_lossy();
        if c == "." {
            continue;
        }
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(&c);
    }
    out.replace('\\', "/")
}

/// The output archive itself and the packer's own sources never go in.
/// Plain name equality against the output path string, no containment check.
pub(crate) fn should_skip(name: &str, output: &str) -> bool {
    name == output || name.ends_with(SOURCE_SUFFIX)
}
