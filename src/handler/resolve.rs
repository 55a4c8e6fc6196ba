//! Request path resolution.
//!
//! Maps a raw, attacker-controlled request target to an absolute filesystem
//! path confined to the server root, or rejects it. Pure path algebra; no
//! filesystem access happens here.

use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

use super::error::ServeError;

/// Resolve a raw request target against the server root.
///
/// The query string and fragment are discarded, the remaining path is
/// percent-decoded and joined to the root as a root-relative path (a leading
/// `/` means the root, never the filesystem root), and `.`/`..` segments are
/// folded away before the containment check.
///
/// The containment check is lexical: the normalized candidate must equal the
/// root or descend from it component-wise. Symbolic links inside the root are
/// not resolved, so a link pointing outside the root is not caught here.
pub fn resolve_request_path(raw_target: &str, root: &Path) -> Result<PathBuf, ServeError> {
    let raw_path = raw_target.split(['?', '#']).next().unwrap_or_default();

    let decoded = percent_decode_str(raw_path)
        .decode_utf8()
        .map_err(|_| ServeError::BadRequest)?;

    let candidate = join_normalized(&decoded, root);

    if candidate.starts_with(root) {
        Ok(candidate)
    } else {
        Err(ServeError::BadRequest)
    }
}

/// Join `path` to `root` treating it as root-relative, folding `.` and `..`
/// lexically. `..` above the filesystem root clamps there, which leaves the
/// result outside the server root for the caller to reject.
fn join_normalized(path: &str, root: &Path) -> PathBuf {
    let mut out = root.to_path_buf();
    for component in Path::new(path).components() {
        match component {
            Component::Normal(segment) => out.push(segment),
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    out
}
