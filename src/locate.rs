use std::env;
use std::path::{Path, PathBuf};

// Compile-time path of this file, used to screen out locations that still
// point inside the locator itself.
const SELF_FILE: &str = file!();

/// Outcome of an upward root search.
///
/// `Marked` carries the nearest ancestor that contains a marker entry.
/// `CwdFallback` carries the resolved working directory, used when the whole
/// ancestor chain up to the filesystem root was exhausted without a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootLookup {
    Marked(PathBuf),
    CwdFallback(PathBuf),
}

impl RootLookup {
    /// The chosen directory, however it was chosen.
    pub fn path(&self) -> &Path {
        match self {
            RootLookup::Marked(p) | RootLookup::CwdFallback(p) => p,
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            RootLookup::Marked(p) | RootLookup::CwdFallback(p) => p,
        }
    }

    /// True when no marker was found and the working directory stood in.
    pub fn is_fallback(&self) -> bool {
        matches!(self, RootLookup::CwdFallback(_))
    }
}

/// Best-effort start directory derived from the calling source file.
///
/// `file` is the path the compiler recorded for the caller
/// (`std::panic::Location::caller().file()`). That path is relative to the
/// workspace the caller was compiled in, so tying it to a real directory is
/// best-effort: if the parent directory cannot be resolved, or the path is
/// empty or still names this crate's own locator source, the resolved working
/// directory is returned instead. Never fails.
pub fn caller_start_dir(file: &str) -> PathBuf {
    // Compare with forward slashes so the own-file check holds for paths
    // recorded on Windows too.
    let normalized = file.replace('\\', "/");
    if normalized.is_empty() || normalized.ends_with(&SELF_FILE.replace('\\', "/")) {
        return resolved_cwd();
    }

    match Path::new(file).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent
            .canonicalize()
            .unwrap_or_else(|_| resolved_cwd()),
        _ => resolved_cwd(),
    }
}

/// Walk upward from `start` until a directory containing any marker is found.
///
/// `start` itself is checked first, then each parent up to and including the
/// filesystem root. The *nearest* qualifying directory wins, regardless of
/// which marker it holds or how many a farther ancestor holds. Markers match
/// on existence only, file or directory. An existence check that errors (say,
/// an unreadable intermediate directory) counts as absent. When nothing in
/// the chain qualifies, the resolved working directory is returned, tagged as
/// a fallback.
pub fn find_root<S: AsRef<str>>(start: &Path, markers: &[S]) -> RootLookup {
    let start = absolutize(start);

    for candidate in start.ancestors() {
        for marker in markers {
            if candidate.join(marker.as_ref()).exists() {
                return RootLookup::Marked(candidate.to_path_buf());
            }
        }
    }

    RootLookup::CwdFallback(resolved_cwd())
}

/// Absolute, symlink-free rendering of `path`; falls back to joining onto the
/// working directory when the path cannot be canonicalized.
fn absolutize(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        resolved_cwd().join(path)
    }
}

/// Resolved current working directory; the universal fallback.
fn resolved_cwd() -> PathBuf {
    env::current_dir()
        .and_then(|d| d.canonicalize())
        .unwrap_or_else(|_| PathBuf::from("."))
}
