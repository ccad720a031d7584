//! from-root
//!
//! Find the root directory of the surrounding project and anchor paths to it,
//! so code deep inside a source tree can reach `logs/`, `data/`, or config
//! files without counting `..` components.
//!
//! The lookup walks upward from a start directory, by default the directory
//! of the calling source file, until it finds a marker entry: a
//! `.project-root` sentinel, a `.git` directory, or a common packaging
//! manifest (see [`DEFAULT_MARKERS`]). The nearest marked ancestor wins. If
//! nothing on the ancestor chain matches, the resolved working directory is
//! used instead; [`RootLookup`] tells the two outcomes apart for callers that
//! care.
//!
//! ```no_run
//! use from_root::FromRoot;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // The project root itself.
//! let root = from_root::from_root();
//!
//! // A path under it, created on demand.
//! let logs = FromRoot::new().join("logs").mkdirs(true).resolve()?;
//! # Ok(())
//! # }
//! ```
//!
//! Caller-location capture relies on the source path the compiler recorded,
//! which is resolved against the running process's filesystem; it is a
//! best-effort convenience. Pass an explicit directory with
//! [`FromRoot::start`] or [`find_root`] when you need the start pinned down.

mod locate;
mod markers;
mod resolve;

pub use locate::{RootLookup, caller_start_dir, find_root};
pub use markers::DEFAULT_MARKERS;
pub use resolve::FromRoot;

use std::panic::Location;
use std::path::PathBuf;

/// The detected project root for the calling source file, with nothing
/// joined onto it. Falls back to the resolved working directory when no
/// marker is found; never fails.
#[track_caller]
pub fn from_root() -> PathBuf {
    let start = caller_start_dir(Location::caller().file());
    find_root(&start, DEFAULT_MARKERS).into_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_root_finds_this_crate() {
        // This test file sits under src/, so the caller-located walk must
        // land on the crate root, which carries Cargo.toml.
        let root = from_root();
        assert!(root.join("Cargo.toml").exists());
    }

    #[test]
    fn from_root_matches_builder_locate() {
        let root = from_root();
        let located = FromRoot::new().locate();
        assert_eq!(root, located.into_path());
    }
}
