use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};

use crate::locate::{RootLookup, caller_start_dir, find_root};
use crate::markers::DEFAULT_MARKERS;

/// A configurable root lookup: path segments to join onto the discovered
/// root, optional start and marker overrides, and optional creation of the
/// final directory.
///
/// Every call computes everything fresh; nothing is cached between lookups.
#[derive(Debug, Clone)]
pub struct FromRoot {
    caller_file: &'static str,
    segments: Vec<PathBuf>,
    start: Option<PathBuf>,
    markers: Vec<String>,
    mkdirs: bool,
}

impl FromRoot {
    /// Begin a lookup anchored at the calling source file's directory.
    ///
    /// The anchor is captured here, at the call site, so later chained calls
    /// and `resolve` can run from anywhere without mis-identifying this
    /// crate's own code as the caller.
    #[track_caller]
    pub fn new() -> Self {
        Self {
            caller_file: Location::caller().file(),
            segments: Vec::new(),
            start: None,
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
            mkdirs: false,
        }
    }

    /// Append one path segment to join onto the discovered root.
    pub fn join<P: AsRef<Path>>(mut self, segment: P) -> Self {
        self.segments.push(segment.as_ref().to_path_buf());
        self
    }

    /// Append several segments, joined in the order given.
    pub fn join_all<I, P>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.segments
            .extend(segments.into_iter().map(|s| s.as_ref().to_path_buf()));
        self
    }

    /// Search upward from this directory instead of the caller's location.
    pub fn start<P: AsRef<Path>>(mut self, start: P) -> Self {
        self.start = Some(start.as_ref().to_path_buf());
        self
    }

    /// Replace the default marker list, preserving the given order.
    pub fn markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.markers = markers.into_iter().map(|m| m.as_ref().to_string()).collect();
        self
    }

    /// Create the final path (and any missing parents) during `resolve`.
    pub fn mkdirs(mut self, create: bool) -> Self {
        self.mkdirs = create;
        self
    }

    /// Run the lookup only: no segment joining, no creation. Never fails;
    /// an exhausted search is reported as a tagged working-directory
    /// fallback rather than an error.
    pub fn locate(&self) -> RootLookup {
        match &self.start {
            Some(explicit) => find_root(explicit, &self.markers),
            None => find_root(&caller_start_dir(self.caller_file), &self.markers),
        }
    }

    /// Resolve the final path: discovered root, plus joined segments, plus
    /// optional directory creation.
    ///
    /// Creation is idempotent; a pre-existing target is not an error. Only
    /// an unusable start override or a failed creation can error here, and
    /// both propagate with path context.
    pub fn resolve(&self) -> Result<PathBuf> {
        if let Some(explicit) = &self.start {
            ensure!(
                !explicit.as_os_str().is_empty(),
                "start override is an empty path"
            );
        }

        let mut out = self.locate().into_path();
        for segment in &self.segments {
            out.push(segment);
        }

        if self.mkdirs {
            fs::create_dir_all(&out)
                .with_context(|| format!("Failed to create directory: {}", out.display()))?;
        }

        Ok(out)
    }
}
