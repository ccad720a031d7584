/// Entry names whose presence marks a directory as a project root.
///
/// Ordered: the explicit sentinel first, then version control, then common
/// packaging manifests. Within a single directory any one of these qualifies,
/// so the order only expresses intent; the walk stops at the *nearest*
/// qualifying ancestor regardless of which marker it holds.
pub const DEFAULT_MARKERS: &[&str] = &[
    ".project-root",
    ".git",
    "Cargo.toml",
    "pyproject.toml",
    "package.json",
    "go.mod",
];
