//! Local bundle discovery and remote path mapping.
//!
//! Bundle files are found by evaluating the fixed glob patterns in
//! [`crate::constants::LOCAL_FILE_PATTERNS`] through a [`FilePatternMatcher`],
//! classified by suffix into an [`AssetKind`], and mapped onto exactly two
//! remote destinations per key:
//!
//! ```text
//! dist/assets/index-*.js   ──▶  <base>/<key>/index-<key>.js
//! dist/assets/index-*.css  ──▶  <base>/<key>/index-<key>.css
//! ```

/// Glob-based file discovery
pub mod matcher;

/// Bundle classification and remote layout
pub mod remote;

pub use matcher::{FilePatternMatcher, GlobMatcher};
pub use remote::{remote_path, AssetKind, RemoteTargets};
