use std::fmt;
use std::path::Path;

use crate::constants::REMOTE_FILE_STEM;

/// Kind of bundle file, decided by file name suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Js,
    Css,
}

impl AssetKind {
    /// File extension without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            AssetKind::Js => "js",
            AssetKind::Css => "css",
        }
    }

    /// Classify a local file; `None` for anything that is not `.js` or `.css`.
    pub fn classify(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".js") {
            Some(AssetKind::Js)
        } else if name.ends_with(".css") {
            Some(AssetKind::Css)
        } else {
            None
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Remote path for one bundle kind: `<base>/<key>/index-<key>.<ext>`.
pub fn remote_path(key: &str, base_path: &str, kind: AssetKind) -> String {
    format!(
        "{}/{}/{}-{}.{}",
        base_path,
        key,
        REMOTE_FILE_STEM,
        key,
        kind.extension()
    )
}

/// The two remote destinations of an upload run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteTargets {
    pub js: String,
    pub css: String,
}

impl RemoteTargets {
    pub fn new(key: &str, base_path: &str) -> Self {
        Self {
            js: remote_path(key, base_path, AssetKind::Js),
            css: remote_path(key, base_path, AssetKind::Css),
        }
    }

    /// Destination for a bundle kind
    pub fn for_kind(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Js => &self.js,
            AssetKind::Css => &self.css,
        }
    }
}
