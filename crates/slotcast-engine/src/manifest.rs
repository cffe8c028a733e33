//! Upload manifest: which generated files go where on the remote host.
//!
//! The engine never uploads anything itself; it hands this mapping of local
//! paths to remote file names to whatever uploader the caller wires in.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::catalog::ZoneDescriptor;
use crate::offset::UtcOffset;

/// Ordered mapping from generated local path to remote file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UploadManifest {
    pub entries: BTreeMap<String, String>,
}

impl UploadManifest {
    /// Build the manifest for one run: every zone page plus the index and
    /// the stylesheet, all rooted under `out_dir`.
    pub fn for_run(out_dir: &Path, catalog: &BTreeMap<UtcOffset, ZoneDescriptor>) -> Self {
        let mut manifest = Self::default();
        for zone in catalog.values() {
            manifest.add(out_dir, &format!("{}.html", zone.file_id));
        }
        manifest.add(out_dir, "index.html");
        manifest.add(out_dir, "styles.css");
        manifest
    }

    fn add(&mut self, out_dir: &Path, file: &str) {
        self.entries
            .insert(out_dir.join(file).display().to_string(), file.to_string());
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
