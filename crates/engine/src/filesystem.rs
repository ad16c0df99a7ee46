use crate::config::ScanConfig;
use crate::error::{EngineError, Result};
use crate::options::ErrorPolicy;
use ignore::{Walk, WalkBuilder};
use std::path::Path;

/// How an entry takes part in the passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Has enumerable children.
    Directory,
    /// Readable byte content.
    RegularFile,
    /// Unfollowed symlinks, fifos, sockets and devices: counted as files, never opened.
    Other,
}

/// A classified entry handed to a pass.
#[derive(Debug)]
pub struct Entry {
    dent: ignore::DirEntry,
    kind: EntryKind,
}

impl Entry {
    fn classify(dent: ignore::DirEntry) -> Self {
        let kind = match dent.file_type() {
            Some(ft) if ft.is_dir() => EntryKind::Directory,
            Some(ft) if ft.is_file() => EntryKind::RegularFile,
            _ => EntryKind::Other,
        };
        Self { dent, kind }
    }

    pub fn path(&self) -> &Path {
        self.dent.path()
    }

    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Byte length from metadata; zero for directories and non-regular entries.
    ///
    /// # Errors
    /// Returns [`EngineError::Access`] if the entry can no longer be stat'ed.
    pub fn byte_len(&self) -> Result<u64> {
        match self.kind {
            EntryKind::RegularFile => self
                .dent
                .metadata()
                .map(|meta| meta.len())
                .map_err(|e| EngineError::access(self.path(), e)),
            EntryKind::Directory | EntryKind::Other => Ok(0),
        }
    }
}

/// Depth-first walk over `root` and everything below it, root included.
///
/// No entries are filtered out. Children are visited in file-name order so
/// narration is stable between runs; the totals do not depend on it.
fn walker(root: &Path, follow_links: bool) -> Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(follow_links)
        .sort_by_file_name(|a, b| a.cmp(b));
    builder.build()
}

/// Visits every entry below `root`, applying the configured error policy.
///
/// Under [`ErrorPolicy::FailFast`] the first access or read error is returned.
/// Under [`ErrorPolicy::Skip`] such errors are pushed onto `errors` and the
/// walk continues. Any other error always aborts.
pub fn walk_entries<F>(
    root: &Path,
    config: &ScanConfig,
    errors: &mut Vec<EngineError>,
    mut visit: F,
) -> Result<()>
where
    F: FnMut(&Entry) -> Result<()>,
{
    for item in walker(root, config.follow_links) {
        let step = item
            .map(Entry::classify)
            .map_err(|e| EngineError::access(root, e))
            .and_then(|entry| visit(&entry));

        match step {
            Ok(()) => {}
            Err(err) if err.is_recoverable() && config.on_error == ErrorPolicy::Skip => {
                log::warn!("skipping entry: {err}");
                errors.push(err);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
