use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::format::group_thousands;

/// Receives per-entry events while the passes walk the tree.
pub trait ProgressSink {
    fn counting_lines(&mut self, path: &Path) -> Result<()>;
    fn counted_file(&mut self, path: &Path) -> Result<()>;
    fn counted_folder(&mut self, path: &Path) -> Result<()>;
    fn counted_bytes(&mut self, path: &Path, bytes: u64) -> Result<()>;
}

/// Quiet mode: swallows every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl ProgressSink for Silent {
    fn counting_lines(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn counted_file(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn counted_folder(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn counted_bytes(&mut self, _path: &Path, _bytes: u64) -> Result<()> {
        Ok(())
    }
}

/// Writes one human-readable line per event.
#[derive(Debug)]
pub struct Narrator<W: Write> {
    out: W,
}

impl<W: Write> Narrator<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressSink for Narrator<W> {
    fn counting_lines(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out, "Counting lines in {}", path.display())?;
        Ok(())
    }

    fn counted_file(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out, "Counted New File At: {}", path.display())?;
        Ok(())
    }

    fn counted_folder(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out, "Counted New Folder At: {}", path.display())?;
        Ok(())
    }

    fn counted_bytes(&mut self, path: &Path, bytes: u64) -> Result<()> {
        writeln!(
            self.out,
            "New Data Recognized ({} bytes) at {}",
            group_thousands(bytes),
            path.display()
        )?;
        Ok(())
    }
}
