use std::fmt;

pub const MARKER_PREFIX: &str = "psidb::out_data::path::";

/// The status line a script prints to announce where its output landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMarker {
    pub path: String,
}

impl OutputMarker {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(line: &str) -> Option<Self> {
        let path = line.trim().strip_prefix(MARKER_PREFIX)?;
        if path.is_empty() {
            return None;
        }
        Some(Self::new(path))
    }

    /// Scans captured script stdout; the last marker line wins.
    pub fn find_in_output(output: &str) -> Option<Self> {
        output.lines().filter_map(Self::parse).last()
    }
}

impl fmt::Display for OutputMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", MARKER_PREFIX, self.path)
    }
}
