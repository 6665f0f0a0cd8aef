use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Uppercase,
    Rot13,
}

impl TransformKind {
    pub fn command_name(self) -> &'static str {
        match self {
            TransformKind::Uppercase => "uppercase-convert",
            TransformKind::Rot13 => "rot13-transform",
        }
    }

    /// Whether a successful run announces its output path on stdout.
    pub fn emits_marker(self) -> bool {
        matches!(self, TransformKind::Rot13)
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command_name())
    }
}

/// Ordered text lines. Every line keeps its own terminator, so joining the
/// lines reproduces the original text byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<String>,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}
