use crate::domain::model::{Document, TransformKind};

/// A stateless mapping applied to one line at a time.
pub trait LineTransform: Send + Sync {
    fn apply(&self, line: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl LineTransform for Uppercase {
    fn apply(&self, line: &str) -> String {
        line.to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Rot13;

impl LineTransform for Rot13 {
    fn apply(&self, line: &str) -> String {
        line.chars().map(rot13_char).collect()
    }
}

/// Rotates ASCII letters by 13 places within their case; anything else is
/// returned unchanged.
pub fn rot13_char(c: char) -> char {
    match c {
        'a'..='z' => rotate(c, b'a'),
        'A'..='Z' => rotate(c, b'A'),
        _ => c,
    }
}

fn rotate(c: char, base: u8) -> char {
    let offset = (c as u8 - base + 13) % 26;
    (base + offset) as char
}

pub fn transformer_for(kind: TransformKind) -> Box<dyn LineTransform> {
    match kind {
        TransformKind::Uppercase => Box::new(Uppercase),
        TransformKind::Rot13 => Box::new(Rot13),
    }
}

pub fn apply_document(transform: &dyn LineTransform, document: &Document) -> Document {
    Document {
        lines: document.lines.iter().map(|line| transform.apply(line)).collect(),
    }
}
