//! Leaf text spans and their formatting marks.
//!
//! Leaves are the terminals of every content tree. A [`Text`] element groups
//! the leaves of one run of text and is the only inline element without a
//! node type.

use serde::{Deserialize, Serialize};

/// Inline formatting applied to a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkType {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    InlineCode,
    /// Any mark this version does not know about; renders as nothing.
    #[serde(other)]
    Unknown,
}

/// A formatting mark as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub mark_type: MarkType,
}

impl From<MarkType> for Mark {
    fn from(mark_type: MarkType) -> Self {
        Self { mark_type }
    }
}

/// A terminal span of text. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Leaf {
    #[serde(default)]
    text: String,
    #[serde(default)]
    marks: Vec<Mark>,
}

impl Leaf {
    /// An unformatted leaf.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    /// A leaf carrying the given marks.
    pub fn with_marks(text: impl Into<String>, marks: impl IntoIterator<Item = MarkType>) -> Self {
        Self {
            text: text.into(),
            marks: marks.into_iter().map(Mark::from).collect(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn has_mark(&self, mark_type: MarkType) -> bool {
        self.marks.iter().any(|m| m.mark_type == mark_type)
    }

    /// Render with Markdown emphasis. Empty leaves never emit delimiters.
    pub fn render(&self) -> String {
        if self.text.is_empty() {
            return String::new();
        }

        let mut out = self.text.clone();
        // Innermost first, so `**~~x~~**` nests predictably.
        for (mark, delimiter) in [
            (MarkType::InlineCode, "`"),
            (MarkType::Italic, "*"),
            (MarkType::Bold, "**"),
            (MarkType::Strikethrough, "~~"),
            (MarkType::Underline, "__"),
            (MarkType::Spoiler, "||"),
        ] {
            if self.has_mark(mark) {
                out = format!("{delimiter}{out}{delimiter}");
            }
        }
        out
    }
}

/// An ordered run of leaves (`object: "text"` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Text {
    #[serde(default)]
    leaves: Vec<Leaf>,
}

impl Text {
    pub fn new(leaves: Vec<Leaf>) -> Self {
        Self { leaves }
    }

    /// A single unformatted leaf.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Leaf::new(text)])
    }

    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.iter().all(|leaf| leaf.text().is_empty())
    }

    /// Concatenated leaf text with marks ignored.
    pub fn raw(&self) -> String {
        self.leaves.iter().map(Leaf::text).collect()
    }

    /// Concatenated leaf text with marks applied.
    pub fn render(&self) -> String {
        self.leaves.iter().map(Leaf::render).collect()
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text::plain(text)
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text::plain(text)
    }
}
