//! Line-oriented document model

use std::fmt;

/// A text document as an ordered list of lines.
///
/// Each line keeps its own terminator (`\n` or `\r\n`); only the last line
/// may lack one. Joining the lines back gives the original bytes, so an
/// untouched document always round-trips exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split `text` into lines, terminators included.
    ///
    /// # Example
    /// ```
    /// use splice_blocks::Document;
    ///
    /// let doc = Document::parse("a\r\nb\nc");
    /// assert_eq!(doc.lines(), ["a\r\n", "b\n", "c"]);
    /// assert_eq!(doc.to_text(), "a\r\nb\nc");
    /// ```
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lines.iter().try_for_each(|line| f.write_str(line))
    }
}

impl FromIterator<String> for Document {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
