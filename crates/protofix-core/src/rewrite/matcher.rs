//! Anchored matcher for `import "<path>";` lines

use std::io::{self, Write};

use super::Prefix;

const IMPORT_OPEN: &[u8] = b"import \"";
const IMPORT_CLOSE: &[u8] = b"\";";

/// An import declaration recognized on a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportDeclaration<'a> {
    path: &'a [u8],
    line_ending: &'a [u8],
}

impl<'a> ImportDeclaration<'a> {
    /// Match a raw line, including its terminator, against
    /// `import "<path>";`.
    ///
    /// The keyword must start the line, be followed by exactly one space,
    /// and the closing `";` must be followed directly by a line ending
    /// (`\n`, `\r\n` or `\r`). A final line without a terminator never
    /// matches. The path is one or more bytes without a double quote.
    #[must_use]
    pub fn parse(line: &'a [u8]) -> Option<Self> {
        let rest = line.strip_prefix(IMPORT_OPEN)?;
        let close = rest.iter().position(|&b| b == b'"')?;
        if close == 0 {
            return None;
        }

        let (path, tail) = rest.split_at(close);
        let line_ending = tail.strip_prefix(IMPORT_CLOSE)?;
        if !is_line_ending(line_ending) {
            return None;
        }

        Some(Self { path, line_ending })
    }

    /// The captured path, without quotes
    #[must_use]
    pub fn path(&self) -> &'a [u8] {
        self.path
    }

    /// The terminator the line was read with
    #[must_use]
    pub fn line_ending(&self) -> &'a [u8] {
        self.line_ending
    }

    /// Write `import "<prefix>/<path>";` followed by the original line ending
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn write_prefixed<W: Write + ?Sized>(&self, prefix: &Prefix, out: &mut W) -> io::Result<()> {
        out.write_all(IMPORT_OPEN)?;
        out.write_all(prefix.as_str().as_bytes())?;
        out.write_all(b"/")?;
        out.write_all(self.path)?;
        out.write_all(IMPORT_CLOSE)?;
        out.write_all(self.line_ending)
    }
}

fn is_line_ending(bytes: &[u8]) -> bool {
    matches!(bytes, b"\n" | b"\r\n" | b"\r")
}
