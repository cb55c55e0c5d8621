//! Streaming line filter

use std::io::{self, BufRead, Write};

use super::{ImportDeclaration, Prefix, RewriteError};

/// Counts gathered during one rewrite pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Lines read (and written)
    pub lines: usize,
    /// Lines whose import path was prefixed
    pub rewritten: usize,
}

/// Copy `input` to `output` line by line, prefixing the path of every
/// `import "<path>";` line with `prefix`.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`, and are handled as raw bytes
/// with their terminators, so anything that does not match is written back
/// unchanged. Line endings are never normalized. Applying the rewrite twice
/// prefixes the path twice.
///
/// # Errors
/// Returns `RewriteError::Io` on the first read or write failure. Output
/// already written is left in place.
pub fn rewrite<R, W>(
    mut input: R,
    output: &mut W,
    prefix: &Prefix,
) -> Result<RewriteStats, RewriteError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut stats = RewriteStats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if read_source_line(&mut input, &mut line)? == 0 {
            break;
        }
        stats.lines += 1;

        match ImportDeclaration::parse(&line) {
            Some(import) => {
                import.write_prefixed(prefix, output)?;
                stats.rewritten += 1;
            }
            None => output.write_all(&line)?,
        }
    }

    Ok(stats)
}

/// Append one line, terminator included, to `line`. Returns the number of
/// bytes appended, 0 at end of input.
fn read_source_line<R: BufRead + ?Sized>(
    input: &mut R,
    line: &mut Vec<u8>,
) -> io::Result<usize> {
    let start = line.len();

    loop {
        let (used, done) = {
            let available = match input.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if line.len() > start && line.last() == Some(&b'\r') {
                // A `\r` ended the previous chunk: take a following `\n` with it
                if available.first() == Some(&b'\n') {
                    line.push(b'\n');
                    (1, true)
                } else {
                    (0, true)
                }
            } else if available.is_empty() {
                (0, true)
            } else {
                match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                    Some(i) => {
                        line.extend_from_slice(&available[..=i]);
                        (i + 1, available[i] == b'\n')
                    }
                    None => {
                        line.extend_from_slice(available);
                        (available.len(), false)
                    }
                }
            }
        };

        input.consume(used);
        if done {
            return Ok(line.len() - start);
        }
    }
}
