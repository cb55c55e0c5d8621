//! Tests for the streaming rewriter

#![allow(clippy::unwrap_used)]

use std::io::{self, BufRead, BufReader, Cursor, Read, Write};

use crate::rewrite::{rewrite, Prefix, RewriteError, RewriteStats};

fn run(input: &str, prefix: &str) -> (String, RewriteStats) {
    let prefix = Prefix::new(prefix).unwrap();
    let mut out = Vec::new();
    let stats = rewrite(Cursor::new(input.as_bytes()), &mut out, &prefix).unwrap();
    (String::from_utf8(out).unwrap(), stats)
}

const ANALYSIS_PROTO: &str = r#"syntax = "proto3";

package jumanpp.grpc;

import "jumandic.proto";
import "jumanpp.proto";

service JumanppJumandic {
    rpc DefaultAnalysis (AnalysisRequest) returns (JumandicResponse);
}
"#;

#[test]
fn test_rewrite_single_import() {
    let (out, stats) = run("import \"common.proto\";\n", "pkg");
    assert_eq!(out, "import \"pkg/common.proto\";\n");
    assert_eq!(stats, RewriteStats { lines: 1, rewritten: 1 });
}

#[test]
fn test_rewrite_full_definition_file() {
    let (out, stats) = run(ANALYSIS_PROTO, "jumanpp_grpc");

    let expected = ANALYSIS_PROTO
        .replace("import \"jumandic.proto\";", "import \"jumanpp_grpc/jumandic.proto\";")
        .replace("import \"jumanpp.proto\";", "import \"jumanpp_grpc/jumanpp.proto\";");
    assert_eq!(out, expected);
    assert_eq!(stats.rewritten, 2);
    assert_eq!(stats.lines, ANALYSIS_PROTO.lines().count());
}

#[test]
fn test_rewrite_leaves_indented_import() {
    let (out, stats) = run("  import \"common.proto\";\n", "pkg");
    assert_eq!(out, "  import \"common.proto\";\n");
    assert_eq!(stats.rewritten, 0);
}

#[test]
fn test_rewrite_leaves_commented_import() {
    let (out, _) = run("// import \"x.proto\";\n", "pkg");
    assert_eq!(out, "// import \"x.proto\";\n");
}

#[test]
fn test_rewrite_is_not_idempotent() {
    let (once, _) = run("import \"common.proto\";\n", "p");
    let (twice, _) = run(&once, "p");
    assert_eq!(twice, "import \"p/p/common.proto\";\n");
}

#[test]
fn test_rewrite_empty_input() {
    let (out, stats) = run("", "pkg");
    assert!(out.is_empty());
    assert_eq!(stats, RewriteStats::default());
}

#[test]
fn test_rewrite_preserves_line_count_and_blank_lines() {
    let input = "\n\nimport \"a.proto\";\n\n\n";
    let (out, stats) = run(input, "pkg");
    assert_eq!(out, "\n\nimport \"pkg/a.proto\";\n\n\n");
    assert_eq!(stats.lines, 5);
    assert_eq!(out.lines().count(), input.lines().count());
}

#[test]
fn test_rewrite_preserves_crlf_line_endings() {
    let input = "message A {}\r\nimport \"a.proto\";\r\nimport \"b.proto\";\r\n";
    let (out, stats) = run(input, "pkg");
    assert_eq!(
        out,
        "message A {}\r\nimport \"pkg/a.proto\";\r\nimport \"pkg/b.proto\";\r\n"
    );
    assert_eq!(stats, RewriteStats { lines: 3, rewritten: 2 });
}

#[test]
fn test_rewrite_leaves_unterminated_last_import() {
    let (out, stats) = run("import \"a.proto\";\nimport \"b.proto\";", "pkg");
    assert_eq!(out, "import \"pkg/a.proto\";\nimport \"b.proto\";");
    assert_eq!(stats, RewriteStats { lines: 2, rewritten: 1 });
}

#[test]
fn test_rewrite_treats_bare_cr_as_line_ending() {
    let (out, stats) = run("import \"a.proto\";\rmessage A {}\r", "pkg");
    assert_eq!(out, "import \"pkg/a.proto\";\rmessage A {}\r");
    assert_eq!(stats, RewriteStats { lines: 2, rewritten: 1 });
}

#[test]
fn test_rewrite_crlf_split_across_reads() {
    let prefix = Prefix::new("pkg").unwrap();
    let input = "import \"a.proto\";\r\nimport \"b.proto\";\r\n";
    let reader = BufReader::with_capacity(1, input.as_bytes());
    let mut out = Vec::new();

    let stats = rewrite(reader, &mut out, &prefix).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "import \"pkg/a.proto\";\r\nimport \"pkg/b.proto\";\r\n"
    );
    assert_eq!(stats, RewriteStats { lines: 2, rewritten: 2 });
}

#[test]
fn test_rewrite_preserves_unusual_whitespace_and_malformed_lines() {
    let input = "message\t A  {\u{a0}}\nimport \"broken.proto;\nimport \"x.proto\"; // keep\n";
    let (out, stats) = run(input, "pkg");
    assert_eq!(out, input);
    assert_eq!(stats.rewritten, 0);
}

#[test]
fn test_rewrite_passes_non_utf8_bytes_through() {
    let prefix = Prefix::new("pkg").unwrap();
    let input: &[u8] = b"// \xff\xfe\nimport \"a.proto\";\n";
    let mut out = Vec::new();

    rewrite(input, &mut out, &prefix).unwrap();

    assert_eq!(out, b"// \xff\xfe\nimport \"pkg/a.proto\";\n");
}

#[test]
fn test_rewrite_does_not_join_multiline_imports() {
    let input = "import\n\"a.proto\";\nimport \"b.proto\"\n;\n";
    let (out, stats) = run(input, "pkg");
    assert_eq!(out, input);
    assert_eq!(stats.rewritten, 0);
}

/// Reader that yields one line and then fails
struct FailingReader {
    first: Option<Cursor<Vec<u8>>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.first.as_mut() {
            Some(cursor) => cursor.read(buf),
            None => Err(io::Error::other("disk gone")),
        }
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.first.as_ref().is_some_and(|c| c.position() as usize >= c.get_ref().len()) {
            self.first = None;
        }
        match self.first.as_mut() {
            Some(cursor) => cursor.fill_buf(),
            None => Err(io::Error::other("disk gone")),
        }
    }

    fn consume(&mut self, amt: usize) {
        if let Some(cursor) = self.first.as_mut() {
            cursor.consume(amt);
        }
    }
}

#[test]
fn test_rewrite_stops_on_read_error_keeping_partial_output() {
    let prefix = Prefix::new("pkg").unwrap();
    let reader = FailingReader {
        first: Some(Cursor::new(b"import \"a.proto\";\n".to_vec())),
    };
    let mut out = Vec::new();

    let err = rewrite(reader, &mut out, &prefix).unwrap_err();

    assert!(matches!(err, RewriteError::Io(_)));
    assert_eq!(out, b"import \"pkg/a.proto\";\n");
}

/// Writer that rejects everything
struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("read-only"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_rewrite_surfaces_write_error() {
    let prefix = Prefix::new("pkg").unwrap();
    let err = rewrite(Cursor::new("syntax = \"proto3\";\n"), &mut FailingWriter, &prefix)
        .unwrap_err();

    assert!(matches!(err, RewriteError::Io(_)));
    assert!(err.to_string().contains("read-only"));
}
