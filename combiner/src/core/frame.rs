//! Text framing for the combined output file.
//!
//! Each entry is delimited by marker lines carrying the source path:
//!
//! ```text
//! // === FILE: <path> === //
//! <raw file content>
//!
//! // === END OF <path> === //
//!
//! ```
//!
//! Failed reads are framed as an error marker followed by the message:
//!
//! ```text
//! // === ERROR: <path> === //
//! // <error message>
//!
//! ```

use std::io::{self, Write};

use super::outcome::FileOutcome;

/// Write the framed form of one entry to `out`.
///
/// Content is written verbatim; no newline is inserted before the blank line
/// that precedes the end marker.
pub fn write_entry<W: Write>(out: &mut W, path: &str, outcome: &FileOutcome) -> io::Result<()> {
    match outcome {
        FileOutcome::Success { content, .. } => {
            writeln!(out, "// === FILE: {path} === //")?;
            out.write_all(content.as_bytes())?;
            write!(out, "\n\n// === END OF {path} === //\n\n")
        }
        FileOutcome::Failure(err) => {
            writeln!(out, "// === ERROR: {path} === //")?;
            write!(out, "// {err}\n\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::ReadError;

    fn framed(path: &str, outcome: &FileOutcome) -> String {
        let mut buf = Vec::new();
        write_entry(&mut buf, path, outcome).expect("write entry");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn frames_success() {
        let text = framed("a.txt", &FileOutcome::success("hello".to_string()));
        assert_eq!(
            text,
            "// === FILE: a.txt === //\nhello\n\n// === END OF a.txt === //\n\n"
        );
    }

    #[test]
    fn content_with_trailing_newline_is_verbatim() {
        let text = framed("b.rs", &FileOutcome::success("fn main() {}\n".to_string()));
        assert_eq!(
            text,
            "// === FILE: b.rs === //\nfn main() {}\n\n\n// === END OF b.rs === //\n\n"
        );
    }

    #[test]
    fn frames_empty_content() {
        let text = framed("empty", &FileOutcome::success(String::new()));
        assert_eq!(text, "// === FILE: empty === //\n\n\n// === END OF empty === //\n\n");
    }

    #[test]
    fn frames_failure() {
        let outcome = FileOutcome::Failure(ReadError::NotFound {
            path: "gone.txt".to_string(),
        });
        let text = framed("gone.txt", &outcome);
        assert_eq!(
            text,
            "// === ERROR: gone.txt === //\n// File not found: gone.txt\n\n"
        );
    }
}
