//! Marker-delimited header block scanning.
//!
//! The scanner reads a document one line at a time and stops at the closing
//! marker, so the body of a document is never read:
//!
//! ```markdown
//! ---
//! title: "My Document"
//! categories: ["rust"]
//! ---
//!
//! The body starts here and is never consulted.
//! ```
//!
//! Lines before the opening marker are skipped. An opening marker without a
//! closing one makes every following line header content.

use std::io::{self, BufRead};

/// How the header block ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    /// No marker line was found.
    Absent,
    /// Opened and closed.
    Closed,
    /// Opened but the document ended first.
    Unterminated,
}

/// Raw lines of a header block, without the marker lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock {
    lines: Vec<String>,
    state: BlockState,
}

impl HeaderBlock {
    /// Header lines, untrimmed, in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Returns `true` if there is nothing but whitespace to parse.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    /// Header lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Scan a reader for the header block.
///
/// Reading stops right after the closing marker. Lines are decoded as UTF-8;
/// a decoding error inside the scanned region is returned as
/// [`io::ErrorKind::InvalidData`].
pub fn read_header_block<R: BufRead>(reader: R, marker: &str) -> io::Result<HeaderBlock> {
    let mut lines = Vec::new();
    let mut inside = false;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = if index == 0 {
            line.strip_prefix('\u{feff}').map(str::to_string).unwrap_or(line)
        } else {
            line
        };

        if line.trim() == marker {
            if inside {
                return Ok(HeaderBlock {
                    lines,
                    state: BlockState::Closed,
                });
            }
            inside = true;
            continue;
        }

        if inside {
            lines.push(line);
        }
    }

    let state = if inside {
        BlockState::Unterminated
    } else {
        BlockState::Absent
    };
    Ok(HeaderBlock { lines, state })
}
