//! Snapshot parsing: indented-outline text into a [`SceneArena`].
//!
//! Format, one node per line:
//!   - indentation is 2 spaces per level, spaces only
//!   - the line body is the display name; a bare `-` marks an unnamed node
//!     (a part literally named `-` cannot be represented)
//!   - an optional trailing `[kind]` annotates the entity kind
//!   - `#` lines are comments; `# asmtree: <version>` declares the format
//!     version and is checked when present
//!
//! Exactly one depth-0 node is allowed. Indentation can only express
//! acyclic structure, which keeps the traversal contract cycle-free.

use std::fs;
use std::path::Path;

use generational_arena::Index;
use regex::Regex;
use tracing::instrument;

use crate::arena::{NodeData, SceneArena};
use crate::errors::{SceneError, SceneResult};
use crate::util::path::ensure_file_exists;
use crate::walk::INDENT_WIDTH;

/// Snapshot format version this parser understands.
pub const SNAPSHOT_VERSION: u32 = 1;

pub struct SnapshotParser {
    header_regex: Regex,
    kind_regex: Regex,
}

impl Default for SnapshotParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotParser {
    pub fn new() -> Self {
        Self {
            header_regex: Regex::new(r"^#\s*asmtree:\s*(\d+)\s*$").unwrap(),
            kind_regex: Regex::new(r"^(.*?)\s*\[([A-Za-z0-9_-]+)\]$").unwrap(),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn parse_file(&self, path: &Path) -> SceneResult<SceneArena> {
        ensure_file_exists(path)?;
        let text = fs::read_to_string(path)?;
        self.parse_str(&text, path)
    }

    /// Parse snapshot text. `origin` is only used in error values.
    #[instrument(level = "debug", skip(self, text))]
    pub fn parse_str(&self, text: &str, origin: &Path) -> SceneResult<SceneArena> {
        let mut arena = SceneArena::new();
        // ancestors[d] holds the most recent node seen at depth d
        let mut ancestors: Vec<Index> = Vec::new();

        for (lineno, raw) in text.lines().enumerate() {
            let line_no = lineno + 1;
            if raw.trim().is_empty() {
                continue;
            }
            if raw.trim_start().starts_with('#') {
                self.check_header(raw.trim(), origin)?;
                continue;
            }

            let body = raw.trim_start_matches(' ');
            if body.starts_with('\t') {
                return Err(SceneError::InvalidFormat {
                    path: origin.to_path_buf(),
                    reason: format!("line {}: tab indentation is not supported", line_no),
                });
            }
            let indent = raw.len() - body.len();
            if indent % INDENT_WIDTH != 0 {
                return Err(SceneError::InvalidFormat {
                    path: origin.to_path_buf(),
                    reason: format!(
                        "line {}: indentation of {} is not a multiple of {}",
                        line_no, indent, INDENT_WIDTH
                    ),
                });
            }
            let depth = indent / INDENT_WIDTH;

            if depth == 0 && arena.root().is_some() {
                return Err(SceneError::MultipleRoots(origin.to_path_buf()));
            }
            if depth > ancestors.len() {
                return Err(SceneError::InvalidFormat {
                    path: origin.to_path_buf(),
                    reason: format!(
                        "line {}: indentation jumps to depth {} with no parent at depth {}",
                        line_no,
                        depth,
                        depth - 1
                    ),
                });
            }

            let (name, kind) = self.split_kind(body.trim_end());
            ancestors.truncate(depth);
            let parent = ancestors.last().copied();
            let idx = arena.insert_node(NodeData { name, kind }, parent);
            ancestors.push(idx);
        }

        if arena.is_empty() {
            return Err(SceneError::EmptyModel(origin.to_path_buf()));
        }
        Ok(arena)
    }

    fn check_header(&self, line: &str, origin: &Path) -> SceneResult<()> {
        if let Some(caps) = self.header_regex.captures(line) {
            let found: u32 = caps[1].parse().map_err(|_| SceneError::InvalidFormat {
                path: origin.to_path_buf(),
                reason: format!("unparsable version in header: {}", line),
            })?;
            if found != SNAPSHOT_VERSION {
                return Err(SceneError::UnsupportedVersion {
                    path: origin.to_path_buf(),
                    found,
                    supported: SNAPSHOT_VERSION,
                });
            }
        }
        Ok(())
    }

    /// Split an optional trailing `[kind]` annotation off the display name.
    fn split_kind(&self, body: &str) -> (Option<String>, Option<String>) {
        let (name_part, kind) = match self.kind_regex.captures(body) {
            Some(caps) => (
                caps.get(1).map(|m| m.as_str()).unwrap_or(""),
                Some(caps[2].to_string()),
            ),
            None => (body, None),
        };
        let name = match name_part.trim() {
            "" | "-" => None,
            s => Some(s.to_string()),
        };
        (name, kind)
    }
}
