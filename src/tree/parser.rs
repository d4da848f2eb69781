use hashlink::LinkedHashSet;
use tracing::{debug, trace};

use crate::tree::{RelativePath, TreeLine};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Directories and files recovered from a tree diagram.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeLayout {
    /// Deduplicated, shallowest first.
    pub directories: Vec<RelativePath>,
    /// In the order they appear in the diagram.
    pub files: Vec<RelativePath>,
}

impl TreeLayout {
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

        let state = text
            .split('\n')
            .enumerate()
            .filter_map(|(idx, raw)| {
                let line = TreeLine::parse(raw);
                if line.is_none() && !raw.trim().is_empty() {
                    trace!("Skipping line {} without a node: {:?}", idx + 1, raw);
                }
                line
            })
            .fold(ParseState::default(), ParseState::step);

        let layout = state.finish();
        debug!(
            "Parsed {} directories and {} files",
            layout.directories.len(),
            layout.files.len()
        );
        layout
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

impl From<&str> for TreeLayout {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

/// Accumulator threaded through the fold over diagram lines.
#[derive(Debug, Default)]
struct ParseState {
    /// Name last seen at each depth, `None` where the diagram skipped a level.
    stack: Vec<Option<String>>,
    directories: LinkedHashSet<RelativePath>,
    files: Vec<RelativePath>,
}

impl ParseState {
    fn step(mut self, line: TreeLine<'_>) -> Self {
        let is_directory = line.is_directory();
        let name = line.name.trim_end_matches('/');

        if self.stack.len() <= line.depth {
            self.stack.resize(line.depth + 1, None);
        }
        self.stack[line.depth] = Some(name.to_string());
        self.stack.truncate(line.depth + 1);

        let path = RelativePath::from_segments(self.stack.iter().flatten().map(String::as_str));
        if path.is_empty() {
            trace!("Line {:?} resolves to the root, nothing to create", line.name);
            return self;
        }

        if is_directory {
            trace!("Directory at depth {}: {}", line.depth, path);
            self.directories.insert(path);
        } else {
            trace!("File at depth {}: {}", line.depth, path);
            for ancestor in path.ancestors() {
                self.directories.insert(ancestor);
            }
            self.files.push(path);
        }

        self
    }

    fn finish(self) -> TreeLayout {
        let mut directories = self.directories.into_iter().collect::<Vec<_>>();
        // Stable, so siblings keep diagram order
        directories.sort_by_key(RelativePath::depth);

        TreeLayout {
            directories,
            files: self.files,
        }
    }
}
