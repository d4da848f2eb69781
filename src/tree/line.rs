const INDENT_BLOCK_WIDTH: usize = 4;

/// Connectors drawn in front of a node, Unicode and `--charset=ascii` flavours.
const CONNECTORS: [&str; 4] = ["├── ", "└── ", "|-- ", "`-- "];

fn is_bar(c: char) -> bool {
    matches!(c, '│' | '|')
}

fn is_space(c: char) -> bool {
    // `tree` pads its guides with no-break spaces
    matches!(c, ' ' | '\u{a0}')
}

/// A single node row of a tree diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLine<'a> {
    pub depth: usize,
    pub name: &'a str,
}

impl<'a> TreeLine<'a> {
    /// Splits a raw row into depth and name.
    ///
    /// Returns `None` for rows that carry no node: blank rows, rows holding only
    /// guides, and rows whose name is a bare vertical bar.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            return None;
        }

        let (prefix, rest) = split_indent(line);
        let (connector, rest) = CONNECTORS
            .iter()
            .find_map(|connector| rest.strip_prefix(connector))
            .map_or((false, rest), |rest| (true, rest));

        let name = rest.trim();
        if name.is_empty() || name.chars().all(is_bar) {
            return None;
        }

        Some(TreeLine {
            depth: count_indent_blocks(prefix) + usize::from(connector),
            name,
        })
    }

    pub fn is_directory(&self) -> bool {
        self.name.ends_with('/')
    }
}

/// Splits off the longest run of guide characters, stopping short of an ASCII
/// connector whose `|` would otherwise be eaten as a guide.
fn split_indent(line: &str) -> (&str, &str) {
    let end = line
        .char_indices()
        .find(|&(idx, c)| {
            let guide = is_space(c) || is_bar(c);
            !guide || line[idx..].starts_with("|-- ")
        })
        .map_or(line.len(), |(idx, _)| idx);

    line.split_at(end)
}

/// Counts leftmost non-overlapping blocks of four spaces or a bar plus three
/// spaces. Leftover partial blocks round down.
fn count_indent_blocks(prefix: &str) -> usize {
    let chars = prefix.chars().collect::<Vec<_>>();
    let mut blocks = 0;
    let mut idx = 0;

    while idx < chars.len() {
        let block = chars
            .get(idx..idx + INDENT_BLOCK_WIDTH)
            .filter(|window| {
                let lead = window[0];
                (is_space(lead) || is_bar(lead)) && window[1..].iter().all(|&c| is_space(c))
            });

        match block {
            Some(_) => {
                blocks += 1;
                idx += INDENT_BLOCK_WIDTH;
            }
            None => idx += 1,
        }
    }

    blocks
}
