use std::path::{Path, PathBuf};

use derive_more::{Deref, Display};
use tracing::warn;

const SEPARATOR: char = '/';

/// A path below the materialization root, stored as its normal components.
///
/// Components are only turned into a platform path by [`RelativePath::under`],
/// so separators never leak into the parsed structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deref, Display)]
#[display("{}", _0.join("/"))]
pub struct RelativePath(Vec<String>);

impl RelativePath {
    /// Builds a path from name segments. Each segment may itself contain `/`,
    /// in which case it contributes several components.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let components = segments
            .into_iter()
            .flat_map(|segment| segment.split(SEPARATOR))
            .map(str::trim)
            .filter(|component| match *component {
                "" | "." => false,
                ".." => {
                    warn!("Dropping parent directory component, paths cannot leave the root");
                    false
                }
                _ => true,
            })
            .map(str::to_string)
            .collect();

        Self(components)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Every proper ancestor, shallowest first.
    pub fn ancestors(&self) -> impl Iterator<Item = RelativePath> + '_ {
        (1..self.0.len()).map(|len| RelativePath(self.0[..len].to_vec()))
    }

    pub fn parent(&self) -> Option<RelativePath> {
        match self.0.len() {
            0 | 1 => None,
            len => Some(RelativePath(self.0[..len - 1].to_vec())),
        }
    }

    pub fn under(&self, root: &Path) -> PathBuf {
        self.0
            .iter()
            .fold(root.to_path_buf(), |path, component| path.join(component))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(vec!["project", "src", "main.rs"], "project/src/main.rs")]
    #[case(vec!["project", "src/bin", "tool.rs"], "project/src/bin/tool.rs")]
    #[case(vec![".", "src"], "src")]
    #[case(vec!["a", "", "b"], "a/b")]
    #[case(vec!["..", "escape"], "escape")]
    fn from_segments_normalizes_components(#[case] segments: Vec<&str>, #[case] expected: &str) {
        let path = RelativePath::from_segments(segments);
        assert_eq!(path.to_string(), expected);
    }

    #[test]
    fn only_dots_produce_an_empty_path() {
        let path = RelativePath::from_segments(["."]);
        assert!(path.is_empty());
        assert_eq!(path.depth(), 0);
    }

    #[test]
    fn ancestors_are_proper_and_shallow_first() {
        let path = RelativePath::from_segments(["a", "b", "c.txt"]);
        let ancestors = path.ancestors().map(|p| p.to_string()).collect::<Vec<_>>();
        assert_eq!(ancestors, vec!["a", "a/b"]);
    }

    #[test]
    fn top_level_path_has_no_parent() {
        assert_eq!(RelativePath::from_segments(["file.txt"]).parent(), None);
        assert_eq!(
            RelativePath::from_segments(["dir", "file.txt"]).parent(),
            Some(RelativePath::from_segments(["dir"]))
        );
    }

    #[test]
    fn under_joins_components_onto_root() {
        let path = RelativePath::from_segments(["a", "b"]);
        assert_eq!(
            path.under(Path::new("/tmp/root")),
            Path::new("/tmp/root").join("a").join("b")
        );
    }
}
