//! Parsing of `tree`-style text diagrams.
//!
//! A diagram is read line by line. Each line's depth comes from its
//! indentation guides and branch connector, and a name ending in `/` marks a
//! directory. The result is a [`TreeLayout`] listing the directories and files
//! the diagram describes, relative to an implicit root.

mod line;
mod parser;
mod relative_path;

pub use line::TreeLine;
pub use parser::TreeLayout;
pub use relative_path::RelativePath;
