use std::path::{Component, Path, PathBuf};

/// Renders a path the way a user would recognise it: canonical when it exists,
/// otherwise absolute with `.` and `..` resolved lexically.
pub fn best_effort_path_display(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    lexically_normalize(&absolute).display().to_string()
}

fn lexically_normalize(path: &Path) -> PathBuf {
    path.components()
        .fold(Vec::new(), |mut components, component| {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if matches!(components.last(), Some(Component::Normal(_))) {
                        components.pop();
                    }
                }
                other => components.push(other),
            }
            components
        })
        .into_iter()
        .collect()
}

pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl<P: AsRef<Path> + ?Sized> BestEffortPathExt for P {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn existing_path_is_canonicalized() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join(".").join("sub");
        std::fs::create_dir(&nested).expect("Failed to create sub directory");

        let expected = nested.canonicalize().expect("Failed to canonicalize");
        assert_eq!(nested.best_effort_path_display(), expected.display().to_string());
    }

    #[test]
    fn missing_path_is_normalized_lexically() {
        let display = Path::new("/does/not/../exist/./file.txt").best_effort_path_display();
        assert_eq!(
            display,
            Path::new("/does/exist/file.txt").display().to_string()
        );
    }

    #[test]
    fn relative_missing_path_becomes_absolute() {
        let display = "no-such-dir/file.txt".best_effort_path_display();
        assert!(Path::new(&display).is_absolute());
        assert!(display.ends_with("file.txt"));
    }
}
