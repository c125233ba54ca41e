use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Resolve a delimiter-separated path list into an ordered sequence of
/// existing files.
///
/// `;` is the preferred delimiter, `,` the fallback; a string containing
/// neither is a single path. Blank entries, duplicates (first occurrence
/// wins), and paths that are not existing files are silently dropped.
pub fn split_path_list(list: Option<&str>) -> Vec<PathBuf> {
    let Some(list) = list else {
        return Vec::new();
    };
    if list.trim().is_empty() {
        return Vec::new();
    }

    let parts: Vec<&str> = if list.contains(';') {
        list.split(';').collect()
    } else if list.contains(',') {
        list.split(',').collect()
    } else {
        vec![list]
    };

    let mut seen = HashSet::new();
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .filter(|p| seen.insert(p.clone()))
        .filter(|p| p.is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn absent_or_blank_yields_empty() {
        assert!(split_path_list(None).is_empty());
        assert!(split_path_list(Some("")).is_empty());
        assert!(split_path_list(Some("   ")).is_empty());
    }

    #[test]
    fn semicolon_preferred_over_comma() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "a,b.png");
        let c = touch(dir.path(), "c.png");
        // The `;` split keeps the comma inside the first filename intact.
        let list = format!("{};{}", a.display(), c.display());
        assert_eq!(split_path_list(Some(&list)), vec![a, c]);
    }

    #[test]
    fn comma_fallback_splits() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "a.png");
        let b = touch(dir.path(), "b.png");
        let list = format!("{},{}", a.display(), b.display());
        assert_eq!(split_path_list(Some(&list)), vec![a, b]);
    }

    #[test]
    fn single_path_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "only.png");
        assert_eq!(split_path_list(Some(a.to_str().unwrap())), vec![a]);
    }

    #[test]
    fn missing_files_and_duplicates_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "a.png");
        let ghost = dir.path().join("missing.png");
        let list = format!("{};{};{}", a.display(), ghost.display(), a.display());
        assert_eq!(split_path_list(Some(&list)), vec![a]);
    }
}
