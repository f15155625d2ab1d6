use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Locate the first file under `root` whose path satisfies `predicate`.
///
/// Traversal is depth-first with entries sorted by file name, so the result
/// is deterministic for a given tree. Unreadable entries are skipped.
pub fn find_first_file<P>(root: &Path, predicate: P) -> Option<PathBuf>
where
    P: Fn(&Path) -> bool,
{
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .find(|path| predicate(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn has_mp4_ext(path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some("mp4")
    }

    #[test]
    fn finds_file_in_nested_tree() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("videos").join("scene").join("720p30");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("Example.mp4"), b"data").unwrap();

        let found = find_first_file(dir.path(), has_mp4_ext).unwrap();
        assert_eq!(found, nested.join("Example.mp4"));
    }

    #[test]
    fn first_match_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b").join("second.mp4"), b"2").unwrap();
        fs::write(dir.path().join("a").join("first.mp4"), b"1").unwrap();

        let found = find_first_file(dir.path(), has_mp4_ext).unwrap();
        assert!(found.ends_with("a/first.mp4"), "got {}", found.display());
    }

    #[test]
    fn ignores_non_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("log.txt"), b"log").unwrap();

        assert!(find_first_file(dir.path(), has_mp4_ext).is_none());
    }

    #[test]
    fn empty_tree_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_first_file(dir.path(), has_mp4_ext).is_none());
    }
}
