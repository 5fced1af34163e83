use crate::error::SortError;
use crate::organize::slash_path;
use crate::trace::{LogEntry, RunLog};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Remove every empty folder below `work_dir`, deepest first.
///
/// A folder whose only content is a chain of empty folders goes too. The
/// root itself is never removed. Returns the number of folders removed;
/// running it again on the same tree removes nothing.
pub fn prune_empty_dirs(work_dir: &Path, log: &mut RunLog) -> Result<usize, SortError> {
    let mut removed = 0;

    for entry in WalkDir::new(work_dir)
        .min_depth(1)
        .contents_first(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let is_empty = fs::read_dir(path)
            .map_err(|e| SortError::io("list", path, e))?
            .next()
            .is_none();
        if !is_empty {
            continue;
        }

        fs::remove_dir(path).map_err(|e| SortError::io("remove folder", path, e))?;
        removed += 1;

        let rel = path.strip_prefix(work_dir).unwrap_or(path);
        log.push(LogEntry::Pruned {
            folder: slash_path(rel),
        });
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folders(log: &RunLog) -> Vec<String> {
        log.entries()
            .iter()
            .filter_map(|e| match e {
                LogEntry::Pruned { folder } => Some(folder.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_removes_empty_keeps_populated() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("B85536134")).unwrap();
        fs::create_dir(root.join("A80652928")).unwrap();
        fs::write(root.join("A80652928").join("a.pdf"), b"x").unwrap();

        let mut log = RunLog::new();
        assert_eq!(prune_empty_dirs(root, &mut log).unwrap(), 1);

        assert!(!root.join("B85536134").exists());
        assert!(root.join("A80652928").join("a.pdf").is_file());
        assert_eq!(folders(&log), vec!["B85536134"]);
    }

    #[test]
    fn test_nested_empty_chain_collapses() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("A80652928").join("Z99999999").join("deeper")).unwrap();

        let mut log = RunLog::new();
        assert_eq!(prune_empty_dirs(root, &mut log).unwrap(), 3);

        assert!(!root.join("A80652928").exists());
        assert!(root.exists());
        assert_eq!(
            folders(&log),
            vec![
                "A80652928/Z99999999/deeper",
                "A80652928/Z99999999",
                "A80652928"
            ]
        );
    }

    #[test]
    fn test_primary_kept_when_secondary_populated() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let nested = root.join("A80652928").join("Z99999999");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("multi.pdf"), b"x").unwrap();

        let mut log = RunLog::new();
        assert_eq!(prune_empty_dirs(root, &mut log).unwrap(), 0);
        assert!(nested.join("multi.pdf").is_file());
    }

    #[test]
    fn test_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("x").join("y")).unwrap();
        fs::create_dir(root.join("kept")).unwrap();
        fs::write(root.join("kept").join("f"), b"x").unwrap();

        let mut log = RunLog::new();
        assert_eq!(prune_empty_dirs(root, &mut log).unwrap(), 2);
        assert_eq!(prune_empty_dirs(root, &mut log).unwrap(), 0);
        assert_eq!(log.len(), 2);
        assert!(root.join("kept").join("f").is_file());
    }

    #[test]
    fn test_empty_root_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = RunLog::new();
        assert_eq!(prune_empty_dirs(dir.path(), &mut log).unwrap(), 0);
        assert!(dir.path().exists());
    }

    #[test]
    fn test_log_order_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for name in ["Sin identificar", "B85536134", "A81944720", "B47384649", "A80652928"] {
            fs::create_dir(root.join(name)).unwrap();
        }

        let mut log = RunLog::new();
        prune_empty_dirs(root, &mut log).unwrap();
        assert_eq!(
            folders(&log),
            vec!["A80652928", "A81944720", "B47384649", "B85536134", "Sin identificar"]
        );
    }
}
