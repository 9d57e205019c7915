//! Task list file persistence

use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::error::TaskError;
use super::format;
use super::store::TaskList;

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the list from disk. A missing file is the expected first-run
    /// state and yields an empty list; only actual read failures error.
    pub fn load(&self) -> Result<TaskList, TaskError> {
        if !self.path.exists() {
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(format::parse(&content))
    }

    /// Overwrite the file with the rendered list. The previous file body is
    /// copied to a `.bak` sidecar first, best effort.
    pub fn save(&self, tasks: &TaskList) -> Result<(), TaskError> {
        if self.path.exists() {
            if let Err(e) = fs::copy(&self.path, self.backup_path()) {
                warn!("Failed to create backup: {}", e);
            }
        }

        fs::write(&self.path, format::render(tasks))?;
        Ok(())
    }

    fn backup_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path.with_file_name(format!("{}.bak", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_file() -> Result<(), TaskError> {
        let temp = tempdir()?;
        let storage = Storage::new(temp.path().join("list.txt"));

        let tasks = storage.load()?;
        assert!(tasks.is_empty());
        Ok(())
    }

    #[test]
    fn test_roundtrip() -> Result<(), TaskError> {
        let temp = tempdir()?;
        let storage = Storage::new(temp.path().join("list.txt"));

        let mut tasks = TaskList::new();
        tasks.append(false, "Buy an apple");
        tasks.append(true, "Buy a pencil");
        storage.save(&tasks)?;

        let loaded = storage.load()?;
        assert_eq!(loaded, tasks);
        Ok(())
    }

    #[test]
    fn test_save_writes_exact_format() -> Result<(), TaskError> {
        let temp = tempdir()?;
        let path = temp.path().join("list.txt");
        let storage = Storage::new(&path);

        let mut tasks = TaskList::new();
        tasks.append(false, "Buy an apple");
        tasks.append(true, "Buy a pencil");
        storage.save(&tasks)?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content, "0,Buy an apple\n1,Buy a pencil\n");
        Ok(())
    }

    #[test]
    fn test_save_overwrites_previous_content() -> Result<(), TaskError> {
        let temp = tempdir()?;
        let storage = Storage::new(temp.path().join("list.txt"));

        let mut first = TaskList::new();
        first.append(false, "old entry");
        storage.save(&first)?;

        let mut second = TaskList::new();
        second.append(true, "new entry");
        storage.save(&second)?;

        let loaded = storage.load()?;
        assert_eq!(loaded, second);
        Ok(())
    }

    #[test]
    fn test_save_creates_backup() -> Result<(), TaskError> {
        let temp = tempdir()?;
        let path = temp.path().join("list.txt");
        let storage = Storage::new(&path);

        let mut first = TaskList::new();
        first.append(false, "first save");
        storage.save(&first)?;

        let mut second = TaskList::new();
        second.append(false, "second save");
        storage.save(&second)?;

        let backup = fs::read_to_string(temp.path().join("list.txt.bak"))?;
        assert_eq!(backup, "0,first save\n");
        Ok(())
    }

    #[test]
    fn test_first_save_has_no_backup() -> Result<(), TaskError> {
        let temp = tempdir()?;
        let path = temp.path().join("list.txt");
        let storage = Storage::new(&path);

        storage.save(&TaskList::new())?;
        assert!(!temp.path().join("list.txt.bak").exists());
        Ok(())
    }

    #[test]
    fn test_load_tolerates_malformed_lines() -> Result<(), TaskError> {
        let temp = tempdir()?;
        let path = temp.path().join("list.txt");
        fs::write(&path, "0,good\ngarbage without delimiter\n1,also good\n")?;

        let storage = Storage::new(&path);
        let tasks = storage.load()?;

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.get(0).unwrap().text, "good");
        assert_eq!(tasks.get(1).unwrap().text, "also good");
        Ok(())
    }

    #[test]
    fn test_load_empty_file() -> Result<(), TaskError> {
        let temp = tempdir()?;
        let path = temp.path().join("list.txt");
        fs::write(&path, "")?;

        let storage = Storage::new(&path);
        assert!(storage.load()?.is_empty());
        Ok(())
    }
}
