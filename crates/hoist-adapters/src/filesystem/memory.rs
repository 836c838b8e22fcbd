//! Process-local filesystem used by tests and dry runs.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use hoist_core::{
    application::{ApplicationError, ports::Filesystem},
    error::HoistResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(Vec<u8>),
}

type Tree = BTreeMap<PathBuf, Node>;

/// Filesystem held in memory. Clones share the same tree.
///
/// Seeding a file with [`MemoryFilesystem::with_file`] also creates its
/// parent directories; [`Filesystem::write_file`] does not.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    tree: Arc<Mutex<Tree>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `path` with `content`, creating its ancestors.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        if let Ok(mut tree) = self.lock() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                mkdirs(&mut tree, parent);
            }
            tree.insert(path.to_path_buf(), Node::File(content.as_ref().to_vec()));
        }
        self
    }

    /// UTF-8 content of the file at `path`, if there is one.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.lock().ok()?.get(path.as_ref())? {
            Node::File(bytes) => String::from_utf8(bytes.clone()).ok(),
            Node::Dir => None,
        }
    }

    /// Paths of all files in lexical order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.lock()
            .map(|tree| {
                tree.iter()
                    .filter(|(_, node)| matches!(node, Node::File(_)))
                    .map(|(path, _)| path.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn lock(&self) -> HoistResult<MutexGuard<'_, Tree>> {
        self.tree
            .lock()
            .map_err(|_| ApplicationError::FilesystemLock.into())
    }
}

fn mkdirs(tree: &mut Tree, dir: &Path) {
    for ancestor in dir.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        tree.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
    }
}

fn fs_error(path: &Path, reason: &str) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_file(&self, path: &Path) -> HoistResult<Vec<u8>> {
        match self.lock()?.get(path) {
            Some(Node::File(bytes)) => Ok(bytes.clone()),
            Some(Node::Dir) => Err(fs_error(path, "is a directory").into()),
            None => Err(fs_error(path, "file does not exist").into()),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> HoistResult<()> {
        let mut tree = self.lock()?;

        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            if tree.get(parent) != Some(&Node::Dir) {
                return Err(fs_error(path, "parent directory does not exist").into());
            }
        }
        if tree.get(path) == Some(&Node::Dir) {
            return Err(fs_error(path, "is a directory").into());
        }

        tree.insert(path.to_path_buf(), Node::File(content.as_bytes().to_vec()));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> HoistResult<()> {
        let mut tree = self.lock()?;
        mkdirs(&mut tree, path);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock()
            .map(|tree| tree.contains_key(path))
            .unwrap_or(false)
    }
}
