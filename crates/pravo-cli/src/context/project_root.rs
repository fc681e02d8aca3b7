use std::path::{Path, PathBuf};

use pravo_config::PROJECT_DIR;

/// Walk upwards from `start` until a `.pravo` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(PROJECT_DIR).is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Accept `path/.pravo` as well as `path` wherever a project root is named.
#[must_use]
pub fn strip_project_dir(path: PathBuf) -> PathBuf {
    let is_project_dir = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == PROJECT_DIR);
    if is_project_dir {
        path.parent().map_or(path.clone(), Path::to_path_buf)
    } else {
        path
    }
}
