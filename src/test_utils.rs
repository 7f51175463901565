#[cfg(test)]
pub mod fixtures {
    use std::ffi::OsString;
    use std::fs;
    use tempfile::TempDir;

    /// Create a temporary directory holding `files` (empty regular files)
    /// and `dirs` (empty sub-directories).
    pub fn create_scan_dir(files: &[&str], dirs: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in files {
            fs::write(dir.path().join(name), "").unwrap();
        }
        for name in dirs {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        dir
    }

    pub fn dir_str(dir: &TempDir) -> String {
        dir.path().to_str().unwrap().to_string()
    }

    /// Join directories into a search-path value.
    pub fn search_path(dirs: &[&str]) -> String {
        dirs.join(":")
    }

    /// Convert UTF-8 list elements for comparison against literals.
    pub fn strings(items: Vec<OsString>) -> Vec<String> {
        items.into_iter().map(|s| s.into_string().unwrap()).collect()
    }
}
