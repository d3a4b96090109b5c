//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

#[derive(Default, Clone)]
pub struct CopyOptions {
    pub exclude: Vec<String>,
}

impl CopyOptions {
    /// Exclude Finder metadata that has no business inside an installed bundle
    pub fn exclude_mac_cruft() -> Self {
        Self {
            exclude: vec![".DS_Store".to_string()],
        }
    }

    fn is_excluded(&self, file_name: &std::ffi::OsStr) -> bool {
        self.exclude
            .iter()
            .any(|excluded| file_name.to_str() == Some(excluded.as_str()))
    }
}

/// Count files that `copy_dir_recursive` would copy, for progress totals
pub fn count_files(src: &Path, options: &CopyOptions) -> usize {
    WalkDir::new(src)
        .into_iter()
        .filter_entry(|e| !options.is_excluded(e.file_name()))
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

/// Copy a directory recursively, invoking `on_file` for every file copied
pub fn copy_dir_recursive<F>(
    src: &Path,
    dst: &Path,
    options: &CopyOptions,
    on_file: &mut F,
) -> std::io::Result<()>
where
    F: FnMut(&Path),
{
    if !dst.exists() {
        fs::create_dir_all(dst)?;
    }

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let entry_path = entry.path();
        let file_name = entry.file_name();

        if options.is_excluded(&file_name) {
            continue;
        }

        let dst_path = dst.join(&file_name);

        if entry_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&entry_path, &dst_path, options, on_file)?;
        } else {
            fs::copy(&entry_path, &dst_path)?;
            on_file(&entry_path);
        }
    }

    Ok(())
}
