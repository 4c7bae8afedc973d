// Recase Export
// Writing converted text to disk

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `content` to `path` through a sibling temp file and a rename, so a
/// reader never sees a half-written export.
///
/// The temp file is `<file name>.<pid>.tmp` next to the target. It never
/// shares a name with the target or with a `<stem>.tmp` the user may keep.
pub fn save_text_atomic(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(path)?;
    if let Err(err) = fs::write(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    log::debug!("Saved {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("export path has no file name: {}", path.display()),
        )
    })?;

    let mut temp_name = OsString::from(file_name);
    temp_name.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(temp_name))
}
