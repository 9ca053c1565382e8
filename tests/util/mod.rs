#![allow(dead_code)]

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::{Duration, SystemTime};

pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Creates a file with the given content whose mtime lies `age` in the past.
pub fn create_file_aged(path: &Path, age: Duration, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    let modified = SystemTime::now() - age;
    File::options().write(true).open(path)?.set_modified(modified)
}

pub fn create_file_days_ago(path: &Path, days_ago: u32, content: &[u8]) -> io::Result<()> {
    create_file_aged(path, DAY * days_ago, content)
}

/// Converts a path into the string form the exclusion list takes.
pub fn skip_entry(path: &Path) -> String {
    path.to_str().expect("temp paths are UTF-8").to_string()
}
