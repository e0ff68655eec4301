use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub fn write_string_to_file(path: impl AsRef<Path>, content: &str) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Writes `content` to `output` when given, otherwise prints it to STDOUT.
pub fn write_or_print(output: Option<&Path>, content: &str) -> std::io::Result<()> {
    match output {
        Some(path) => write_string_to_file(path, content),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
