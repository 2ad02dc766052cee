use std::path::PathBuf;

pub fn is_file_exist(file_path: &str) -> Result<PathBuf, String> {
    let file_path = PathBuf::from(file_path);

    if file_path.is_file() {
        Ok(file_path)
    } else {
        Err(format!("file does not exist: {}", file_path.display()))
    }
}
