use std::fs;

/// Reads a value from disk, dropping the trailing newline editors and
/// mounted secret volumes usually leave behind.
pub fn load(path: &str) -> Result<String, String> {
    fs::read_to_string(path)
        .map(|content| content.trim_end_matches(['\r', '\n']).to_string())
        .map_err(|e| format!("Failed to read file '{}': {}", path, e))
}
