/// Utility functions used throughout the application

use std::path::PathBuf;

/// File name of the debug log written when `--debug` is passed
pub const DEBUG_LOG_FILE: &str = "folio-debug.log";

/// Get platform-specific debug log directory
pub fn get_debug_log_dir() -> PathBuf {
    std::env::temp_dir()
}

/// Format bytes into human-readable string (e.g., "1.2 KB", "5.3 MB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// File name of an image path for captions and placeholders
pub fn display_file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_display_file_name() {
        assert_eq!(display_file_name(Path::new("shots/login.png")), "login.png");
        assert_eq!(display_file_name(Path::new("/")), "/");
    }
}
