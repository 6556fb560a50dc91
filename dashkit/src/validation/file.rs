//! File constraint helpers

use crate::model::FileInfo;

/// Checks a file against an `accept` list such as `image/*,.pdf`.
///
/// Entries starting with `.` match the extension case-insensitively,
/// entries ending in `/*` match a MIME prefix, anything else must equal the
/// MIME type exactly.
pub fn file_accepted(file: &FileInfo, accept: &str) -> bool {
    let extension = file.extension().to_lowercase();
    accept.split(',').map(str::trim).any(|entry| {
        if entry.starts_with('.') {
            extension == entry.to_lowercase()
        } else if let Some(prefix) = entry.strip_suffix("/*") {
            file.mime.starts_with(prefix)
        } else {
            file.mime == entry
        }
    })
}

/// Formats a byte count with 1024-based units, e.g. `1.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    while exponent + 1 < UNITS.len() && bytes >= 1024u64.pow(exponent as u32 + 1) {
        exponent += 1;
    }
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    }

    #[test]
    fn test_accept_by_extension() {
        let file = FileInfo::new("report.PDF", 10, "application/pdf");
        assert!(file_accepted(&file, ".pdf"));
        assert!(file_accepted(&file, "image/*, .pdf"));
        assert!(!file_accepted(&file, ".doc"));
    }

    #[test]
    fn test_accept_by_mime() {
        let file = FileInfo::new("photo.jpg", 10, "image/jpeg");
        assert!(file_accepted(&file, "image/*"));
        assert!(file_accepted(&file, "image/jpeg"));
        assert!(!file_accepted(&file, "image/png"));
        assert!(!file_accepted(&file, "video/*"));
    }
}
