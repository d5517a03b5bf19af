//! Formatting utilities for timestamps, listings, and other display values.

use chrono::NaiveTime;

/// Marker printed in front of directories by `ls`.
const DIR_MARKER: &str = "<DIR>";

/// Format a wall-clock time for log lines (e.g., "09:04:59").
///
/// Always 24-hour and locale-independent.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Format one `ls` row, DOS style (e.g., "<DIR> projects", "      about.txt").
///
/// File names are padded to line up with directory names.
pub fn format_listing(name: &str, is_dir: bool) -> String {
    if is_dir {
        format!("{} {}", DIR_MARKER, name)
    } else {
        format!("{:width$} {}", "", name, width = DIR_MARKER.len())
    }
}

/// Format the console window label (e.g., "v9_shell_/projects").
pub fn format_shell_label(shell_name: &str, path: &str) -> String {
    format!("{}_{}", shell_name, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        let time = NaiveTime::from_hms_opt(9, 4, 59).unwrap();
        assert_eq!(format_clock(time), "09:04:59");
        let time = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
        assert_eq!(format_clock(time), "23:00:00");
    }

    #[test]
    fn test_format_listing() {
        assert_eq!(format_listing("projects", true), "<DIR> projects");
        assert_eq!(format_listing("about.txt", false), "      about.txt");
    }

    #[test]
    fn test_format_shell_label() {
        assert_eq!(format_shell_label("v9_shell", "/"), "v9_shell_/");
    }
}
