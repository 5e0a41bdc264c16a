const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Preview shown in the upload label once a file is picked.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentPreview {
    pub file_name: String,
    pub size_label: String,
}

impl AttachmentPreview {
    #[must_use]
    pub fn from_file(file_name: &str, size_bytes: f64) -> Self {
        Self {
            file_name: file_name.to_string(),
            size_label: format_megabytes(size_bytes),
        }
    }
}

#[must_use]
pub fn format_megabytes(size_bytes: f64) -> String {
    let size = if size_bytes.is_finite() && size_bytes > 0.0 {
        size_bytes
    } else {
        0.0
    };
    format!("{:.2} MB", size / BYTES_PER_MEGABYTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_size_in_megabytes_with_two_decimals() {
        assert_eq!(format_megabytes(1_048_576.0), "1.00 MB");
        assert_eq!(format_megabytes(2_621_440.0), "2.50 MB");
        assert_eq!(format_megabytes(1_000.0), "0.00 MB");
        assert_eq!(format_megabytes(0.0), "0.00 MB");
    }

    #[test]
    fn invalid_sizes_render_as_zero() {
        assert_eq!(format_megabytes(f64::NAN), "0.00 MB");
        assert_eq!(format_megabytes(-5.0), "0.00 MB");
    }

    #[test]
    fn preview_keeps_file_name() {
        let preview = AttachmentPreview::from_file("broken-window.jpg", 3_145_728.0);
        assert_eq!(preview.file_name, "broken-window.jpg");
        assert_eq!(preview.size_label, "3.00 MB");
    }
}
