use crate::utils::{format_duration, format_file_size};

/// Container-level metadata from analysis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaSummary {
    pub file_size: u64,
    pub duration_secs: f64,
    pub video_format: String,
    pub video_bitrate: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl MediaSummary {
    /// Get resolution string
    pub fn resolution_string(&self) -> String {
        match (self.width, self.height) {
            (Some(w), Some(h)) => format!("{}x{}", w, h),
            _ => "Unknown".to_string(),
        }
    }

    pub fn size_string(&self) -> String {
        format_file_size(self.file_size)
    }

    pub fn duration_string(&self) -> String {
        format_duration(self.duration_secs)
    }

    pub fn video_string(&self) -> String {
        non_empty_or_unknown(&self.video_format)
    }

    pub fn bitrate_string(&self) -> String {
        non_empty_or_unknown(&self.video_bitrate)
    }
}

fn non_empty_or_unknown(value: &str) -> String {
    if value.trim().is_empty() {
        "Unknown".to_string()
    } else {
        value.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_string() {
        let summary = MediaSummary {
            width: Some(1920),
            height: Some(1080),
            ..Default::default()
        };
        assert_eq!(summary.resolution_string(), "1920x1080");
        assert_eq!(MediaSummary::default().resolution_string(), "Unknown");
    }

    #[test]
    fn test_missing_video_fields() {
        let summary = MediaSummary::default();
        assert_eq!(summary.video_string(), "Unknown");
        assert_eq!(summary.bitrate_string(), "Unknown");
    }
}
