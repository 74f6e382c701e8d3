use serde::{Deserialize, Serialize};

/// Chain-of-custody record persisted as a JSON sidecar next to an acquired
/// image. Written once after a successful acquisition, never mutated.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AcquisitionRecord {
    pub source: String,
    pub image_path: String,
    pub acquisition_date: String,
    pub md5: String,
    pub sha1: String,
}

/// Terminal record of one full-analysis run: which reports were produced and
/// which steps failed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalysisSummary {
    pub image: String,
    pub offset: Option<u64>,
    pub timestamp: String,
    pub reports: ReportSet,
}

/// Report path per analysis operation; `None` marks a failed step.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ReportSet {
    pub partitions: Option<String>,
    pub filesystem: Option<String>,
    pub file_list: Option<String>,
    pub timeline: Option<String>,
}

impl ReportSet {
    /// Names of the analysis steps that produced no report.
    pub fn failed_steps(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if self.partitions.is_none() {
            failed.push("partitions");
        }
        if self.filesystem.is_none() {
            failed.push("filesystem");
        }
        if self.file_list.is_none() {
            failed.push("file_list");
        }
        if self.timeline.is_none() {
            failed.push("timeline");
        }
        failed
    }

    pub fn is_complete(&self) -> bool {
        self.failed_steps().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_acquisition_record_field_names() {
        let record = AcquisitionRecord {
            source: "/dev/loop0".to_string(),
            image_path: "evidence/test.dd".to_string(),
            acquisition_date: "2024-01-01T12:00:00+00:00".to_string(),
            md5: "d41d8cd98f00b204e9800998ecf8427e".to_string(),
            sha1: "da39a3ee5e6b4b0d3255bfef95601890afd80709".to_string(),
        };

        let json: Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["source"], "/dev/loop0");
        assert_eq!(json["image_path"], "evidence/test.dd");
        assert_eq!(json["md5"].as_str().unwrap().len(), 32);
        assert_eq!(json["sha1"].as_str().unwrap().len(), 40);
        assert!(json["acquisition_date"].is_string());
    }

    #[test]
    fn test_summary_serializes_failed_step_as_null() {
        let summary = AnalysisSummary {
            image: "disk.dd".to_string(),
            offset: Some(63),
            timestamp: "20240101_120000".to_string(),
            reports: ReportSet {
                partitions: Some("reports/partitions_disk_20240101_120000.txt".to_string()),
                filesystem: None,
                file_list: Some("reports/filelist_disk_20240101_120000.txt".to_string()),
                timeline: None,
            },
        };

        let json: Value = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["offset"], 63);
        assert!(json["reports"]["filesystem"].is_null());
        assert!(json["reports"]["timeline"].is_null());
        assert!(json["reports"]["partitions"].is_string());
    }

    #[test]
    fn test_summary_offset_none_is_null() {
        let summary = AnalysisSummary {
            image: "disk.dd".to_string(),
            offset: None,
            timestamp: "20240101_120000".to_string(),
            reports: ReportSet::default(),
        };

        let json: Value = serde_json::to_value(&summary).unwrap();
        assert!(json["offset"].is_null());
    }

    #[test]
    fn test_failed_steps() {
        let mut reports = ReportSet::default();
        assert_eq!(
            reports.failed_steps(),
            vec!["partitions", "filesystem", "file_list", "timeline"]
        );
        assert!(!reports.is_complete());

        reports.partitions = Some("a".to_string());
        reports.filesystem = Some("b".to_string());
        reports.file_list = Some("c".to_string());
        reports.timeline = Some("d".to_string());
        assert!(reports.failed_steps().is_empty());
        assert!(reports.is_complete());
    }
}
