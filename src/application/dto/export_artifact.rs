use crate::comparison::services::export_serializer::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE};

/// A downloadable CSV of the visible comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: String,
    pub encoding: String,
    pub content: String,
}

impl ExportArtifact {
    pub fn csv(content: String) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            mime_type: EXPORT_MIME_TYPE.to_string(),
            encoding: "UTF-8".to_string(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_artifact_metadata() {
        let artifact = ExportArtifact::csv("Vendor".to_string());
        assert_eq!(artifact.file_name, "firewall-comparison.csv");
        assert_eq!(artifact.mime_type, "text/csv");
        assert_eq!(artifact.encoding, "UTF-8");
        assert_eq!(artifact.content, "Vendor");
    }
}
