//! File naming for downloadable results.

use serde::{Deserialize, Serialize};

/// Which service produced the text being downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadKind {
    Template,
    Contract,
}

impl DownloadKind {
    fn suffix(self) -> &'static str {
        match self {
            DownloadKind::Template => "template",
            DownloadKind::Contract => "draft",
        }
    }

    /// `{sanitized label}_{suffix}.txt`
    pub fn file_name(self, label: &str) -> String {
        format!("{}_{}.txt", sanitize_label(label), self.suffix())
    }
}

/// Lower-case the label and replace spaces with underscores.
pub fn sanitize_label(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}
