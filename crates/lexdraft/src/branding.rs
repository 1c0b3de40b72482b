//! Optional logo loaded once at startup.

use std::io::ErrorKind;
use std::path::Path;

use axum::body::Bytes;
use tokio::fs;
use tracing::{debug, info, warn};

/// An image served at `/logo`.
#[derive(Debug, Clone)]
pub struct Logo {
    pub bytes: Bytes,
    pub content_type: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct Branding {
    logo: Option<Logo>,
}

impl Branding {
    /// Load the logo at `path`. Any failure falls back to no logo.
    pub async fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read(path).await {
            Ok(bytes) => {
                info!(path = %path.display(), "Loaded logo");
                Self {
                    logo: Some(Logo {
                        bytes: Bytes::from(bytes),
                        content_type: content_type_for(path),
                    }),
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No logo found, using text heading");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read logo, using text heading");
                Self::default()
            }
        }
    }

    pub fn logo(&self) -> Option<&Logo> {
        self.logo.as_ref()
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
