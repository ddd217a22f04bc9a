use thiserror::Error;
use crate::models::{PhotoFile, PhotoLimits};

/// Upload guardrail violations
#[derive(Debug, Error, PartialEq)]
pub enum PhotoError {
    #[error("One or more files exceed {}MB.", megabytes(.max_bytes))]
    TooLarge { name: String, max_bytes: u64 },

    #[error("Only PNG, JPG, or WEBP images are allowed.")]
    UnsupportedType { name: String, content_type: String },
}

const BYTES_PER_MB: u64 = 1024 * 1024;

fn megabytes(bytes: &u64) -> String {
    if bytes % BYTES_PER_MB == 0 {
        (bytes / BYTES_PER_MB).to_string()
    } else {
        format!("{:.1}", *bytes as f64 / BYTES_PER_MB as f64)
    }
}

/// Photos kept after a batch was added
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoSelection {
    pub accepted: Vec<PhotoFile>,
    pub dropped: usize,
}

/// Check a newly picked batch and append it to the current selection
///
/// The whole batch is rejected if any file is too large, then if any file
/// has a disallowed type. Accepted batches are truncated to `max_files`.
pub fn add_photos(
    existing: &[PhotoFile],
    incoming: &[PhotoFile],
    limits: &PhotoLimits,
) -> Result<PhotoSelection, PhotoError> {
    if let Some(big) = incoming.iter().find(|f| f.size_bytes > limits.max_file_bytes) {
        tracing::debug!("Rejecting photo batch: {} is {} bytes", big.name, big.size_bytes);
        return Err(PhotoError::TooLarge {
            name: big.name.clone(),
            max_bytes: limits.max_file_bytes,
        });
    }

    if let Some(bad) = incoming.iter().find(|f| {
        !limits
            .allowed_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(f.content_type.trim()))
    }) {
        return Err(PhotoError::UnsupportedType {
            name: bad.name.clone(),
            content_type: bad.content_type.clone(),
        });
    }

    let total = existing.len() + incoming.len();
    let accepted: Vec<PhotoFile> = existing
        .iter()
        .chain(incoming.iter())
        .take(limits.max_files)
        .cloned()
        .collect();

    Ok(PhotoSelection {
        dropped: total - accepted.len(),
        accepted,
    })
}
