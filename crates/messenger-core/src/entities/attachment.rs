//! Attachment entity - file attached to a message

use serde_json::Value;

use crate::payloads::AttachmentPayload;

/// Attachment metadata with a precomputed download link
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attachment {
    pub attachment_id: Option<String>,
    pub user_id: String,
    pub name: String,
    /// Opaque metadata blob (dimensions, mime details) passed through as-is
    pub meta: Option<Value>,
    pub url: String,
    pub preview_url: String,
    /// `url` with a `download=1` query parameter appended
    pub download_url: String,
}

impl Attachment {
    #[inline]
    pub fn has_preview(&self) -> bool {
        !self.preview_url.is_empty()
    }
}

/// Append the forced-download marker to a source URL.
///
/// Joins with `&` when the URL already carries a query string, `?`
/// otherwise. The URL itself is never validated or rewritten; an empty
/// source yields an empty link.
fn download_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let join = if url.contains('?') { '&' } else { '?' };
    format!("{url}{join}download=1")
}

impl From<AttachmentPayload> for Attachment {
    fn from(payload: AttachmentPayload) -> Self {
        let url = payload.url.unwrap_or_default();
        let download_url = download_url(&url);

        Self {
            attachment_id: payload.attachment_id,
            user_id: payload.user_id.unwrap_or_default(),
            name: payload.name.unwrap_or_default(),
            meta: payload.meta,
            url,
            preview_url: payload.preview_url.unwrap_or_default(),
            download_url,
        }
    }
}
