use serde::{Deserialize, Serialize};

/// Extension given to every stored capture.
pub(crate) const PHOTO_EXT: &str = ".jpeg";

/// Prefix turning base64 image data into a displayable URI.
pub(crate) const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// One captured photo.
///
/// `filepath` names the stored file. `webview_path` is whatever reference is
/// currently cheapest to display: the camera's transient reference right
/// after capture, or a data URI rebuilt from the file store after a reload.
/// Only `filepath` is load-bearing across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub filepath: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webview_path: Option<String>,
}
