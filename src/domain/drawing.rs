use bytes::Bytes;

pub const DEFAULT_DRAWING_FILE_NAME: &str = "drawing.png";

/// A hand-drawn character image submitted for recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingUpload {
    pub image: Bytes,
    pub file_name: String,
    pub content_type: Option<String>,
}

impl DrawingUpload {
    pub fn new(image: Bytes, file_name: Option<String>, content_type: Option<String>) -> Self {
        Self {
            image,
            file_name: file_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_DRAWING_FILE_NAME.to_string()),
            content_type: content_type.filter(|ct| !ct.is_empty()),
        }
    }
}
