use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

/// JSON envelope wrapping a single file's base64-encoded bytes.
#[derive(Debug, Deserialize)]
pub struct FileContent {
    data: String,
}

impl FileContent {
    /// Decode the envelope into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.data)
    }
}
