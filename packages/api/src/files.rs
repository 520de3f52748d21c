//! File attachment transfer: multipart upload to a project or task,
//! authenticated download, listings and deletion.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use store::FileInfo;

use crate::client::ApiClient;
use crate::error::ApiError;

/// What an upload attaches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadTarget {
    Project(i64),
    Task(i64),
}

impl UploadTarget {
    fn upload_path(&self) -> String {
        match self {
            Self::Project(id) => format!("/api/projects/{id}/files"),
            Self::Task(id) => format!("/api/issues/{id}/files"),
        }
    }

    fn list_path(&self) -> String {
        self.upload_path()
    }
}

/// A downloaded attachment: the bytes plus the name the server suggested.
#[derive(Clone, Debug)]
pub struct DownloadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ApiClient {
    /// `POST /api/projects/{id}/files` or `POST /api/issues/{id}/files`
    /// as `multipart/form-data` with a single `file` part.
    pub async fn upload_file(
        &self,
        target: UploadTarget,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<FileInfo, ApiError> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);
        let response = self
            .execute(self.request(Method::POST, &target.upload_path()).multipart(form))
            .await?;
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Files attached to a project or task.
    pub async fn list_files(&self, target: UploadTarget) -> Result<Vec<FileInfo>, ApiError> {
        self.get_json(&target.list_path()).await
    }

    /// `GET /api/files/{id}`
    pub async fn file_details(&self, file_id: i64) -> Result<FileInfo, ApiError> {
        self.get_json(&format!("/api/files/{file_id}")).await
    }

    /// `GET /api/files/{id}/download`, authenticated like every other call.
    ///
    /// The filename comes from `Content-Disposition` when the server sends
    /// one, else falls back to `file-{id}`.
    pub async fn download_file(&self, file_id: i64) -> Result<DownloadedFile, ApiError> {
        let response = self
            .execute(self.request(Method::GET, &format!("/api/files/{file_id}/download")))
            .await?;

        let filename = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_content_disposition)
            .unwrap_or_else(|| format!("file-{file_id}"));

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        Ok(DownloadedFile {
            filename,
            bytes: bytes.to_vec(),
        })
    }

    /// `DELETE /api/files/{id}`
    pub async fn delete_file(&self, file_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/files/{file_id}")).await
    }
}

/// Pull a filename out of a `Content-Disposition` header. Prefers the
/// RFC 5987 `filename*=UTF-8''…` form (percent-decoded) over the plain
/// `filename="…"` form.
fn filename_from_content_disposition(header: &str) -> Option<String> {
    for param in header.split(';') {
        let param = param.trim();
        if let Some(encoded) = param.strip_prefix("filename*=UTF-8''") {
            let end = encoded.find(';').unwrap_or(encoded.len());
            return Some(percent_decode(&encoded[..end]));
        }
    }
    for param in header.split(';') {
        let param = param.trim();
        if let Some(value) = param.strip_prefix("filename=") {
            let value = value.trim_matches('"');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Minimal percent-decoding for header parameter values. Invalid escapes
/// pass through untouched.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let decoded = (bytes[i] == b'%' && i + 2 < bytes.len())
            .then(|| std::str::from_utf8(&bytes[i + 1..i + 3]).ok())
            .flatten()
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match decoded {
            Some(byte) => {
                out.push(byte);
                i += 3;
            }
            None => {
                out.push(bytes[i]);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_filename() {
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="report.pdf""#),
            Some("report.pdf".to_string())
        );
        assert_eq!(
            filename_from_content_disposition("attachment; filename=notes.txt"),
            Some("notes.txt".to_string())
        );
    }

    #[test]
    fn rfc5987_filename_wins_and_is_decoded() {
        assert_eq!(
            filename_from_content_disposition(
                r#"attachment; filename="fallback.bin"; filename*=UTF-8''sprint%20plan.pdf"#
            ),
            Some("sprint plan.pdf".to_string())
        );
    }

    #[test]
    fn missing_filename_yields_none() {
        assert_eq!(filename_from_content_disposition("attachment"), None);
        assert_eq!(filename_from_content_disposition(r#"attachment; filename="""#), None);
    }

    #[test]
    fn percent_decode_passes_invalid_escapes_through() {
        assert_eq!(percent_decode("a%2Gb"), "a%2Gb");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("a%20b"), "a b");
    }

    #[test]
    fn upload_paths() {
        assert_eq!(UploadTarget::Project(4).upload_path(), "/api/projects/4/files");
        assert_eq!(UploadTarget::Task(9).upload_path(), "/api/issues/9/files");
    }
}
