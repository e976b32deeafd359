//! Single-file multipart upload.
//!
//! Upload bytes are persisted to a scratch file in the platform temp
//! directory, then streamed into a single multipart field once the
//! provider has designated an edge server. `ondup=overwrite` means a
//! prior file at the same namespaced path is silently replaced.

use std::io::Write;

use tokio_util::io::ReaderStream;

use crate::client::TransferClient;
use crate::envelope;
use crate::error::UploadError;
use crate::path::{namespace, query_escape};

impl TransferClient {
    /// Uploads `data` to the namespaced form of `relative_path`.
    ///
    /// On success returns the provider's raw response body; callers
    /// that need structured fields (remote path, size, revision) parse
    /// it themselves. A nonzero error envelope inside an HTTP 200 body
    /// surfaces as [`UploadError::Provider`].
    pub async fn upload(
        &self,
        access_token: &str,
        relative_path: &str,
        data: &[u8],
    ) -> Result<String, UploadError> {
        tracing::info!(path = relative_path, size = data.len(), "starting upload");

        // The scratch file is removed on drop, on every exit path.
        let scratch = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(".tmp")
            .tempfile()?;
        let mut writer = scratch.as_file();
        writer.write_all(data)?;
        writer.flush()?;

        let absolute_path = namespace(relative_path);
        let domain = self
            .resolve_upload_domain(access_token, &absolute_path)
            .await?;

        let upload_url = format!(
            "{domain}/rest/2.0/pcs/file?method=upload&access_token={access_token}&path={}&ondup=overwrite",
            query_escape(&absolute_path),
        );

        // Stream the scratch file into the multipart writer; the file
        // contents are never buffered a second time.
        let file = tokio::fs::File::open(scratch.path()).await?;
        let part = reqwest::multipart::Part::stream(reqwest::Body::wrap_stream(ReaderStream::new(
            file,
        )))
        .file_name("upload");
        let form = reqwest::multipart::Form::new().part("file", part);

        let req = self
            .http()
            .post(&upload_url)
            .multipart(form)
            .build()
            .map_err(UploadError::Transport)?;
        let resp = self.send(req).await.map_err(UploadError::Transport)?;
        let resp = self.read_body(resp).await.map_err(UploadError::Read)?;

        if let Some((code, message)) = envelope::classify(&resp.body) {
            tracing::warn!(code, message = %message, "upload rejected by provider");
            return Err(UploadError::Provider { code, message });
        }

        tracing::info!(path = %absolute_path, "upload complete");
        Ok(resp.text())
    }
}
