use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::error::RotationError;

/// Whole-blob text transport. The rest of the crate never sees transport
/// details or credentials.
pub trait BlobStorage: Send + Sync {
    fn download(&self, blob_name: &str) -> Result<String, RotationError>;
    fn upload(&self, blob_name: &str, content: &str) -> Result<(), RotationError>;
}

/// Azure Blob Storage over the REST endpoint, authenticated with a SAS
/// token appended to each request. Blocking client; callers run it inside
/// `spawn_blocking`.
pub struct AzureBlobClient {
    account_url: String,
    container: String,
    sas_token: Option<String>,
    client: Client,
}

impl AzureBlobClient {
    pub fn new(account_url: &str, container: &str, sas_token: Option<String>) -> Self {
        Self {
            account_url: account_url.trim_end_matches('/').to_string(),
            container: container.to_string(),
            sas_token,
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("reqwest client"),
        }
    }

    fn blob_url(&self, blob_name: &str) -> String {
        let base = format!("{}/{}/{}", self.account_url, self.container, blob_name);
        match &self.sas_token {
            Some(token) => format!("{}?{}", base, token.trim_start_matches('?')),
            None => base,
        }
    }
}

impl BlobStorage for AzureBlobClient {
    fn download(&self, blob_name: &str) -> Result<String, RotationError> {
        debug!("downloading blob {}", blob_name);
        let resp = self.client.get(self.blob_url(blob_name)).send()?;
        if resp.status().is_success() {
            Ok(resp.text()?)
        } else {
            Err(RotationError::Storage(format!(
                "download {}: http {}",
                blob_name,
                resp.status().as_u16()
            )))
        }
    }

    fn upload(&self, blob_name: &str, content: &str) -> Result<(), RotationError> {
        debug!("uploading blob {} ({} bytes)", blob_name, content.len());
        let resp = self
            .client
            .put(self.blob_url(blob_name))
            .header("x-ms-blob-type", "BlockBlob")
            .header(CONTENT_TYPE, "text/csv")
            .body(content.to_string())
            .send()?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(RotationError::Storage(format!(
                "upload {}: http {}",
                blob_name,
                resp.status().as_u16()
            )))
        }
    }
}

/// Flat files in a directory; stands in for the cloud container during
/// development and in tests.
pub struct LocalBlobStore {
    dir: PathBuf,
}

impl LocalBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl BlobStorage for LocalBlobStore {
    fn download(&self, blob_name: &str) -> Result<String, RotationError> {
        let path = self.dir.join(blob_name);
        fs::read_to_string(&path)
            .map_err(|err| RotationError::Storage(format!("read {:?}: {}", path, err)))
    }

    fn upload(&self, blob_name: &str, content: &str) -> Result<(), RotationError> {
        fs::create_dir_all(&self.dir)
            .map_err(|err| RotationError::Storage(format!("create {:?}: {}", self.dir, err)))?;
        let path = self.dir.join(blob_name);
        fs::write(&path, content)
            .map_err(|err| RotationError::Storage(format!("write {:?}: {}", path, err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_store_round_trips_a_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path());
        store.upload("moderators.csv", "Moderator\nAnn\n").unwrap();
        let content = store.download("moderators.csv").unwrap();
        assert_eq!(content, "Moderator\nAnn\n");
    }

    #[test]
    fn local_store_missing_blob_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path());
        let err = store.download("missing.csv").unwrap_err();
        assert!(matches!(err, RotationError::Storage(_)));
    }

    #[test]
    fn azure_urls_carry_the_sas_token() {
        let client = AzureBlobClient::new(
            "https://acct.blob.core.windows.net/",
            "standup",
            Some("?sv=2022&sig=abc".to_string()),
        );
        assert_eq!(
            client.blob_url("moderators.csv"),
            "https://acct.blob.core.windows.net/standup/moderators.csv?sv=2022&sig=abc"
        );
    }
}
