use async_trait::async_trait;
use brandhub_error::{media::MediaError, MediaResult};
use brandhub_models::MediaStore;
use brandhub_utils::hash::sha256_bytes;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Media store writing one file per distinct blob under a root directory.
///
/// Files are named by the hex SHA-256 of their content, so identical images share a file
/// and each writer stages its bytes under its own temporary name.
#[derive(Debug, Clone)]
pub struct FsMediaStore {
    root: PathBuf,
}

impl FsMediaStore {
    pub async fn new(root: impl Into<PathBuf>) -> MediaResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, reference: &str) -> MediaResult<PathBuf> {
        let valid = reference.len() == 64
            && reference
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !valid {
            return Err(MediaError::InvalidReference(reference.to_string()));
        }
        Ok(self.root.join(reference))
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    #[instrument(name = "media-save", skip_all, fields(len = bytes.len()))]
    async fn save(&self, bytes: Vec<u8>) -> MediaResult<String> {
        if bytes.is_empty() {
            return Err(MediaError::EmptyPayload);
        }
        let reference = sha256_bytes(&bytes);
        let path = self.path_for(&reference)?;
        if tokio::fs::try_exists(&path).await? {
            debug!(%reference, "Media already stored");
            return Ok(reference);
        }

        // Write-then-rename keeps half-written files out of sight
        let tmp = self
            .root
            .join(format!("{reference}.{}.tmp", Uuid::new_v4().simple()));
        if let Err(e) = tokio::fs::write(&tmp, &bytes).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            // a concurrent writer of the same content got there first
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                debug!(%reference, "Media stored concurrently");
                return Ok(reference);
            }
            return Err(e.into());
        }
        debug!(%reference, "Media stored");
        Ok(reference)
    }

    async fn load(&self, reference: &str) -> MediaResult<Vec<u8>> {
        let path = self.path_for(reference)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(MediaError::NotFound(reference.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_is_content_addressed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsMediaStore::new(dir.path().join("media")).await.unwrap();

        let a = store.save(b"image-a".to_vec()).await.unwrap();
        let again = store.save(b"image-a".to_vec()).await.unwrap();
        let b = store.save(b"image-b".to_vec()).await.unwrap();
        assert_eq!(a, again);
        assert_ne!(a, b);

        assert_eq!(store.load(&a).await.unwrap(), b"image-a");
        assert_eq!(store.load(&b).await.unwrap(), b"image-b");
    }

    #[tokio::test]
    async fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsMediaStore::new(dir.path()).await.unwrap();

        assert!(matches!(
            store.load("../etc/passwd").await,
            Err(MediaError::InvalidReference(_))
        ));
        let missing = sha256_bytes(b"never saved");
        assert!(matches!(
            store.load(&missing).await,
            Err(MediaError::NotFound(_))
        ));
        assert!(matches!(
            store.save(Vec::new()).await,
            Err(MediaError::EmptyPayload)
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_of_same_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsMediaStore::new(dir.path()).await.unwrap();
        let payload: Vec<u8> = (0..256 * 1024).map(|i| (i % 251) as u8).collect();
        let expected = sha256_bytes(&payload);

        for _ in 0..20 {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let store = store.clone();
                    let payload = payload.clone();
                    tokio::spawn(async move { store.save(payload).await })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.await.unwrap().unwrap(), expected);
            }
            tokio::fs::remove_file(dir.path().join(&expected)).await.unwrap();
        }

        let mut entries = tokio::fs::read_dir(dir.path()).await.unwrap();
        assert!(entries.next_entry().await.unwrap().is_none(), "no temp files left");
    }
}
