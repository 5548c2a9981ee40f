use std::path::{Path, PathBuf};

use reqwest::Client;
use tokio::sync::Mutex;

use crate::config;

use super::DEFAULT_TIMEOUT;

/// On-disk cache of album cover images, one JPEG per album id.
///
/// Downloads are idempotent: a cover that already exists on disk is never
/// re-fetched, and files are immutable once committed. Writes go through a
/// single coarse lock and land via a temporary file plus rename, so an
/// interrupted or concurrent download can never publish a partial image.
/// Readers need no coordination since committed files never change.
pub struct CoverCache {
    dir: PathBuf,
    http: Client,
    write_lock: Mutex<()>,
}

impl CoverCache {
    pub fn new(dir: PathBuf) -> Self {
        CoverCache {
            dir,
            http: Client::new(),
            write_lock: Mutex::new(()),
        }
    }

    /// Builds a cache rooted at the configured covers directory.
    pub fn from_config() -> Self {
        Self::new(config::covers_dir())
    }

    /// Cache location for an album's cover image.
    pub fn path_for(&self, album_id: &str) -> PathBuf {
        self.dir.join(format!("{}.jpeg", album_id))
    }

    /// Downloads `url` to `path` unless the file already exists.
    ///
    /// # Behavior
    ///
    /// - An existing destination wins over a re-fetch: the function returns
    ///   immediately without issuing a request.
    /// - An empty `url` (a track whose album had no third image) is a no-op.
    /// - The body is written to a `.part` sibling and renamed into place on
    ///   completion, under the cache-wide write lock.
    /// - A non-success response or an empty body is not committed; cache
    ///   entries are immutable, so an error page must never become an
    ///   album's permanent cover.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` when the file is present afterwards or the download
    /// was skipped, or an error string describing the transport or
    /// filesystem failure.
    pub async fn download(&self, url: &str, path: &Path) -> Result<(), String> {
        if url.is_empty() {
            return Ok(());
        }

        if async_fs::metadata(path).await.is_ok() {
            return Ok(());
        }

        let _guard = self.write_lock.lock().await;

        // A concurrent download may have committed the file while this call
        // waited on the lock.
        if async_fs::metadata(path).await.is_ok() {
            return Ok(());
        }

        let res = self
            .http
            .get(url)
            .timeout(DEFAULT_TIMEOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            return Err(format!("cover request returned {}", res.status()));
        }

        let bytes = res.bytes().await.map_err(|e| e.to_string())?;
        if bytes.is_empty() {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let tmp = path.with_extension("part");
        async_fs::write(&tmp, &bytes)
            .await
            .map_err(|e| e.to_string())?;
        async_fs::rename(&tmp, path)
            .await
            .map_err(|e| e.to_string())
    }

    /// Downloads a track's cover into the cache and returns its path.
    pub async fn download_for_album(&self, url: &str, album_id: &str) -> Result<PathBuf, String> {
        let path = self.path_for(album_id);
        self.download(url, &path).await?;
        Ok(path)
    }
}
