//! Download the archive before reading it.

use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Fetch `url` into `dest`.
///
/// The body goes to `<dest>.part` first and is renamed onto `dest` once it
/// is complete, so a failed download never leaves a truncated archive
/// behind. Returns the number of bytes written.
pub async fn download(url: &str, dest: &Path) -> Result<u64> {
    let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

    let mut resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(Error::Download(format!(
            "{} returned status {}",
            url,
            resp.status()
        )));
    }

    let part = part_path(dest);
    let result = async {
        let mut file = fs::File::create(&part).await?;
        let mut written = 0u64;
        while let Some(chunk) = resp.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
            debug!(written, "download progress");
        }
        file.flush().await?;
        Ok::<_, Error>(written)
    }
    .await;

    match result {
        Ok(written) => {
            fs::rename(&part, dest).await?;
            info!(url, dest = %dest.display(), bytes = written, "archive downloaded");
            Ok(written)
        }
        Err(e) => {
            let _ = fs::remove_file(&part).await;
            Err(e)
        }
    }
}

fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}
