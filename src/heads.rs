//! Avatar fetching for the player list.
//!
//! The list renderer only depends on the [`HeadSource`] seam: an async
//! keyed lookup that yields `None` on any failure instead of erroring.
//! [`CraftheadSource`] is the production implementation over
//! crafthead.net; [`fetch_all`] fans fetches out concurrently, one per
//! distinct name, and gathers whatever settled successfully.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::time::Duration;

use image::RgbaImage;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Pixel size requested from the avatar service.
pub const HEAD_SIZE: u32 = 16;

/// Keyed avatar lookup. Implementations must swallow their own failures:
/// an unknown name, a network error or a bad payload all come back as
/// `None`.
pub trait HeadSource: Clone + Send + Sync + 'static {
    fn fetch(&self, name: &str) -> impl Future<Output = Option<RgbaImage>> + Send;
}

/// Fetches head renders from crafthead.net.
#[derive(Debug, Clone)]
pub struct CraftheadSource {
    client: reqwest::Client,
}

impl CraftheadSource {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(10))
            .build()
            .expect("http client must build");
        Self { client }
    }
}

impl Default for CraftheadSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadSource for CraftheadSource {
    fn fetch(&self, name: &str) -> impl Future<Output = Option<RgbaImage>> + Send {
        let client = self.client.clone();
        let name = name.to_owned();
        async move {
            let url = format!("https://crafthead.net/helm/{name}/{HEAD_SIZE}.png");
            let response = match client.get(&url).send().await {
                Ok(response) => response,
                Err(err) => {
                    warn!(name = %name, "head fetch failed: {err}");
                    return None;
                }
            };
            if !response.status().is_success() {
                debug!(name = %name, status = %response.status(), "head fetch unsuccessful");
                return None;
            }
            let bytes = match response.bytes().await {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(name = %name, "head body read failed: {err}");
                    return None;
                }
            };
            let head = decode_head(&bytes);
            if head.is_none() {
                warn!(name = %name, "head payload did not decode as an image");
            }
            head
        }
    }
}

fn decode_head(bytes: &[u8]) -> Option<RgbaImage> {
    image::load_from_memory(bytes).ok().map(|img| img.to_rgba8())
}

/// Resolves every distinct name concurrently and returns the successful
/// lookups. Names whose fetch failed are simply absent.
pub async fn fetch_all<S: HeadSource>(
    source: &S,
    names: impl IntoIterator<Item = String>,
) -> HashMap<String, RgbaImage> {
    let mut seen = HashSet::new();
    let mut tasks = JoinSet::new();
    for name in names {
        if seen.insert(name.clone()) {
            let source = source.clone();
            tasks.spawn(async move {
                let head = source.fetch(&name).await;
                (name, head)
            });
        }
    }

    let mut heads = HashMap::new();
    while let Some(joined) = tasks.join_next().await {
        if let Ok((name, Some(head))) = joined {
            heads.insert(name, head);
        }
    }
    heads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;
    use image::Rgba;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone)]
    struct StubSource {
        known: Vec<String>,
        calls: Arc<AtomicUsize>,
    }

    impl StubSource {
        fn knowing(names: &[&str]) -> Self {
            Self {
                known: names.iter().map(|s| s.to_string()).collect(),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl HeadSource for StubSource {
        fn fetch(&self, name: &str) -> impl Future<Output = Option<RgbaImage>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let hit = self.known.iter().any(|k| k == name);
            async move { hit.then(|| RgbaImage::from_pixel(16, 16, Rgba([255, 0, 0, 255]))) }
        }
    }

    #[tokio::test]
    async fn failed_lookups_are_absent_not_fatal() {
        let source = StubSource::knowing(&["Alice", "bob"]);
        let heads = fetch_all(
            &source,
            ["Alice", "bob", "Mallory"].map(String::from),
        )
        .await;
        assert_eq!(heads.len(), 2);
        assert!(heads.contains_key("Alice"));
        assert!(!heads.contains_key("Mallory"));
    }

    #[tokio::test]
    async fn duplicate_names_fetch_once() {
        let source = StubSource::knowing(&["Alice"]);
        let heads = fetch_all(
            &source,
            ["Alice", "Alice", "Alice"].map(String::from),
        )
        .await;
        assert_eq!(heads.len(), 1);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn decode_head_rejects_garbage() {
        assert!(decode_head(b"definitely not a png").is_none());
    }

    #[test]
    fn decode_head_accepts_png_bytes() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([1, 2, 3, 255]));
        let bytes = encode::png_bytes(&img).expect("encode fixture");
        let decoded = decode_head(&bytes).expect("decode fixture");
        assert_eq!(decoded.dimensions(), (16, 16));
    }
}
