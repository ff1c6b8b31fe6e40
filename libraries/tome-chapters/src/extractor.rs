//! Chapter extractor - streaming fetch and container probe

use crate::{
    error::{ChapterError, Result},
    fetch::streaming_body,
    normalize::{normalize, RawChapter},
};
use reqwest::header;
use std::io::Read;
use std::time::{Duration, Instant};
use symphonia::core::formats::{Cue, FormatOptions};
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions, ReadOnlySource};
use symphonia::core::meta::{Limit, MetadataOptions, StandardTagKey};
use symphonia::core::probe::Hint;
use tome_core::Chapter;
use tracing::{debug, warn};

/// On-demand chapter extraction from a remote audio container.
///
/// Each [`extract`](ChapterExtractor::extract) call performs a fresh
/// non-cached fetch and incremental probe; nothing is retained between
/// calls. The whole operation is bounded by the configured wall-clock
/// budget so a caller can never hang on a multi-hour file.
pub struct ChapterExtractor {
    client: reqwest::Client,
    timeout: Duration,
}

impl ChapterExtractor {
    /// Create an extractor with the given wall-clock budget
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// Fetch the resource at `url` and return its normalized chapter
    /// list (always at least one entry).
    pub async fn extract(&self, url: &str) -> Result<Vec<Chapter>> {
        let started = Instant::now();

        let response = tokio::time::timeout(self.timeout, self.fetch(url))
            .await
            .map_err(|_| ChapterError::Timeout(self.timeout.as_secs()))??;

        let (body, forward) = streaming_body(response);
        let parse = tokio::task::spawn_blocking(move || probe_reader(body));

        let budget = self.timeout.saturating_sub(started.elapsed());
        let raw = match tokio::time::timeout(budget, parse).await {
            Ok(Ok(result)) => result?,
            Ok(Err(join_error)) => {
                forward.abort();
                return Err(ChapterError::Parse(join_error.to_string()));
            }
            Err(_) => {
                // dropping the forwarder feeds EOF to the parse thread
                forward.abort();
                warn!(url, budget_secs = self.timeout.as_secs(), "chapter extraction timed out");
                return Err(ChapterError::Timeout(self.timeout.as_secs()));
            }
        };

        // the parse side has the list; the download can stop here
        forward.abort();

        let chapters = normalize(raw);
        debug!(url, count = chapters.len(), "extracted chapters");
        Ok(chapters)
    }

    async fn fetch(&self, url: &str) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "audio/mp4,audio/*,*/*")
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChapterError::UpstreamStatus(status.as_u16()));
        }
        if response.content_length() == Some(0) {
            return Err(ChapterError::EmptyBody);
        }
        Ok(response)
    }
}

impl Default for ChapterExtractor {
    /// Budget sized for streaming multi-hour M4B files
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

/// Probe the container on the blocking side and harvest raw cue markers.
///
/// Visual metadata (embedded cover art) is capped at zero bytes so a
/// large cover cannot blow up memory during the streaming parse.
fn probe_reader<R>(reader: R) -> Result<Vec<RawChapter>>
where
    R: Read + Send + Sync + 'static,
{
    let source = ReadOnlySource::new(reader);
    let stream = MediaSourceStream::new(Box::new(source), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    hint.with_extension("m4b");
    hint.mime_type("audio/mp4");

    let format_opts = FormatOptions::default();
    let metadata_opts = MetadataOptions {
        limit_visual_bytes: Limit::Maximum(0),
        ..MetadataOptions::default()
    };

    let probed = symphonia::default::get_probe()
        .format(&hint, stream, &format_opts, &metadata_opts)
        .map_err(|e| ChapterError::Parse(e.to_string()))?;
    let format = probed.format;

    // Cue timestamps are expressed in the track time base; fold it into
    // a ticks-per-second scale for normalization.
    let time_scale = format
        .default_track()
        .and_then(|track| track.codec_params.time_base)
        .map_or(0.0, |tb| {
            if tb.numer > 0 {
                f64::from(tb.denom) / f64::from(tb.numer)
            } else {
                0.0
            }
        });

    Ok(format
        .cues()
        .iter()
        .map(|cue| RawChapter {
            title: cue_title(cue),
            start: cue.start_ts as f64,
            time_scale,
        })
        .collect())
}

/// Pull a human-readable title off a cue, preferring the standard
/// title tag over whatever else the container attached.
fn cue_title(cue: &Cue) -> Option<String> {
    cue.tags
        .iter()
        .find(|tag| matches!(tag.std_key, Some(StandardTagKey::TrackTitle)))
        .or_else(|| cue.tags.first())
        .map(|tag| tag.value.to_string())
}
