//! Streaming readers for individual multipart parts.
//!
//! Parts are consumed chunk by chunk through [`PartStream`], so the readers
//! work the same on an axum [`Field`] and on an in-memory chunk source.

use crate::error::multipart_failure;
use async_trait::async_trait;
use axum::extract::multipart::Field;
use bytes::Bytes;
use logdrop_core::constants::TEXT_FIELD_MAX_BYTES;
use logdrop_core::AppError;

/// A single form part delivered as a sequence of byte chunks.
#[async_trait]
pub trait PartStream: Send {
    /// Next chunk of the part, `None` once the part is exhausted.
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, AppError>;
}

#[async_trait]
impl<'a> PartStream for Field<'a> {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, AppError> {
        self.chunk().await.map_err(|e| multipart_failure(&e))
    }
}

/// Read a metadata value into `value`.
///
/// The whole part is read, bounded by [`TEXT_FIELD_MAX_BYTES`]; a longer value
/// is rejected instead of being cut short. An empty part leaves `value`
/// untouched.
pub async fn read_text_field<P>(part: &mut P, name: &str, value: &mut String) -> Result<(), AppError>
where
    P: PartStream + ?Sized,
{
    let mut buffer = Vec::new();
    while let Some(chunk) = part.next_chunk().await? {
        if buffer.len() + chunk.len() > TEXT_FIELD_MAX_BYTES {
            return Err(AppError::ParseFailure(format!(
                "{} value exceeds {} bytes",
                name, TEXT_FIELD_MAX_BYTES
            )));
        }
        buffer.extend_from_slice(&chunk);
    }

    if buffer.is_empty() {
        return Ok(());
    }

    *value = String::from_utf8(buffer)
        .map_err(|_| AppError::ParseFailure(format!("{} value is not valid UTF-8", name)))?;
    Ok(())
}

/// Append every chunk of the part to `data` until the part ends.
pub async fn read_file_field<P>(part: &mut P, data: &mut Vec<u8>) -> Result<(), AppError>
where
    P: PartStream + ?Sized,
{
    while let Some(chunk) = part.next_chunk().await? {
        data.extend_from_slice(&chunk);
    }
    Ok(())
}

/// Consume and discard a part, returning how many bytes were skipped.
pub async fn drain_field<P>(part: &mut P) -> Result<usize, AppError>
where
    P: PartStream + ?Sized,
{
    let mut skipped = 0;
    while let Some(chunk) = part.next_chunk().await? {
        skipped += chunk.len();
    }
    Ok(skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// In-memory part: yields the queued chunks, then end-of-stream.
    struct ChunkedPart {
        chunks: VecDeque<Result<Bytes, AppError>>,
        reads: usize,
    }

    impl ChunkedPart {
        fn new(chunks: &[&[u8]]) -> Self {
            Self {
                chunks: chunks
                    .iter()
                    .map(|c| Ok(Bytes::copy_from_slice(c)))
                    .collect(),
                reads: 0,
            }
        }

        fn failing_after(chunks: &[&[u8]], message: &str) -> Self {
            let mut part = Self::new(chunks);
            part.chunks
                .push_back(Err(AppError::ParseFailure(message.to_string())));
            part
        }
    }

    #[async_trait]
    impl PartStream for ChunkedPart {
        async fn next_chunk(&mut self) -> Result<Option<Bytes>, AppError> {
            self.reads += 1;
            match self.chunks.pop_front() {
                Some(Ok(chunk)) => Ok(Some(chunk)),
                Some(Err(e)) => Err(e),
                None => Ok(None),
            }
        }
    }

    #[tokio::test]
    async fn test_text_field_single_chunk() {
        let mut part = ChunkedPart::new(&[b"payments-service"]);
        let mut value = String::new();

        read_text_field(&mut part, "project", &mut value).await.unwrap();
        assert_eq!(value, "payments-service");
    }

    #[tokio::test]
    async fn test_text_field_reads_every_chunk() {
        let mut part = ChunkedPart::new(&[b"feature/", b"long-", b"branch"]);
        let mut value = String::new();

        read_text_field(&mut part, "branch", &mut value).await.unwrap();
        assert_eq!(value, "feature/long-branch");
    }

    #[tokio::test]
    async fn test_empty_text_field_keeps_previous_value() {
        let mut part = ChunkedPart::new(&[]);
        let mut value = "abc123".to_string();

        read_text_field(&mut part, "commit", &mut value).await.unwrap();
        assert_eq!(value, "abc123");
    }

    #[tokio::test]
    async fn test_text_field_at_limit_accepted() {
        let big = vec![b'a'; TEXT_FIELD_MAX_BYTES];
        let mut part = ChunkedPart::new(&[big.as_slice()]);
        let mut value = String::new();

        read_text_field(&mut part, "commit", &mut value).await.unwrap();
        assert_eq!(value.len(), TEXT_FIELD_MAX_BYTES);
    }

    #[tokio::test]
    async fn test_text_field_over_limit_rejected() {
        let half = vec![b'a'; TEXT_FIELD_MAX_BYTES / 2 + 1];
        let mut part = ChunkedPart::new(&[half.as_slice(), half.as_slice()]);
        let mut value = String::new();

        let err = read_text_field(&mut part, "project", &mut value)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ParseFailure(_)));
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_text_field_invalid_utf8_rejected() {
        let mut part = ChunkedPart::new(&[&[0xff, 0xfe]]);
        let mut value = String::new();

        let err = read_text_field(&mut part, "branch", &mut value)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "branch value is not valid UTF-8");
    }

    #[tokio::test]
    async fn test_text_field_propagates_read_error() {
        let mut part = ChunkedPart::failing_after(&[b"abc"], "connection reset");
        let mut value = String::new();

        let err = read_text_field(&mut part, "commit", &mut value)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "connection reset");
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_file_field_accumulates_chunks() {
        let mut part = ChunkedPart::new(&[b"line 1\n", b"line 2\n", b"", b"line 3\n"]);
        let mut data = Vec::new();

        read_file_field(&mut part, &mut data).await.unwrap();
        assert_eq!(data, b"line 1\nline 2\nline 3\n");
        assert_eq!(part.reads, 5);
    }

    #[tokio::test]
    async fn test_file_field_appends_to_existing_data() {
        let mut data = b"first part\n".to_vec();
        let mut part = ChunkedPart::new(&[b"second part\n"]);

        read_file_field(&mut part, &mut data).await.unwrap();
        assert_eq!(data, b"first part\nsecond part\n");
    }

    #[tokio::test]
    async fn test_file_field_propagates_mid_stream_error() {
        let mut part = ChunkedPart::failing_after(&[b"partial"], "stream ended unexpectedly");
        let mut data = Vec::new();

        let err = read_file_field(&mut part, &mut data).await.unwrap_err();
        assert!(matches!(err, AppError::ParseFailure(_)));
    }

    #[tokio::test]
    async fn test_drain_consumes_whole_part() {
        let mut part = ChunkedPart::new(&[b"12345", b"678"]);

        let skipped = drain_field(&mut part).await.unwrap();
        assert_eq!(skipped, 8);
        assert!(part.next_chunk().await.unwrap().is_none());
    }
}
