//! Newline-delimited JSON body reader.
//!
//! The exchange endpoint streams one JSON event per line. This client does
//! not render tokens incrementally, so the stream is drained line by line
//! into a single body that the parser then inspects.

use futures_util::StreamExt;
use tokio::io::{AsyncBufReadExt, AsyncRead};
use tokio_util::io::StreamReader;
use tracing::trace;

use crate::AgentError;

/// A fully drained NDJSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamedBody {
    /// All lines joined with `\n`.
    pub body: String,
    /// Number of non-empty lines seen.
    pub events: usize,
}

/// Drain `reader` line by line. Invalid UTF-8 is replaced, not rejected:
/// only the tail line is ever interpreted.
pub async fn read_lines<R: AsyncRead + Unpin>(reader: R) -> std::io::Result<StreamedBody> {
    let mut reader = tokio::io::BufReader::new(reader);
    let mut buf = Vec::new();
    let mut out = StreamedBody::default();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);

        if !line.trim().is_empty() {
            out.events += 1;
            trace!(event = out.events, len = line.len(), "stream event");
        }
        if !out.body.is_empty() {
            out.body.push('\n');
        }
        out.body.push_str(&line);
    }

    Ok(out)
}

/// Drain a reqwest response body as NDJSON.
pub async fn read_response(response: reqwest::Response) -> Result<StreamedBody, AgentError> {
    let byte_stream = response
        .bytes_stream()
        .map(|result| result.map_err(std::io::Error::other));
    read_lines(StreamReader::new(byte_stream))
        .await
        .map_err(|e| AgentError::Network(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_all_lines_in_order() {
        let input: &[u8] = b"{\"a\":1}\n{\"a\":2}\n{\"a\":3}\n";
        let out = read_lines(input).await.unwrap();
        assert_eq!(out.body, "{\"a\":1}\n{\"a\":2}\n{\"a\":3}");
        assert_eq!(out.events, 3);
    }

    #[tokio::test]
    async fn blank_lines_are_not_events() {
        let input: &[u8] = b"data: {}\n\ndata: {}\n\n";
        let out = read_lines(input).await.unwrap();
        assert_eq!(out.events, 2);
        assert!(out.body.trim_end().ends_with("data: {}"));
    }

    #[tokio::test]
    async fn missing_final_newline_keeps_last_line() {
        let input: &[u8] = b"first\nsecond";
        let out = read_lines(input).await.unwrap();
        assert_eq!(out.body, "first\nsecond");
        assert_eq!(out.events, 2);
    }

    #[tokio::test]
    async fn empty_input() {
        let input: &[u8] = b"";
        let out = read_lines(input).await.unwrap();
        assert_eq!(out, StreamedBody::default());
    }

    #[tokio::test]
    async fn stream_reader_over_chunks_splits_lines_across_chunks() {
        let chunks: Vec<std::io::Result<bytes::Bytes>> = vec![
            Ok(bytes::Bytes::from_static(b"{\"content\":")),
            Ok(bytes::Bytes::from_static(b"1}\n{\"cont")),
            Ok(bytes::Bytes::from_static(b"ent\":2}\n")),
        ];
        let reader = StreamReader::new(futures_util::stream::iter(chunks));
        let out = read_lines(reader).await.unwrap();
        assert_eq!(out.body, "{\"content\":1}\n{\"content\":2}");
    }

    #[tokio::test]
    async fn invalid_utf8_in_an_earlier_line_keeps_the_tail() {
        let input: &[u8] = b"{\"content\":{\"parts\":[{\"text\":\"par\xFF\"}]}}\n{\"content\":{\"parts\":[{\"text\":\"final\"}]}}\n";
        let out = read_lines(input).await.unwrap();
        assert_eq!(out.events, 2);
        assert!(out.body.contains('\u{FFFD}'));
        assert_eq!(
            crate::parser::parse(&out.body),
            crate::parser::ParseOutcome::Reply(crate::parser::ParsedReply::PlainText {
                text: "final".into()
            })
        );
    }

    #[tokio::test]
    async fn crlf_line_endings_are_trimmed() {
        let input: &[u8] = b"first\r\nsecond\r\n";
        let out = read_lines(input).await.unwrap();
        assert_eq!(out.body, "first\nsecond");
    }

    #[tokio::test]
    async fn stream_error_surfaces() {
        let chunks: Vec<std::io::Result<bytes::Bytes>> = vec![
            Ok(bytes::Bytes::from_static(b"partial\n")),
            Err(std::io::Error::other("connection reset")),
        ];
        let reader = StreamReader::new(futures_util::stream::iter(chunks));
        let err = read_lines(reader).await.unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }
}
