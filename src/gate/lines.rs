// SPDX-License-Identifier: MIT

//! JSON-lines event streaming through a filter

use crate::gate::error::FilterError;
use crate::gate::filter::ConditionFilter;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_stream::wrappers::SplitStream;
use tokio_stream::StreamExt;

/// Counts from one pass over a JSON-lines stream
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineSummary {
    /// Non-blank lines read
    pub total: usize,
    /// Events that passed the filter
    pub passed: usize,
    /// Lines that did not decode as JSON
    pub malformed: usize,
}

/// Read one event per line from `reader` and copy the lines whose event
/// passes `filter` to `writer`.
///
/// Lines that are not valid JSON (including invalid UTF-8) are logged and
/// skipped. Only I/O failures end the run early.
pub async fn filter_lines<R, W>(
    filter: &ConditionFilter,
    reader: R,
    writer: &mut W,
) -> Result<LineSummary, FilterError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = SplitStream::new(reader.split(b'\n'));
    let mut summary = LineSummary::default();

    while let Some(line) = lines.next().await {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        summary.total += 1;

        let event: Value = match serde_json::from_slice(&line) {
            Ok(event) => event,
            Err(e) => {
                summary.malformed += 1;
                log::warn!("Skipping malformed event #{}: {}", summary.total, e);
                continue;
            }
        };

        if filter.pass(&event) {
            summary.passed += 1;
            writer.write_all(&line).await?;
            writer.write_all(b"\n").await?;
        }
    }

    writer.flush().await?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::config::FilterConfig;

    fn filter(yaml: &str) -> ConditionFilter {
        ConditionFilter::from_config(&FilterConfig::parse_yaml(yaml).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_passing_lines_are_copied() {
        let f = filter("if:\n  - 'EQ(level, \"error\")'\n");
        let input: &[u8] = b"{\"level\":\"error\",\"n\":1}\n{\"level\":\"info\"}\n{\"level\":\"error\",\"n\":2}";
        let mut out = Vec::new();

        let summary = filter_lines(&f, input, &mut out).await.unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"level\":\"error\",\"n\":1}\n{\"level\":\"error\",\"n\":2}\n"
        );
        assert_eq!(
            summary,
            LineSummary {
                total: 3,
                passed: 2,
                malformed: 0
            }
        );
    }

    #[tokio::test]
    async fn test_bad_lines_are_skipped() {
        let f = filter("if:\n  - 'Exist(a)'\n");
        let input: &[u8] = b"{\"a\":1}\n{\"a\":\"\xff\"}\nnot json\n{\"a\":2}\n";
        let mut out = Vec::new();

        let summary = filter_lines(&f, input, &mut out).await.unwrap();
        assert_eq!(out, b"{\"a\":1}\n{\"a\":2}\n".to_vec());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.malformed, 2);
    }

    #[tokio::test]
    async fn test_blank_lines_and_crlf() {
        let f = ConditionFilter::pass_all();
        let input: &[u8] = b"\r\n{\"a\":1}\r\n   \n\n{\"b\":2}\r\n";
        let mut out = Vec::new();

        let summary = filter_lines(&f, input, &mut out).await.unwrap();
        assert_eq!(out, b"{\"a\":1}\n{\"b\":2}\n".to_vec());
        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 2);
    }
}
