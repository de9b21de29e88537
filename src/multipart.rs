//! Decoder for the `multipart/related` bodies returned by the speech service.
//!
//! The service replies with a single body holding a JSON control part and any
//! number of binary audio parts, separated by a boundary announced in the
//! `Content-Type` header. [`decode_response`] turns such a body into an ordered
//! list of [`Part`]s; replies of any other content type pass through as one
//! part carrying the response's own headers.

use avs_relay_types::{Headers, Part};
use bytes::Bytes;

use crate::error::DecodeError;

mod content_type;

pub use content_type::ContentType;

pub const MULTIPART_RELATED: &str = "multipart/related";

const DASHES: &[u8] = b"--";

/// Decodes a response from its headers and raw body.
pub fn decode_response(
    headers: Headers,
    body: impl Into<Bytes>,
) -> Result<Vec<Part>, DecodeError> {
    let body = body.into();
    let boundary = headers
        .content_type()
        .map(ContentType::parse)
        .filter(|content_type| content_type.is(MULTIPART_RELATED))
        .map(|content_type| content_type.boundary().map(str::to_owned));
    let boundary = match boundary {
        Some(boundary) => boundary.ok_or(DecodeError::MissingBoundary)?,
        None => return Ok(vec![Part::new(headers, body)]),
    };
    let parts = split(boundary.as_bytes(), body)?;
    tracing::trace!(parts = parts.len(), "decoded multipart body");
    Ok(parts)
}

/// Decodes a body given only its `Content-Type` value.
pub fn decode(content_type: &str, body: impl Into<Bytes>) -> Result<Vec<Part>, DecodeError> {
    decode_response(Headers::new().with("content-type", content_type), body)
}

enum State {
    /// Before the first boundary. Only whitespace may appear here.
    Preamble,
    HeaderName {
        headers: Headers,
        start: usize,
    },
    HeaderValue {
        headers: Headers,
        name: String,
        start: usize,
    },
    Body {
        headers: Headers,
        start: usize,
    },
    /// After the closing boundary. Only whitespace may appear here.
    Epilogue,
}

/// Splits `body` on the delimiter `--<boundary>`.
///
/// Part bodies are zero-copy slices of `body`. A delimiter only closes a part
/// when it starts a line; the line break in front of it is not part of the
/// body.
pub fn split(boundary: &[u8], body: Bytes) -> Result<Vec<Part>, DecodeError> {
    let delimiter = [DASHES, boundary].concat();
    let buf = body.as_ref();
    let mut parts = Vec::new();
    let mut state = State::Preamble;
    let mut i = 0;

    while i < buf.len() {
        state = match state {
            State::Preamble => {
                if buf[i..].starts_with(&delimiter) {
                    i += delimiter.len();
                    after_delimiter(buf, &mut i)?
                } else if buf[i].is_ascii_whitespace() {
                    i += 1;
                    State::Preamble
                } else {
                    return Err(DecodeError::Preamble { offset: i });
                }
            }
            State::HeaderName { headers, start } => {
                if buf[i] == b':' {
                    let name = String::from_utf8_lossy(buf[start..i].trim_ascii()).into_owned();
                    i += 1;
                    while buf.get(i) == Some(&b' ') {
                        i += 1;
                    }
                    State::HeaderValue {
                        headers,
                        name,
                        start: i,
                    }
                } else if let Some(len) = line_break(buf, i) {
                    // Only an empty line may end the header block.
                    if i != start {
                        return Err(DecodeError::MalformedHeader { offset: start });
                    }
                    i += len;
                    State::Body { headers, start: i }
                } else {
                    i += 1;
                    State::HeaderName { headers, start }
                }
            }
            State::HeaderValue {
                mut headers,
                name,
                start,
            } => {
                if let Some(len) = line_break(buf, i) {
                    headers.insert(&name, String::from_utf8_lossy(&buf[start..i]));
                    i += len;
                    State::HeaderName { headers, start: i }
                } else {
                    i += 1;
                    State::HeaderValue {
                        headers,
                        name,
                        start,
                    }
                }
            }
            State::Body { headers, start } => {
                if i > 0 && buf[i - 1] == b'\n' && buf[i..].starts_with(&delimiter) {
                    let mut end = i - 1;
                    if end > 0 && buf[end - 1] == b'\r' {
                        end -= 1;
                    }
                    // An empty body shares its line break with the header block.
                    let end = end.max(start);
                    parts.push(Part::new(headers, body.slice(start..end)));
                    i += delimiter.len();
                    after_delimiter(buf, &mut i)?
                } else {
                    i += 1;
                    State::Body { headers, start }
                }
            }
            State::Epilogue => {
                if !buf[i].is_ascii_whitespace() {
                    return Err(DecodeError::ContentBeyondEnd { offset: i });
                }
                i += 1;
                State::Epilogue
            }
        };
    }

    match state {
        State::Epilogue => Ok(parts),
        _ => Err(DecodeError::UnexpectedEof),
    }
}

/// Decides what follows a delimiter: the end marker or a fresh part.
fn after_delimiter(buf: &[u8], i: &mut usize) -> Result<State, DecodeError> {
    let rest = &buf[*i..];
    if rest.starts_with(DASHES) {
        *i += DASHES.len();
        return Ok(State::Epilogue);
    }
    if let Some(len) = line_break(buf, *i) {
        *i += len;
        return Ok(State::HeaderName {
            headers: Headers::new(),
            start: *i,
        });
    }
    if rest.len() < 2 && (DASHES.starts_with(rest) || b"\r\n".starts_with(rest)) {
        return Err(DecodeError::UnexpectedEof);
    }
    Err(DecodeError::MissingBoundaryTerminator { offset: *i })
}

/// Length of the line break (LF or CRLF) starting at `i`, if any.
fn line_break(buf: &[u8], i: usize) -> Option<usize> {
    match buf.get(i) {
        Some(b'\n') => Some(1),
        Some(b'\r') if buf.get(i + 1) == Some(&b'\n') => Some(2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT_TYPE: &str = "multipart/related; boundary=B; type=application/json";

    fn json_part() -> Part {
        Part::new(
            Headers::new()
                .with("Content-Type", "application/json")
                .with("Content-ID", "<request>"),
            r#"{"messageBody":{}}"#,
        )
    }

    fn audio_part(body: &'static [u8]) -> Part {
        Part::new(Headers::new().with("Content-Type", "audio/mpeg"), body)
    }

    fn encode(parts: &[Part], eol: &str) -> Vec<u8> {
        let mut out = Vec::new();
        for part in parts {
            out.extend_from_slice(format!("--B{eol}").as_bytes());
            for (name, value) in part.headers().iter() {
                out.extend_from_slice(format!("{name}: {value}{eol}").as_bytes());
            }
            out.extend_from_slice(eol.as_bytes());
            out.extend_from_slice(part.body());
            out.extend_from_slice(eol.as_bytes());
        }
        out.extend_from_slice(b"--B--");
        out
    }

    #[test]
    fn test_decode_reproduces_parts_in_order() {
        let parts = vec![
            json_part(),
            audio_part(b"ID3\x00\xff\xfb\r\n--not-a-boundary\n-B"),
            audio_part(b"second"),
        ];
        let decoded = decode(CONTENT_TYPE, encode(&parts, "\r\n")).unwrap();
        assert_eq!(decoded, parts);
    }

    #[test]
    fn test_crlf_and_lf_decode_identically() {
        let parts = vec![json_part(), audio_part(b"\x01\x02\x03")];
        let crlf = decode(CONTENT_TYPE, encode(&parts, "\r\n")).unwrap();
        let lf = decode(CONTENT_TYPE, encode(&parts, "\n")).unwrap();
        assert_eq!(crlf, lf);
        assert_eq!(lf, parts);
    }

    #[test]
    fn test_non_multipart_passes_through() {
        let headers = Headers::new()
            .with("Content-Type", "application/json")
            .with("X-Amzn-RequestId", "42");
        let decoded = decode_response(headers.clone(), "--B--garbage").unwrap();
        assert_eq!(decoded, vec![Part::new(headers, "--B--garbage")]);

        let decoded = decode_response(Headers::new(), Bytes::new()).unwrap();
        assert_eq!(decoded.len(), 1);
        assert!(decoded[0].body().is_empty());
    }

    #[test]
    fn test_header_names_are_lower_cased_and_values_unpadded() {
        let body = b"--B\r\nCONTENT-TYPE:   audio/mpeg\r\nContent-Id:<a>\r\n\r\nxyz\r\n--B--";
        let decoded = decode(CONTENT_TYPE, &body[..]).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].headers().get("content-type"), Some("audio/mpeg"));
        assert_eq!(decoded[0].headers().get("content-id"), Some("<a>"));
        assert_eq!(decoded[0].body().as_ref(), b"xyz");
    }

    #[test]
    fn test_empty_body_and_empty_headers() {
        let body = b"--B\r\nContent-Type: audio/mpeg\r\n\r\n--B\r\n\r\nhello\r\n--B--";
        let decoded = decode(CONTENT_TYPE, &body[..]).unwrap();
        assert_eq!(decoded.len(), 2);
        assert!(decoded[0].body().is_empty());
        assert!(decoded[1].headers().is_empty());
        assert_eq!(decoded[1].body().as_ref(), b"hello");
    }

    #[test]
    fn test_single_line_break_is_stripped_before_boundary() {
        let body = b"--B\n\nline\r\r\n--B\n\nnext\n--B--";
        let decoded = decode(CONTENT_TYPE, &body[..]).unwrap();
        assert_eq!(decoded[0].body().as_ref(), b"line\r");
        assert_eq!(decoded[1].body().as_ref(), b"next");
    }

    #[test]
    fn test_delimiter_inside_a_line_is_content() {
        let body = b"--B\r\n\r\nx--B and --b\r\n--b\r\n--B--";
        let decoded = decode(CONTENT_TYPE, &body[..]).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].body().as_ref(), b"x--B and --b\r\n--b");
    }

    #[test]
    fn test_trailing_whitespace_is_allowed() {
        let body = b"\r\n--B\r\n\r\na\r\n--B--\r\n \t\r\n";
        let decoded = decode(CONTENT_TYPE, &body[..]).unwrap();
        assert_eq!(decoded.len(), 1);
    }

    #[test]
    fn test_content_beyond_end() {
        let body = b"--B\r\n\r\na\r\n--B--\r\nx";
        assert_eq!(
            decode(CONTENT_TYPE, &body[..]),
            Err(DecodeError::ContentBeyondEnd { offset: 17 })
        );
        let body = b"--B\r\n\r\na\r\n--B--extra";
        assert_eq!(
            decode(CONTENT_TYPE, &body[..]),
            Err(DecodeError::ContentBeyondEnd { offset: 15 })
        );
    }

    #[test]
    fn test_truncated_input() {
        let full = encode(&[json_part(), audio_part(b"abc")], "\r\n");
        let terminal = full.len() - b"--B--".len();
        for cut in [terminal, terminal - 3, 10, 3, 4] {
            assert_eq!(
                decode(CONTENT_TYPE, full[..cut].to_vec()),
                Err(DecodeError::UnexpectedEof),
                "cut at {cut}"
            );
        }
        assert_eq!(
            decode(CONTENT_TYPE, Bytes::new()),
            Err(DecodeError::UnexpectedEof)
        );
    }

    #[test]
    fn test_missing_boundary_terminator() {
        let body = b"--Bx\r\n\r\n--B--";
        assert_eq!(
            decode(CONTENT_TYPE, &body[..]),
            Err(DecodeError::MissingBoundaryTerminator { offset: 3 })
        );
    }

    #[test]
    fn test_malformed_header() {
        let body = b"--B\r\nContent-Type: audio/mpeg\r\nNoColon\r\n\r\nbody\r\n--B--";
        assert_eq!(
            decode(CONTENT_TYPE, &body[..]),
            Err(DecodeError::MalformedHeader { offset: 31 })
        );
    }

    #[test]
    fn test_preamble_is_rejected() {
        let body = b"preamble\r\n--B\r\n\r\na\r\n--B--";
        assert_eq!(
            decode(CONTENT_TYPE, &body[..]),
            Err(DecodeError::Preamble { offset: 0 })
        );
    }

    #[test]
    fn test_missing_boundary_parameter() {
        assert_eq!(
            decode("multipart/related; type=application/json", "--B--"),
            Err(DecodeError::MissingBoundary)
        );
    }

    #[test]
    fn test_terminal_boundary_only() {
        assert_eq!(decode(CONTENT_TYPE, "--B--"), Ok(vec![]));
    }
}
