/// A parsed `Content-Type` value: the media type plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType<'a> {
    media_type: &'a str,
    params: Vec<(&'a str, &'a str)>,
}

impl<'a> ContentType<'a> {
    /// Splits `value` on `;` and reads each `name=value` parameter.
    /// Segments without `=` are ignored; quoted values are unquoted.
    pub fn parse(value: &'a str) -> Self {
        let mut segments = value.split(';');
        let media_type = segments.next().unwrap_or_default().trim();
        let params = segments
            .filter_map(|segment| {
                let (name, value) = segment.split_once('=')?;
                let value = value.trim();
                let value = value
                    .strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .unwrap_or(value);
                Some((name.trim(), value))
            })
            .collect();
        Self { media_type, params }
    }

    pub fn media_type(&self) -> &'a str {
        self.media_type
    }

    pub fn is(&self, media_type: &str) -> bool {
        self.media_type.eq_ignore_ascii_case(media_type)
    }

    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }

    pub fn boundary(&self) -> Option<&'a str> {
        self.param("boundary").filter(|boundary| !boundary.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multipart_related() {
        let content_type =
            ContentType::parse("multipart/related; boundary=abc-123; type=application/json");
        assert!(content_type.is("multipart/related"));
        assert_eq!(content_type.boundary(), Some("abc-123"));
        assert_eq!(content_type.param("type"), Some("application/json"));
    }

    #[test]
    fn test_parameter_order_and_quoting() {
        let content_type =
            ContentType::parse("Multipart/Related;type=\"application/json\";Boundary=\"x y\"");
        assert!(content_type.is("multipart/related"));
        assert_eq!(content_type.boundary(), Some("x y"));
    }

    #[test]
    fn test_missing_or_empty_boundary() {
        assert_eq!(ContentType::parse("multipart/related").boundary(), None);
        assert_eq!(ContentType::parse("multipart/related; boundary=").boundary(), None);
        assert_eq!(ContentType::parse("audio/mpeg").media_type(), "audio/mpeg");
    }
}
