//! TwiML messaging responses.

use axum::http::header;
use axum::response::{IntoResponse, Response};

/// A TwiML document answering an inbound SMS with one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingResponse {
    message: String,
}

impl MessagingResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><Response><Message>{}</Message></Response>"#,
            escape_xml(&self.message)
        )
    }
}

impl IntoResponse for MessagingResponse {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "application/xml")], self.to_xml()).into_response()
    }
}

/// Escapes the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"Tom & Jerry's <"pizza">"#),
            "Tom &amp; Jerry&apos;s &lt;&quot;pizza&quot;&gt;"
        );
        assert_eq!(escape_xml("Total: $25.98\n"), "Total: $25.98\n");
    }

    #[test]
    fn test_to_xml_wraps_single_message() {
        let response = MessagingResponse::new("Type 'menu'");
        assert_eq!(
            response.to_xml(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <Response><Message>Type &apos;menu&apos;</Message></Response>"
        );
    }
}
