//! Reportable values and their conversion to text.

use std::borrow::Cow;
use std::fmt;

/// A value that can be reported.
///
/// Text is delivered as-is, bytes are decoded as UTF-8, and lazy messages
/// are only evaluated once the report has passed the verbosity check.
pub enum Message<'a> {
    /// Ready-made text.
    Text(Cow<'a, str>),
    /// Raw bytes, decoded as UTF-8 at delivery time.
    Bytes(Cow<'a, [u8]>),
    /// A deferred message, built only if it will be delivered.
    Lazy(Box<dyn FnOnce() -> Message<'a> + 'a>),
}

impl<'a> Message<'a> {
    /// Wraps a producer that is called only if the message is delivered.
    pub fn lazy<F, M>(produce: F) -> Self
    where
        F: FnOnce() -> M + 'a,
        M: Into<Message<'a>>,
    {
        Message::Lazy(Box::new(move || produce().into()))
    }

    /// Converts the message to text, evaluating and decoding as needed.
    ///
    /// Byte runs that are not valid UTF-8 come back escaped (`\xff`) rather
    /// than as an error; the valid text around them is kept as-is.
    pub fn into_text(self) -> String {
        match self {
            Message::Text(text) => text.into_owned(),
            Message::Bytes(bytes) => decode_bytes(&bytes),
            Message::Lazy(produce) => produce().into_text(),
        }
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Message::Bytes(bytes) => f.debug_tuple("Bytes").field(bytes).finish(),
            Message::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Message::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Message<'_> {
    fn from(text: String) -> Self {
        Message::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(text: &'a String) -> Self {
        Message::Text(Cow::Borrowed(text.as_str()))
    }
}

impl<'a> From<Cow<'a, str>> for Message<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Message::Text(text)
    }
}

impl<'a> From<&'a [u8]> for Message<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Message::Bytes(Cow::Borrowed(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Message<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Message::Bytes(Cow::Borrowed(bytes.as_slice()))
    }
}

impl From<Vec<u8>> for Message<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Message::Bytes(Cow::Owned(bytes))
    }
}

/// Decodes UTF-8, escaping only the byte runs that are not valid.
fn decode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
        out.extend(chunk.invalid().escape_ascii().map(char::from));
    }
    out
}

/// Converts any reportable value to text.
pub fn to_text<'a>(message: impl Into<Message<'a>>) -> String {
    message.into().into_text()
}

/// Replaces every non-ASCII character with its `\u{..}` escape.
///
/// Used by the stdout sink when the terminal rejects the original text.
pub fn escape_non_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            out.extend(c.escape_unicode());
        }
    }
    out
}
