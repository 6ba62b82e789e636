
/// Anything that may carry a piece of text
pub trait HasText {
    /// The carried text, if any
    fn text(&self) -> Option<&str>;
}

impl HasText for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl HasText for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl HasText for Option<String> {
    fn text(&self) -> Option<&str> {
        self.as_deref()
    }
}

/// Text of `holder` with surrounding whitespace removed
///
/// Returns `None` when the holder is absent or carries no text.
pub fn text_strip<H: HasText + ?Sized>(holder: Option<&H>) -> Option<String> {
    strip_text(holder.and_then(|h| h.text()))
}

/// Trim a possibly absent string
pub fn strip_text(text: Option<&str>) -> Option<String> {
    text.map(|t| t.trim().to_string())
}
