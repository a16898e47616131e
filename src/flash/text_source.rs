// SPDX-License-Identifier: MPL-2.0
//! Message text, either given directly or produced on demand.

use std::borrow::Cow;
use std::fmt;

/// Where the text of a flash message comes from.
///
/// A computed source is evaluated exactly once, when the message is set, so
/// the closure may borrow from the caller.
pub enum TextSource<'a> {
    Literal(String),
    Computed(Box<dyn FnOnce() -> String + 'a>),
}

impl<'a> TextSource<'a> {
    /// Wraps a closure producing the message text.
    pub fn computed<F>(f: F) -> Self
    where
        F: FnOnce() -> String + 'a,
    {
        TextSource::Computed(Box::new(f))
    }

    /// Resolves the source into the text to display.
    #[must_use]
    pub fn resolve(self) -> String {
        match self {
            TextSource::Literal(text) => text,
            TextSource::Computed(f) => f(),
        }
    }
}

impl fmt::Debug for TextSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            TextSource::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<String> for TextSource<'_> {
    fn from(text: String) -> Self {
        TextSource::Literal(text)
    }
}

impl From<&str> for TextSource<'_> {
    fn from(text: &str) -> Self {
        TextSource::Literal(text.to_owned())
    }
}

impl From<&String> for TextSource<'_> {
    fn from(text: &String) -> Self {
        TextSource::Literal(text.clone())
    }
}

impl From<Cow<'_, str>> for TextSource<'_> {
    fn from(text: Cow<'_, str>) -> Self {
        TextSource::Literal(text.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn literal_resolves_to_itself() {
        assert_eq!(TextSource::from("hello").resolve(), "hello");
    }

    #[test]
    fn computed_resolves_by_calling_closure() {
        let source = TextSource::computed(|| "computed".to_string());
        assert_eq!(source.resolve(), "computed");
    }

    #[test]
    fn computed_closure_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let source = TextSource::computed(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "once".to_string()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let _ = source.resolve();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn computed_closure_may_borrow_locals() {
        let file_name = String::from("report.pdf");
        let source = TextSource::computed(|| format!("{file_name} uploaded"));
        assert_eq!(source.resolve(), "report.pdf uploaded");
        assert_eq!(file_name, "report.pdf");
    }

    #[test]
    fn debug_hides_closure() {
        let source = TextSource::computed(String::new);
        assert_eq!(format!("{source:?}"), "Computed(..)");
        assert_eq!(format!("{:?}", TextSource::from("x")), "Literal(\"x\")");
    }

    #[test]
    fn cow_and_string_ref_convert_to_literal() {
        let owned = String::from("owned");
        assert_eq!(TextSource::from(&owned).resolve(), "owned");
        assert_eq!(TextSource::from(Cow::Borrowed("cow")).resolve(), "cow");
    }
}
