//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Errors in this project always point back into the canonical equation string that the
//! normalizer produced, not into the raw user query: by the time anything can fail, the query
//! has already been rewritten, so the canonical string is the only source the spans are valid
//! for.

use ariadne::{Color, Label, Report, ReportKind};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight parts of the equation.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while parsing or solving an equation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of the canonical equation string that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the canonical equation string that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

/// Builds a report with one highlighted label per span. Most [`ErrorKind`] implementations are
/// a single call to this.
///
/// Labels pair with spans in order. A span past the end of the label list is highlighted
/// without a message, as is a span whose label string is empty; label strings past the end of
/// the span list have nowhere to point and are dropped.
pub fn build_report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: String,
    labels: Vec<String>,
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let offset = spans.first().map_or(0, |span| span.start);
    let mut labels = labels.into_iter();

    let mut builder = Report::build(ReportKind::Error, src_id, offset)
        .with_message(message)
        .with_labels(
            spans
                .iter()
                .map(|span| {
                    let mut label = Label::new((src_id, span.clone())).with_color(EXPR);

                    if let Some(text) = labels.next().filter(|text| !text.is_empty()) {
                        label = label.with_message(text);
                    }

                    label
                })
                .collect::<Vec<_>>(),
        );

    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}
