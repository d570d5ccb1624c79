use algebot_error::Error as Report;
use ariadne::Source;

/// Utility enum to package errors from the pipeline stages.
///
/// Both stages produce the same diagnostic type; the variant records which stage failed,
/// because the user-facing message differs between a syntax problem and a solver limitation.
pub enum Error {
    /// The canonical equation string could not be parsed.
    Parse(Report),

    /// The equation parsed, but the solver could not handle it.
    Solve(Report),
}

impl Error {
    /// Report the diagnostic in this [`Error`] to stderr, rendered against the canonical
    /// equation string it refers to.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, canonical: &str) {
        let report = match self {
            Self::Parse(err) | Self::Solve(err) => err.build_report("equation"),
        };
        report.eprint(("equation", Source::from(canonical))).unwrap();
    }
}
