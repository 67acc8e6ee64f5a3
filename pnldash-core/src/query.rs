//! Query building — presence validation of the five report parameters.
//!
//! Validation is deliberately shallow: a field is missing if it is `None`
//! or an empty string, nothing else is checked. The first missing field in
//! priority order names the error, and no network call happens on failure.

use serde::Serialize;

use crate::error::PipelineError;

/// Raw UI field values before validation. `None` and `""` both mean the
/// field was left blank.
#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub market: Option<String>,
    pub model: Option<String>,
    pub node: Option<String>,
}

/// A validated parameter set, ready to be form-encoded.
///
/// Field names match the reporting service's form fields exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportQuery {
    pub from_date: String,
    pub to_date: String,
    pub market: String,
    pub model: String,
    pub node: String,
}

/// Validate raw input into a [`ReportQuery`].
///
/// Fields are checked in fixed priority order — Start Date, End Date,
/// Market, Model, Node — and the first missing one aborts with
/// `Missing parameter - {label}`.
pub fn build(input: &QueryInput) -> Result<ReportQuery, PipelineError> {
    let fields: [(&'static str, &Option<String>); 5] = [
        ("Start Date", &input.from_date),
        ("End Date", &input.to_date),
        ("Market", &input.market),
        ("Model", &input.model),
        ("Node", &input.node),
    ];

    for (label, value) in fields {
        match value {
            Some(v) if !v.is_empty() => {}
            _ => return Err(PipelineError::MissingParameter(label)),
        }
    }

    // All five are Some and non-empty at this point.
    Ok(ReportQuery {
        from_date: input.from_date.clone().unwrap_or_default(),
        to_date: input.to_date.clone().unwrap_or_default(),
        market: input.market.clone().unwrap_or_default(),
        model: input.model.clone().unwrap_or_default(),
        node: input.node.clone().unwrap_or_default(),
    })
}
