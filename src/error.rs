use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise from solver configuration or from the input points.
#[derive(Debug, Clone, PartialEq)]
pub enum SpannerError {
    UnknownAlgorithm(String),
    UnknownMetric(String),
    MalformedPoint(String),
    NonFiniteCoordinate(String),
    TooManyTerminals(String),
    TooManyOptionals(String),
}

impl Error for SpannerError {}

impl Display for SpannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            SpannerError::UnknownAlgorithm(name) => format!("Unknown algorithm {name}"),
            SpannerError::UnknownMetric(name) => format!("Unknown distance function {name}"),
            SpannerError::MalformedPoint(msg) => format!("Malformed point: {msg}"),
            SpannerError::NonFiniteCoordinate(msg) => format!("Non finite coordinate: {msg}"),
            SpannerError::TooManyTerminals(msg) => format!("Too many terminals: {msg}"),
            SpannerError::TooManyOptionals(msg) => format!("Too many optional vertices: {msg}"),
        };
        write!(f, "{message}")
    }
}
