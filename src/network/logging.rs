use std::fmt;
use std::str::FromStr;

/// How much of each HTTP exchange gets written to the log
///
/// Levels are cumulative: `Headers` includes everything `Basic` logs, and
/// `Body` additionally logs the response payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum HttpLogLevel {
    None,
    #[default]
    Basic,
    Headers,
    Body,
}

impl HttpLogLevel {
    pub fn logs_requests(self) -> bool {
        self >= HttpLogLevel::Basic
    }

    pub fn logs_headers(self) -> bool {
        self >= HttpLogLevel::Headers
    }

    pub fn logs_body(self) -> bool {
        self >= HttpLogLevel::Body
    }
}

impl fmt::Display for HttpLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpLogLevel::None => "none",
            HttpLogLevel::Basic => "basic",
            HttpLogLevel::Headers => "headers",
            HttpLogLevel::Body => "body",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown HTTP log level '{0}' (expected none, basic, headers or body)")]
pub struct ParseHttpLogLevelError(pub String);

impl FromStr for HttpLogLevel {
    type Err = ParseHttpLogLevelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(HttpLogLevel::None),
            "basic" => Ok(HttpLogLevel::Basic),
            "headers" => Ok(HttpLogLevel::Headers),
            "body" => Ok(HttpLogLevel::Body),
            _ => Err(ParseHttpLogLevelError(value.to_string())),
        }
    }
}
