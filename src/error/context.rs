//! Context attached to errors for logging.

use std::fmt;

/// Where and on what an error happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Operation that failed, e.g. `load_dataset`.
    pub operation: String,

    /// Dataset path or URL involved, if any.
    pub source: Option<String>,

    /// Module or component the error came from.
    pub component: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            source: None,
            component: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// `key=value` pairs for log lines.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];
        if let Some(ref source) = self.source {
            parts.push(format!("source={}", source));
        }
        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }
        parts.join(" ")
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.operation)?;
        if let Some(ref source) = self.source {
            write!(f, " source={}", source)?;
        }
        Ok(())
    }
}
