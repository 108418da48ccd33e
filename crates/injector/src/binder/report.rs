//! Bind outcome reporting

/// Why a field was left alone during a bind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The field carries neither an injection nor an infection key
    Untagged,
    /// The field has an injection key but cannot be written
    NotWritable,
    /// Nothing is registered under the field's injection key
    AbsentKey(String),
    /// The field has an infection key but no value to expose
    NotExposable(String),
}

/// A field and the registry key it was bound through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundField {
    /// Field name
    pub field: &'static str,
    /// Registry key
    pub key: String,
}

/// A field the binder skipped, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedField {
    /// Field name
    pub field: &'static str,
    /// Why the field was skipped
    pub reason: SkipReason,
}

/// Outcome of binding one record
///
/// Non-record targets produce an empty report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Fields overwritten from the registry
    pub injected: Vec<BoundField>,
    /// Fields copied into the registry
    pub infected: Vec<BoundField>,
    /// Fields left untouched
    pub skipped: Vec<SkippedField>,
}

impl BindReport {
    /// Whether no field was bound or skipped
    pub fn is_empty(&self) -> bool {
        self.injected.is_empty() && self.infected.is_empty() && self.skipped.is_empty()
    }

    /// Whether `field` was injected
    pub fn was_injected(&self, field: &str) -> bool {
        self.injected.iter().any(|bound| bound.field == field)
    }

    /// Whether `field` was infected
    pub fn was_infected(&self, field: &str) -> bool {
        self.infected.iter().any(|bound| bound.field == field)
    }

    /// Reason `field` was skipped, if it was
    pub fn skip_reason(&self, field: &str) -> Option<&SkipReason> {
        self.skipped
            .iter()
            .find(|skipped| skipped.field == field)
            .map(|skipped| &skipped.reason)
    }

    pub(crate) fn record_injected(&mut self, field: &'static str, key: String) {
        self.injected.push(BoundField { field, key });
    }

    pub(crate) fn record_infected(&mut self, field: &'static str, key: String) {
        self.infected.push(BoundField { field, key });
    }

    pub(crate) fn record_skipped(&mut self, field: &'static str, reason: SkipReason) {
        self.skipped.push(SkippedField { field, reason });
    }
}
