use crate::form::FormValues;

/// Side effects requested by the event handler, executed by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A submission passed validation; write its diagnostic record.
    RecordSubmission { values: FormValues },
    Quit,
}
