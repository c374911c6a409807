use crate::Record;

/// Display state for a `transaction-event`.
///
/// Captures the id of the owning transaction straight from the event's
/// reference, so the transaction itself never has to be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEventView {
    pub transaction_id: Option<String>,
}

impl TransactionEventView {
    pub fn new(transaction_event: &Record) -> Self {
        Self {
            transaction_id: transaction_event
                .belongs_to("transaction")
                .map(|target| target.id.clone()),
        }
    }
}
