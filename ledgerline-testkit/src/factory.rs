use crate::{FixtureStore, TestkitResult};
use ledgerline_model::models::{TRANSACTION, TRANSACTION_EVENT};
use ledgerline_model::{Record, ResourceIdentifier};

/// Builds records with default attributes for a [`FixtureStore`].
pub trait Factory {
    /// A fresh unsaved record.
    fn build(&self) -> Record;

    /// Runs once the built record has been stored and given an id.
    fn after_create(&self, _record: &Record, _store: &mut FixtureStore) -> TestkitResult<()> {
        Ok(())
    }
}

/// A visa test card transaction with one event recorded against it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFactory;

impl TransactionFactory {
    pub const CARD_NUMBER: &'static str = "411111******1111";
    pub const CARD_BRAND: &'static str = "visa";
}

impl Factory for TransactionFactory {
    fn build(&self) -> Record {
        Record::new(TRANSACTION)
            .with_attribute("cardNumber", Self::CARD_NUMBER)
            .with_attribute("cardBrand", Self::CARD_BRAND)
    }

    fn after_create(&self, transaction: &Record, store: &mut FixtureStore) -> TestkitResult<()> {
        let owner = transaction
            .id
            .clone()
            .map(|id| ResourceIdentifier::new(id, TRANSACTION));
        store.create(Record::new(TRANSACTION_EVENT).with_belongs_to("transaction", owner))?;
        Ok(())
    }
}
