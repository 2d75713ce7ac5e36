//! Reference data repository interface

use async_trait::async_trait;

use super::model::{CourtType, PaymentMethod, Venue};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReferenceDataRepository: Send + Sync {
    /// List all venues
    async fn venues(&self) -> DomainResult<Vec<Venue>>;

    /// List all court types
    async fn court_types(&self) -> DomainResult<Vec<CourtType>>;

    /// List all payment methods
    async fn payment_methods(&self) -> DomainResult<Vec<PaymentMethod>>;

    /// Find a payment method by id
    async fn payment_method_by_id(&self, id: i32) -> DomainResult<Option<PaymentMethod>>;
}
