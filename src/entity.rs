//! The contract every stored entity type fulfils.
//!
//! A [`Repository`](crate::repository::Repository) is generic over
//! [`Entity`]; each entity supplies its DTO types, schema, filter predicate,
//! merge logic and id prefix here.

use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::Hash;

use boarding_core::FieldErrors;
use boarding_core::validation::validate_payload;
use boarding_models::Identified;
use chrono::{DateTime, Utc};
use validator::Validate;

use crate::store::IdSequence;

pub trait Entity: Identified + Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Display + Borrow<str> + From<String> + Send + Sync + 'static;
    type Create: Validate + Send + 'static;
    type Update: Validate + Send + 'static;
    type Filter: Default + Clone + Send + Sync + 'static;

    /// Human-readable name used in messages, e.g. "Blood Group".
    const NAME: &'static str;
    /// Prefix of store-assigned ids, e.g. "bg".
    const ID_PREFIX: &'static str;

    fn id(&self) -> &Self::Id;

    fn validate_create(dto: &Self::Create) -> Result<(), FieldErrors> {
        validate_payload(dto)
    }

    fn validate_update(dto: &Self::Update) -> Result<(), FieldErrors> {
        validate_payload(dto)
    }

    /// Builds a new record. Nested items draw their ids from `ids`.
    fn build(id: Self::Id, dto: Self::Create, created_at: DateTime<Utc>, ids: &mut IdSequence)
    -> Self;

    /// Shallow-merges the supplied fields of `dto` into `self`.
    fn merge(&mut self, dto: Self::Update, ids: &mut IdSequence);

    fn touch(&mut self, at: DateTime<Utc>);

    fn matches(&self, filter: &Self::Filter) -> bool;
}

/// Copies the supplied fields of an update DTO onto a record.
///
/// Fields listed under `set` are required on the record and assigned as is;
/// fields under `wrap` are optional on the record and assigned as `Some`.
macro_rules! merge_fields {
    ($record:expr, $dto:expr; set: [$($set:ident),* $(,)?], wrap: [$($wrap:ident),* $(,)?] $(,)?) => {
        $(
            if let Some(value) = $dto.$set {
                $record.$set = value;
            }
        )*
        $(
            if let Some(value) = $dto.$wrap {
                $record.$wrap = Some(value);
            }
        )*
    };
}

pub(crate) use merge_fields;
