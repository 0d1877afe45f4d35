//! Calculation entity and its factory.
//!
//! All four variants share one record shape; the [`CalculationKind`] tag
//! selects the evaluation rule. Evaluation re-checks its preconditions on
//! every call, so records loaded from storage or built in internal code get
//! the same guarantees as those that passed boundary validation.

mod error;
mod evaluation;
mod inputs;
mod kind;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

pub use self::error::{CalculationError, InvalidInputReason};
pub use self::evaluation::Evaluator;
pub use self::inputs::{decode_inputs, encode_inputs};
pub use self::kind::CalculationKind;

/// Stable calculation identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationId(Uuid);

impl CalculationId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CalculationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CalculationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Evaluate `inputs` under the rule bound to `kind`.
///
/// Rejects results that overflow to infinity.
pub fn evaluate(kind: CalculationKind, inputs: &[f64]) -> Result<f64, CalculationError> {
    let value = (kind.evaluator())(inputs)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::NonFiniteResult)
    }
}

/// One arithmetic computation owned by a user.
///
/// ## Invariants
/// - `kind` is fixed at construction and decides evaluation.
/// - `inputs` keep the order the caller supplied.
/// - A stored `result` was produced by evaluating the current `inputs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    id: CalculationId,
    user_id: UserId,
    kind: CalculationKind,
    inputs: Vec<f64>,
    result: Option<f64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Calculation {
    /// Build a calculation from a free-form type tag.
    ///
    /// The tag is matched case-insensitively. Nothing is evaluated or
    /// persisted here.
    ///
    /// # Examples
    /// ```
    /// use calculator::domain::{Calculation, UserId};
    ///
    /// let calc = Calculation::create("Addition", UserId::random(), vec![10.0, 5.0, 3.5])
    ///     .expect("known tag");
    /// assert_eq!(calc.get_result(), Ok(18.5));
    /// ```
    pub fn create(
        type_tag: &str,
        user_id: UserId,
        inputs: Vec<f64>,
    ) -> Result<Self, CalculationError> {
        Self::create_at(type_tag, user_id, inputs, Utc::now())
    }

    /// Like [`Calculation::create`] with an explicit creation time.
    pub fn create_at(
        type_tag: &str,
        user_id: UserId,
        inputs: Vec<f64>,
        now: DateTime<Utc>,
    ) -> Result<Self, CalculationError> {
        let kind = CalculationKind::parse_tag(type_tag)?;
        Ok(Self::new(kind, user_id, inputs, now))
    }

    /// Build a calculation of a known variant.
    pub fn new(
        kind: CalculationKind,
        user_id: UserId,
        inputs: Vec<f64>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CalculationId::random(),
            user_id,
            kind,
            inputs,
            result: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a calculation from stored components.
    pub fn from_parts(
        id: CalculationId,
        user_id: UserId,
        kind: CalculationKind,
        inputs: Vec<f64>,
        result: Option<f64>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            kind,
            inputs,
            result,
            created_at,
            updated_at,
        }
    }

    /// Evaluate the current inputs without touching the stored result.
    pub fn get_result(&self) -> Result<f64, CalculationError> {
        evaluate(self.kind, &self.inputs)
    }

    /// Evaluate and store the result.
    pub fn compute_result(&mut self) -> Result<f64, CalculationError> {
        let value = self.get_result()?;
        self.result = Some(value);
        Ok(value)
    }

    /// Replace the inputs and re-evaluate.
    ///
    /// The candidate inputs are evaluated first; on failure the entity is
    /// left unchanged.
    pub fn replace_inputs(
        &mut self,
        inputs: Vec<f64>,
        now: DateTime<Utc>,
    ) -> Result<f64, CalculationError> {
        let value = evaluate(self.kind, &inputs)?;
        self.inputs = inputs;
        self.result = Some(value);
        self.updated_at = now.max(self.created_at);
        Ok(value)
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> &CalculationId {
        &self.id
    }

    /// Owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Variant, fixed at creation.
    #[must_use]
    pub const fn kind(&self) -> CalculationKind {
        self.kind
    }

    /// Operands in order.
    #[must_use]
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    /// Last computed result, if any.
    #[must_use]
    pub const fn result(&self) -> Option<f64> {
        self.result
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time of the last input change.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests;
