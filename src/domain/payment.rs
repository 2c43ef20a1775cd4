use crate::domain::model::{canonical, hash_f64};
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::{validate_finite, validate_non_empty_string};
use serde::Serialize;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    transaction_id: String,
    amount: f64,
}

impl Settlement {
    pub fn new(transaction_id: impl Into<String>, amount: f64) -> Result<Self> {
        let transaction_id = transaction_id.into();
        validate_non_empty_string("transaction_id", &transaction_id)?;
        validate_finite("amount", amount)?;
        if amount < 0.0 {
            return Err(ShowcaseError::invalid(
                "amount",
                format!("Value must not be negative, got {}", amount),
            ));
        }
        Ok(Self {
            transaction_id,
            amount: canonical(amount),
        })
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

// Amount is finite by construction.
impl Eq for Settlement {}

impl Hash for Settlement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.transaction_id.hash(state);
        hash_f64(self.amount, state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Decline {
    error_code: String,
    message: String,
}

impl Decline {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Result<Self> {
        let error_code = error_code.into();
        let message = message.into();
        validate_non_empty_string("error_code", &error_code)?;
        validate_non_empty_string("message", &message)?;
        Ok(Self {
            error_code,
            message,
        })
    }

    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Hold {
    reference: String,
    retry_after_secs: u64,
}

impl Hold {
    pub fn new(reference: impl Into<String>, retry_after_secs: u64) -> Result<Self> {
        let reference = reference.into();
        validate_non_empty_string("reference", &reference)?;
        Ok(Self {
            reference,
            retry_after_secs,
        })
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn retry_after_secs(&self) -> u64 {
        self.retry_after_secs
    }
}

/// Outcome of a payment attempt.
///
/// Each variant wraps a validated payload, so a blank identifier or a
/// negative amount cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PaymentResult {
    Success(Settlement),
    Failure(Decline),
    Pending(Hold),
}

impl PaymentResult {
    pub fn success(transaction_id: impl Into<String>, amount: f64) -> Result<Self> {
        Settlement::new(transaction_id, amount).map(PaymentResult::Success)
    }

    pub fn failure(error_code: impl Into<String>, message: impl Into<String>) -> Result<Self> {
        Decline::new(error_code, message).map(PaymentResult::Failure)
    }

    pub fn pending(reference: impl Into<String>, retry_after_secs: u64) -> Result<Self> {
        Hold::new(reference, retry_after_secs).map(PaymentResult::Pending)
    }

    pub fn describe(&self) -> String {
        match self {
            PaymentResult::Success(s) => format!(
                "Payment successful: transaction {} for ${:.2}",
                s.transaction_id, s.amount
            ),
            PaymentResult::Failure(d) => {
                format!("Payment failed: [{}] {}", d.error_code, d.message)
            }
            PaymentResult::Pending(h) => format!(
                "Payment pending: reference {} (retry in {}s)",
                h.reference, h.retry_after_secs
            ),
        }
    }

    /// Success and failure are final; pending may still change.
    pub fn is_terminal(&self) -> bool {
        match self {
            PaymentResult::Success(_) | PaymentResult::Failure(_) => true,
            PaymentResult::Pending(_) => false,
        }
    }
}
