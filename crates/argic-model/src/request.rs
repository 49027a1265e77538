//! Inputs to code generation.

use serde::{Deserialize, Serialize};

/// Vehicle identity as supplied by the registration lookup or the quote form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDetails {
    pub manufacturer: String,
    pub model: String,
}

impl VehicleDetails {
    pub fn new(manufacturer: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
        }
    }
}

/// Glass specification chosen for the quote.
///
/// Only `color` feeds the product code; stripe and modifications are
/// reported alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlassSpecification {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifications: Vec<String>,
}

impl GlassSpecification {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            stripe: None,
            modifications: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_stripe(mut self, stripe: impl Into<String>) -> Self {
        self.stripe = Some(stripe.into());
        self
    }

    #[must_use]
    pub fn with_modifications<I, S>(mut self, modifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifications = modifications.into_iter().map(Into::into).collect();
        self
    }
}

/// Everything needed to generate and explain one product code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRequest {
    pub vehicle: VehicleDetails,
    #[serde(default)]
    pub selected_windows: Vec<String>,
    pub specification: GlassSpecification,
}
