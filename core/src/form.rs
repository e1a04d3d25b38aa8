//! # Add-Box Form
//!
//! ```text
//! Editing ──submit──▶ Validating ──▶ Invalid (back to Editing, errors shown)
//!                                └─▶ Valid ──▶ Submitted (box stored, fields reset)
//! ```
//!
//! Every rule is checked on each submit and all violations are reported
//! together, in rule order. Validating a negative weight also resets the
//! weight field to `0`, even though the submission is rejected.

use shipbox_common::shipping::color::hex_to_rgb;
use shipbox_common::shipping::country::Country;
use shipbox_common::shipping::parcel::{BoxDraft, ShippingBox};
use shipbox_common::storage::BoxStorage;
use thiserror::Error;
use tracing::{debug, info};

use crate::pricing::calculate_shipping_cost;
use crate::store::BoxStore;

/// Color picker value the form starts with and returns to after a submit.
pub const DEFAULT_BOX_COLOR: &str = "#000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Receiver name is required")]
    ReceiverRequired,
    #[error("Weight cannot be negative")]
    NegativeWeight,
    #[error("Weight must be greater than 0")]
    WeightNotPositive,
    #[error("Weight is too large to price")]
    WeightTooLarge,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Validating,
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxForm {
    receiver_name: String,
    /// Raw text as typed, so that empty and unparseable input can be told apart from zero.
    weight: String,
    /// `#rrggbb` from the color picker.
    box_color: String,
    destination_country: Country,
    errors: Vec<FormError>,
    phase: FormPhase,
}

impl Default for BoxForm {
    fn default() -> Self {
        Self {
            receiver_name: String::new(),
            weight: String::new(),
            box_color: DEFAULT_BOX_COLOR.to_string(),
            destination_country: Country::default(),
            errors: Vec::new(),
            phase: FormPhase::default(),
        }
    }
}

impl BoxForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receiver_name(&self) -> &str {
        &self.receiver_name
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn box_color(&self) -> &str {
        &self.box_color
    }

    pub fn destination_country(&self) -> Country {
        self.destination_country
    }

    pub fn errors(&self) -> &[FormError] {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn set_receiver_name(&mut self, value: impl Into<String>) {
        self.receiver_name = value.into();
        self.phase = FormPhase::Editing;
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.weight = value.into();
        self.phase = FormPhase::Editing;
    }

    pub fn set_box_color(&mut self, value: impl Into<String>) {
        self.box_color = value.into();
        self.phase = FormPhase::Editing;
    }

    pub fn set_destination_country(&mut self, country: Country) {
        self.destination_country = country;
        self.phase = FormPhase::Editing;
    }

    /// Runs every rule and records the violations.
    ///
    /// Returns the parsed weight when the form is valid.
    pub fn validate(&mut self) -> Result<f64, Vec<FormError>> {
        let mut errors = Vec::new();

        if self.receiver_name.trim().is_empty() {
            errors.push(FormError::ReceiverRequired);
        }

        let weight = parse_weight(&self.weight);
        match weight {
            Some(w) if w < 0.0 => {
                errors.push(FormError::NegativeWeight);
                self.weight = "0".to_string();
            }
            Some(w) if w.is_finite() && w > 0.0 => {
                if !calculate_shipping_cost(w, self.destination_country).is_finite() {
                    errors.push(FormError::WeightTooLarge);
                }
            }
            _ => errors.push(FormError::WeightNotPositive),
        }

        self.errors = errors.clone();
        match weight {
            Some(w) if errors.is_empty() => Ok(w),
            _ => Err(errors),
        }
    }

    /// Validates and, when valid, prices the box, adds it to `store` and resets the form.
    pub fn submit<S: BoxStorage>(
        &mut self,
        store: &mut BoxStore<S>,
    ) -> Result<ShippingBox, Vec<FormError>> {
        self.phase = FormPhase::Validating;
        let weight = match self.validate() {
            Ok(weight) => weight,
            Err(errors) => {
                debug!("form rejected with {} error(s)", errors.len());
                self.phase = FormPhase::Editing;
                return Err(errors);
            }
        };

        let draft = BoxDraft {
            receiver_name: self.receiver_name.trim().to_string(),
            weight,
            box_color: hex_to_rgb(&self.box_color),
            destination_country: self.destination_country,
            shipping_cost: calculate_shipping_cost(weight, self.destination_country),
        };
        let parcel = store.add_box(draft);
        info!(
            "added box for {} to {} costing {:.2} INR",
            parcel.receiver_name, parcel.destination_country, parcel.shipping_cost
        );

        *self = Self {
            phase: FormPhase::Submitted,
            ..Self::default()
        };
        Ok(parcel)
    }
}

/// `None` for empty or unreadable input.
fn parse_weight(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
