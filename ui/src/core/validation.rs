//! Listing form validation.

use api::{ImageUpload, Listing, ListingDraft};
use thiserror::Error;

use crate::t;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("all fields are required")]
    MissingFields,

    #[error("price must be a valid positive number")]
    InvalidPrice,
}

impl FormError {
    pub fn localized(&self) -> String {
        match self {
            FormError::MissingFields => t!("form-error-required"),
            FormError::InvalidPrice => t!("form-error-price"),
        }
    }
}

/// Text fields exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingForm {
    pub description: String,
    pub location: String,
    pub price: String,
}

impl ListingForm {
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            description: listing.description.clone(),
            location: listing.location.clone(),
            price: listing.price.map(price_input).unwrap_or_default(),
        }
    }

    /// Check required fields, then that the price is a finite number above zero.
    pub fn validate(&self) -> Result<f64, FormError> {
        let blank = |s: &str| s.trim().is_empty();
        if blank(&self.description) || blank(&self.location) || blank(&self.price) {
            return Err(FormError::MissingFields);
        }
        match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price > 0.0 => Ok(price),
            _ => Err(FormError::InvalidPrice),
        }
    }

    pub fn into_draft(self, image: Option<ImageUpload>) -> Result<ListingDraft, FormError> {
        self.validate()?;
        Ok(ListingDraft {
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            price: self.price.trim().to_string(),
            image,
        })
    }
}

/// Price as it should appear in an editable input (`15`, `7.5`).
fn price_input(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        price.to_string()
    }
}
