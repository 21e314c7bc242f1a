mod card;
pub use card::ListingCard;

mod modal;
pub use modal::{ListingModal, ModalMode, ModalOutcome};

mod reserve;
pub use reserve::ReserveButton;

mod image;
pub(crate) use image::*;

use api::{ApiError, Listing};
use tracing::warn;

use crate::t;

/// Listings held by one view: the last fetched collection, its load error,
/// and whether a fetch is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingsState {
    pub listings: Vec<Listing>,
    pub error: Option<String>,
    pub loading: bool,
}

impl ListingsState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// State after a fetch finished. Any failure collapses to one message.
    pub fn loaded(result: Result<Vec<Listing>, ApiError>) -> Self {
        match result {
            Ok(listings) => Self {
                listings,
                error: None,
                loading: false,
            },
            Err(err) => {
                warn!("Couldn't load listings: {err}");
                Self::failed(t!("listings-load-error"))
            }
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            listings: Vec::new(),
            error: Some(message.into()),
            loading: false,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Swap in an updated listing with the same id.
    pub fn replace(&mut self, updated: Listing) {
        if let Some(slot) = self.listings.iter_mut().find(|l| l.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.listings.retain(|l| l.id != id);
    }

    /// Nothing to show and nothing went wrong.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.listings.is_empty()
    }
}
