use serde::{Deserialize, Serialize};

use crate::shipping::country::Country;

/// A recorded shipment.
///
/// `shipping_cost` is computed once when the box is created and never
/// recalculated, even if rates change later. Boxes are never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingBox {
    pub id: String,
    pub receiver_name: String,
    /// Kilograms.
    pub weight: f64,
    /// `R, G, B` decimal triplet.
    pub box_color: String,
    pub destination_country: Country,
    /// INR, rounded to two decimals.
    pub shipping_cost: f64,
}

/// A box that has passed validation but has not been given an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxDraft {
    pub receiver_name: String,
    pub weight: f64,
    pub box_color: String,
    pub destination_country: Country,
    pub shipping_cost: f64,
}

impl BoxDraft {
    pub fn with_id(self, id: String) -> ShippingBox {
        ShippingBox {
            id,
            receiver_name: self.receiver_name,
            weight: self.weight,
            box_color: self.box_color,
            destination_country: self.destination_country,
            shipping_cost: self.shipping_cost,
        }
    }
}
