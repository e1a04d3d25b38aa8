//! # Shipping Models
//!
//! ## Core Entities
//! * [`parcel::ShippingBox`]: a recorded shipment with its frozen cost.
//! * [`parcel::BoxDraft`]: the candidate handed to the store before an id exists.
//!
//! ## Value Objects
//! * [`country::Country`]: the closed set of destinations, each with its rate.
//! * [`color`]: conversion between hex color input and the stored `R, G, B` form.

pub mod color;
pub mod country;
pub mod parcel;
