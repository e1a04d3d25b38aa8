//! # Shipbox Core
//!
//! Application services for recording shipping boxes.
//!
//! * **[`pricing`]**: cost calculation over the rate table.
//! * **[`store`]**: the canonical box list and its write-through persistence.
//! * **[`storage`]**: adapters for the [`BoxStorage`](shipbox_common::storage::BoxStorage) port.
//! * **[`form`]**: the add-box form and its validation state machine.
//! * **[`listing`]**: the filter, search and sort projection over the list.
//! * **[`debounce`]**: token based debouncing of the search input.
//! * **[`router`]**: the two screens and which one is active.
//! * **[`app`]**: wires all of the above together for one session.

pub mod app;
pub mod debounce;
pub mod form;
pub mod listing;
pub mod pricing;
pub mod router;
pub mod storage;
pub mod store;
