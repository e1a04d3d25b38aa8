//! # Application Session
//!
//! Wires one session together. The [`BoxStore`] is created once and owned
//! here; the form receives it mutably when submitting and the list view
//! only ever reads it through [`App::projection`].

use std::time::{Duration, Instant};

use shipbox_common::shipping::parcel::ShippingBox;
use shipbox_common::storage::BoxStorage;
use tracing::debug;

use crate::debounce::Debouncer;
use crate::form::{BoxForm, FormError};
use crate::listing::{self, CountryFilter, ListQuery, Projection, SortField};
use crate::router::{Route, Router};
use crate::store::BoxStore;

/// State of the list screen.
#[derive(Debug)]
pub struct ListView {
    /// Search text exactly as typed.
    search_input: String,
    query: ListQuery,
    debouncer: Debouncer<String>,
}

impl ListView {
    pub fn new(debounce: Duration) -> Self {
        Self {
            search_input: String::new(),
            query: ListQuery::default(),
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// The inputs currently applied to the projection.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Records a keystroke. The term reaches the filter only after the
    /// debounce window passes without further input.
    pub fn type_search(&mut self, text: impl Into<String>, now: Instant) {
        self.search_input = text.into();
        self.debouncer.push(self.search_input.clone(), now);
    }

    /// Applies the pending search term if it is due. Returns whether the query changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(term) if term != self.query.search => {
                debug!("applying search term {term:?}");
                self.query.search = term;
                true
            }
            _ => false,
        }
    }

    /// When the event loop should wake up to call [`ListView::tick`].
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn set_country_filter(&mut self, filter: CountryFilter) {
        self.query.country = filter;
    }

    pub fn activate_sort(&mut self, field: SortField) {
        self.query.sort.activate(field);
    }

    pub fn project<'a>(&self, boxes: &'a [ShippingBox]) -> Projection<'a> {
        listing::project(boxes, &self.query)
    }
}

pub struct App<S: BoxStorage> {
    store: BoxStore<S>,
    pub form: BoxForm,
    pub list: ListView,
    pub router: Router,
}

impl<S: BoxStorage> App<S> {
    pub fn new(store: BoxStore<S>, debounce: Duration) -> Self {
        Self {
            store,
            form: BoxForm::new(),
            list: ListView::new(debounce),
            router: Router::default(),
        }
    }

    pub fn store(&self) -> &BoxStore<S> {
        &self.store
    }

    /// Submits the form; a stored box moves the session to the list screen.
    pub fn submit_form(&mut self) -> Result<ShippingBox, Vec<FormError>> {
        let parcel = self.form.submit(&mut self.store)?;
        self.router.navigate(Route::BoxList);
        Ok(parcel)
    }

    pub fn delete_box(&mut self, id: &str) -> bool {
        self.store.delete_box(id)
    }

    pub fn projection(&self) -> Projection<'_> {
        self.list.project(self.store.boxes())
    }
}
