//! # Box Store
//!
//! Owns the canonical list of boxes for the session and keeps the persisted
//! slot in sync with it.
//!
//! The in-memory list is the source of truth. Persistence is a best-effort
//! mirror: a corrupt slot at startup is discarded, and a failed write after a
//! mutation is logged while the mutation itself stands.

use shipbox_common::error::StorageError;
use shipbox_common::shipping::parcel::{BoxDraft, ShippingBox};
use shipbox_common::storage::{BOXES_SLOT, BoxStorage};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::listing;

pub struct BoxStore<S: BoxStorage> {
    storage: S,
    boxes: Vec<ShippingBox>,
    last_persist_error: Option<String>,
}

impl<S: BoxStorage> BoxStore<S> {
    /// Hydrates the list from the persisted slot.
    ///
    /// A missing slot starts empty. An unreadable or unparseable slot is
    /// logged and also starts empty; the error never reaches the caller.
    pub fn open(storage: S) -> Self {
        let boxes = load_boxes(&storage);
        debug!("box store opened with {} boxes", boxes.len());
        Self {
            storage,
            boxes,
            last_persist_error: None,
        }
    }

    /// Assigns a fresh id, appends the box and persists the whole list.
    pub fn add_box(&mut self, draft: BoxDraft) -> ShippingBox {
        let parcel = draft.with_id(self.fresh_id());
        self.boxes.push(parcel.clone());
        self.persist();
        parcel
    }

    /// Removes the box with `id`, if any, and persists the list.
    ///
    /// Returns whether a box was removed. An unknown id is not an error.
    pub fn delete_box(&mut self, id: &str) -> bool {
        let before = self.boxes.len();
        self.boxes.retain(|parcel| parcel.id != id);
        let removed = self.boxes.len() != before;
        if !removed {
            debug!("delete ignored, no box with id {id}");
        }
        self.persist();
        removed
    }

    /// The canonical list in insertion order.
    pub fn boxes(&self) -> &[ShippingBox] {
        &self.boxes
    }

    pub fn get(&self, id: &str) -> Option<&ShippingBox> {
        self.boxes.iter().find(|parcel| parcel.id == id)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Sum of every box's cost, whatever the list view is showing.
    pub fn total_cost(&self) -> f64 {
        listing::total_cost(&self.boxes)
    }

    /// Message of the most recent failed write, cleared by the next successful one.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Writes every box that JSON can represent. Boxes with a non-finite
    /// weight or cost stay in memory but are left out of the slot, since
    /// serializing them would produce `null` and make the whole slot unreadable.
    fn persist(&mut self) {
        let (storable, skipped): (Vec<&ShippingBox>, Vec<&ShippingBox>) = self
            .boxes
            .iter()
            .partition(|parcel| parcel.weight.is_finite() && parcel.shipping_cost.is_finite());

        let result = serde_json::to_string(&storable)
            .map_err(|e| StorageError::Unavailable(e.to_string()))
            .and_then(|json| self.storage.write(BOXES_SLOT, &json))
            .and_then(|()| match skipped.len() {
                0 => Ok(()),
                count => Err(StorageError::NonFinite { count }),
            });

        match result {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                error!("failed to persist boxes: {e}");
                self.last_persist_error = Some(e.to_string());
            }
        }
    }
}

fn load_boxes<S: BoxStorage>(storage: &S) -> Vec<ShippingBox> {
    let text = match storage.read(BOXES_SLOT) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("failed to read saved boxes: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<ShippingBox>>(&text) {
        Ok(boxes) => boxes,
        Err(e) => {
            warn!("failed to parse saved boxes: {e}");
            Vec::new()
        }
    }
}
