use std::collections::HashMap;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::models::{Attendee, DmSummary, EventData, GalleryPost};

/// The read-only data the app navigates over: agenda events, the squad list
/// per event, the canvas wall, and DM thread summaries.
///
/// The catalog is the single external input of the navigation engine. It is
/// loaded once at startup and never written; intents only move snapshot
/// pointers around.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    events: Vec<EventData>,
    /// Squad lists keyed by event id.
    attendees: HashMap<String, Vec<Attendee>>,
    posts: Vec<GalleryPost>,
    dms: Vec<DmSummary>,
}

impl Catalog {
    /// Parse the catalog bundled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(include_str!("../data/catalog.json"))
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn events(&self) -> &[EventData] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Result<&EventData, CatalogError> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CatalogError::UnknownEvent(id.to_string()))
    }

    /// Squad list for an event. Events without a squad list yield an empty
    /// slice rather than an error; a bare agenda entry is legal data.
    pub fn attendees_for(&self, event_id: &str) -> &[Attendee] {
        self.attendees
            .get(event_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn attendee(&self, event_id: &str, id: &str) -> Result<&Attendee, CatalogError> {
        self.attendees_for(event_id)
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CatalogError::UnknownAttendee(id.to_string()))
    }

    pub fn posts(&self) -> &[GalleryPost] {
        &self.posts
    }

    pub fn post(&self, id: &str) -> Result<&GalleryPost, CatalogError> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::UnknownPost(id.to_string()))
    }

    pub fn dms(&self) -> &[DmSummary] {
        &self.dms
    }

    pub fn dm(&self, id: &str) -> Result<&DmSummary, CatalogError> {
        self.dms
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| CatalogError::UnknownDm(id.to_string()))
    }
}
