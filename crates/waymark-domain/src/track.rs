use serde::{Deserialize, Serialize};

pub type TrackId = u64;

/// Rendering-ready track record fetched from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub length_meters: f64,
}
