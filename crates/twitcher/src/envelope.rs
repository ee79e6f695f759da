//! `{ success, ... }` result envelopes returned by the lookup operations.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::api::ClipResult;

/// Why a lookup came back without data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotFound {
    #[error("Clip not found")]
    Clip,
    #[error("Game not found")]
    Game,
    #[error("User not found")]
    User,
    #[error("Game id must be number")]
    GameIdNotNumber,
}

/// Outcome of a lookup that can legitimately find nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound(NotFound),
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(v) => Some(v),
            Lookup::NotFound(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, NotFound> {
        match self {
            Lookup::Found(v) => Ok(v),
            Lookup::NotFound(e) => Err(e),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(v) => Lookup::Found(f(v)),
            Lookup::NotFound(e) => Lookup::NotFound(e),
        }
    }
}

impl<T> Lookup<Vec<T>> {
    /// `Found` for a non-empty list, otherwise `NotFound(miss)`.
    pub(crate) fn from_list(data: Vec<T>, miss: NotFound) -> Self {
        if data.is_empty() {
            Lookup::NotFound(miss)
        } else {
            Lookup::Found(data)
        }
    }
}

/// Fields written next to `"success": true` for a found payload.
pub trait EnvelopeFields {
    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error>;
}

impl<T: Serialize> EnvelopeFields for Vec<T> {
    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("data", self)
    }
}

impl EnvelopeFields for ClipResult {
    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("streamer", &self.streamer)?;
        map.serialize_entry("creator", &self.creator)?;
        map.serialize_entry("clip", &self.clip)
    }
}

impl<T: EnvelopeFields> Serialize for Lookup<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Lookup::Found(body) => {
                map.serialize_entry("success", &true)?;
                body.write_fields(&mut map)?;
            }
            Lookup::NotFound(reason) => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", &reason.to_string())?;
            }
        }
        map.end()
    }
}
