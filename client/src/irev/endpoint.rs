//! Resource paths of the IReV API, relative to `{host}/api/v1`.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use super::error::IrevApiError;

/// Valid state numbers: 36 states plus the Federal Capital Territory.
pub const STATE_ID_RANGE: RangeInclusive<u32> = 1..=37;

/// One upstream endpoint together with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    ElectionTypes,
    Elections { election_type: &'a str },
    Election { election: &'a str },
    ElectionStats { election: &'a str },
    LgasByState { election: &'a str, state_id: u32 },
    Lga { election: &'a str, lga: &'a str },
    PollingUnitsByWard { election: &'a str, ward: &'a str },
    PollingUnit { election: &'a str, polling_unit: &'a str },
}

impl<'a> Endpoint<'a> {
    /// Build the LGA-by-state endpoint, rejecting state numbers outside
    /// [`STATE_ID_RANGE`].
    ///
    /// # Errors
    /// Returns [`IrevApiError::Validation`] for an out-of-range state.
    pub fn lgas_by_state(election: &'a str, state_id: u32) -> Result<Self, IrevApiError> {
        if !STATE_ID_RANGE.contains(&state_id) {
            return Err(IrevApiError::Validation(format!(
                "state id should be a number between {} and {} inclusive, got {state_id}",
                STATE_ID_RANGE.start(),
                STATE_ID_RANGE.end()
            )));
        }

        Ok(Self::LgasByState { election, state_id })
    }

    /// Path below `/api/v1`, with identifiers percent-encoded.
    pub fn path(&self) -> String {
        match *self {
            Self::ElectionTypes => "/election-types".to_string(),
            Self::Elections { .. } => "/elections".to_string(),
            Self::Election { election } => {
                format!("/election-reports/election/{}", segment(election))
            }
            Self::ElectionStats { election } => {
                format!("/elections/{}/result/stats", segment(election))
            }
            Self::LgasByState { election, state_id } => {
                format!("/elections/{}/lga/state/{state_id}", segment(election))
            }
            Self::Lga { election, lga } => {
                format!("/elections/{}/lga/{}", segment(election), segment(lga))
            }
            Self::PollingUnitsByWard { election, .. } => {
                format!("/elections/{}/pus", segment(election))
            }
            Self::PollingUnit {
                election,
                polling_unit,
            } => format!("/elections/{}/pu/{}", segment(election), segment(polling_unit)),
        }
    }

    /// Query parameters; encoding happens when the request is built.
    pub fn query(&self) -> Vec<(&'static str, &'a str)> {
        match *self {
            Self::Elections { election_type } => vec![("election_type", election_type)],
            Self::PollingUnitsByWard { ward, .. } => vec![("ward", ward)],
            _ => Vec::new(),
        }
    }

    /// Whether upstream nests a full ward object in `polling_unit.ward`.
    ///
    /// Observed behaviour of the polling unit endpoints only; every other
    /// endpoint returns the ward identifier.
    pub const fn returns_nested_ward(&self) -> bool {
        matches!(self, Self::PollingUnitsByWard { .. } | Self::PollingUnit { .. })
    }
}

fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
