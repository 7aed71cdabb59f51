//! Walks the election hierarchy from an election type code down to the LGAs
//! of one state.

use serde::Serialize;
use thiserror::Error;

use crate::irev::{Election, ElectionType, IrevApi, IrevApiError, LgaApiResult};

/// State number of the Federal Capital Territory.
pub const FCT_STATE_ID: u32 = 15;

#[derive(Debug, Error)]
pub enum ExploreError {
    #[error(transparent)]
    Api(#[from] IrevApiError),

    #[error("Election type not found: {0}")]
    ElectionTypeNotFound(String),

    #[error("No elections for election type {0}")]
    NoElections(String),
}

/// Every LGA of one state for the first election of a type.
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub election_type: ElectionType,
    pub election: Election,
    pub state_id: u32,
    pub lgas: Vec<LgaApiResult>,
}

/// Find the election type whose code is exactly `code`, e.g. `PRES`.
///
/// # Errors
/// Returns [`ExploreError::ElectionTypeNotFound`] if no type carries `code`.
pub async fn find_election_type<A>(api: &A, code: &str) -> Result<ElectionType, ExploreError>
where
    A: IrevApi + ?Sized,
{
    api.get_election_types()
        .await?
        .into_iter()
        .find(|election_type| election_type.code == code)
        .ok_or_else(|| ExploreError::ElectionTypeNotFound(code.to_string()))
}

/// Fetch the LGAs of `state_id` for the first election of the type `type_code`.
///
/// # Errors
/// Propagates API failures; fails when the type is unknown or has no elections.
pub async fn state_snapshot<A>(
    api: &A,
    type_code: &str,
    state_id: u32,
) -> Result<StateSnapshot, ExploreError>
where
    A: IrevApi + ?Sized,
{
    let election_type = find_election_type(api, type_code).await?;

    let election = api
        .get_elections(&election_type.id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ExploreError::NoElections(type_code.to_string()))?;

    tracing::info!(
        election = %election.full_name,
        state_id,
        "fetching LGAs for state"
    );

    let lgas = api.get_lgas_by_state(&election.id, state_id).await?;

    Ok(StateSnapshot {
        election_type,
        election,
        state_id,
        lgas,
    })
}
