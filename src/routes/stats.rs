//! Signup counts

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::email::EmailSender;
use crate::error::WaitlistError;
use crate::state::AppState;
use crate::store::{SignupStats, SignupStore};

/// GET /stats
pub async fn stats<S, E>(
    State(state): State<Arc<AppState<S, E>>>,
) -> Result<Json<SignupStats>, WaitlistError>
where
    S: SignupStore,
    E: EmailSender,
{
    let stats = state.store.stats()?;
    Ok(Json(stats))
}
