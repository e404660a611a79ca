use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use shared_models::error::AppError;

use crate::error::AgendaError;
use crate::models::{parse_day, AgendaQuery, OpenSlotsResponse, Slot, SlotCheckResponse};
use crate::services::AvailabilityEngine;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// `GET /agenda?data=dd/mm/yyyy[&hora=HH:MM]`
///
/// With `hora`, answers whether that slot is open. Without it, lists every
/// open slot of the day.
#[axum::debug_handler]
pub async fn get_agenda(
    State(engine): State<Arc<AvailabilityEngine>>,
    Query(query): Query<AgendaQuery>,
) -> Result<Response, AppError> {
    let raw_date = non_empty(query.data)
        .ok_or_else(|| AgendaError::MissingParameter("data".to_string()))?;
    let date = parse_day(&raw_date)?;

    match non_empty(query.hora) {
        Some(raw_slot) => {
            let slot = Slot::try_from(raw_slot.as_str())?;
            info!("Slot check for {} at {}", raw_date, slot);

            let available = engine.is_slot_open_on(date, slot).await?;

            Ok(Json(SlotCheckResponse {
                date,
                time: slot,
                available,
            })
            .into_response())
        }
        None => {
            info!("Open slot listing for {}", raw_date);

            let available_slots = engine.list_open_slots_on(date).await?;

            Ok(Json(OpenSlotsResponse {
                date,
                total_slots: available_slots.len(),
                available_slots,
            })
            .into_response())
        }
    }
}
