//! Handlers for the `/contact` resource.

use artistshub_core::contact::ContactRequest;
use artistshub_db::models::contact::{Contact, ContactWithArtist, CreateContact};
use artistshub_db::repositories::ContactRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::{created, ApiResponse, ApiResponseWithStatus, Envelope};
use crate::state::AppState;

/// POST /api/contact
///
/// Store an inquiry. `artistId` is kept as given, without checking it exists.
pub async fn submit_contact(
    State(state): State<AppState>,
    AppJson(input): AppJson<ContactRequest>,
) -> AppResult<ApiResponseWithStatus<Contact>> {
    let request = input.validate()?;

    let contact = ContactRepo::create(
        &state.pool,
        &CreateContact {
            name: request.name,
            email: request.email,
            message: request.message,
            artist_id: request.artist_id,
        },
    )
    .await?;

    tracing::info!(contact_id = contact.id, artist_id = ?contact.artist_id, "Contact message received");

    Ok(created(Envelope::ok_with_message(
        "Thank you for your message! We will get back to you soon.",
        contact,
    )))
}

/// GET /api/contact
///
/// All messages, newest first, with the referenced artist resolved.
pub async fn list_contacts(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<ContactWithArtist>>> {
    let contacts = ContactRepo::list_with_artists(&state.pool).await?;
    tracing::debug!(user_id = auth.user_id, count = contacts.len(), "Listed contact messages");
    Ok(Json(Envelope::ok(contacts)))
}
