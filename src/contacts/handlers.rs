use actix_web::{web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tracing::info;

use crate::auth::handlers::MessageResponse;
use crate::db::Contact;
use crate::error::{AppError, ContactError};
use crate::AppState;

/// `POST /contactos`
pub async fn create_contact(
    auth: BearerAuth,
    contact: web::Json<Contact>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    state.token_gate.verify_token(auth.token()).await?;

    if state.contacts.exists(&contact.email).await? {
        return Err(ContactError::AlreadyExists.into());
    }
    state.contacts.create(&contact).await?;

    info!("Created contact {}", contact.email);
    Ok(HttpResponse::Ok().json(contact.into_inner()))
}

/// `GET /contactos`
pub async fn list_contacts(
    auth: BearerAuth,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    state.token_gate.verify_token(auth.token()).await?;

    let contacts = state.contacts.list().await?;
    Ok(HttpResponse::Ok().json(contacts))
}

/// `GET /contactos/{email}`
pub async fn get_contact(
    auth: BearerAuth,
    email: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    state.token_gate.verify_token(auth.token()).await?;

    let contact = state
        .contacts
        .get(&email)
        .await?
        .ok_or(ContactError::NotFound)?;
    Ok(HttpResponse::Ok().json(contact))
}

/// `PUT /contactos/{email}`
///
/// The path email selects the row; the body supplies the new name and
/// phone. The body email is not used as a key.
pub async fn update_contact(
    auth: BearerAuth,
    email: web::Path<String>,
    contact: web::Json<Contact>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    state.token_gate.verify_token(auth.token()).await?;

    let email = email.into_inner();
    if !state.contacts.exists(&email).await? {
        return Err(ContactError::Missing.into());
    }
    let contact = contact.into_inner();
    state.contacts.update(&email, &contact.name, &contact.phone).await?;

    info!("Updated contact {}", email);
    Ok(HttpResponse::Ok().json(Contact {
        email,
        ..contact
    }))
}

/// `DELETE /contactos/{email}`
pub async fn delete_contact(
    auth: BearerAuth,
    email: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    state.token_gate.verify_token(auth.token()).await?;

    if !state.contacts.exists(&email).await? {
        return Err(ContactError::Missing.into());
    }
    state.contacts.delete(&email).await?;

    info!("Deleted contact {}", email);
    Ok(HttpResponse::Ok().json(MessageResponse {
        mensaje: "Contacto eliminado".to_string(),
    }))
}
