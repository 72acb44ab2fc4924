mod common;

use actix_web::{test, web, App};
use common::{bearer, test_state, PASSWORD, USERNAME};
use contactos_server::configure_routes;
use serde_json::json;

async fn issued_token(state: &contactos_server::AppState) -> String {
    state
        .token_gate
        .issue_token(USERNAME, PASSWORD)
        .await
        .expect("Failed to issue token")
}

#[actix_web::test]
async fn test_contact_lifecycle() {
    let state = test_state().await;
    let token = issued_token(&state).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes)
    ).await;

    let contact = json!({"email": "a@x.com", "nombre": "A", "telefono": "1"});

    let response = test::TestRequest::post()
        .uri("/contactos")
        .insert_header(bearer(&token))
        .set_json(&contact)
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body, contact);

    let response = test::TestRequest::get()
        .uri("/contactos/a@x.com")
        .insert_header(bearer(&token))
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body, contact);

    let response = test::TestRequest::delete()
        .uri("/contactos/a@x.com")
        .insert_header(bearer(&token))
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"mensaje": "Contacto eliminado"}));

    let response = test::TestRequest::get()
        .uri("/contactos/a@x.com")
        .insert_header(bearer(&token))
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 404);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["detail"], "Contacto no encontrado");
}

#[actix_web::test]
async fn test_duplicate_create_keeps_existing_row() {
    let state = test_state().await;
    let token = issued_token(&state).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes)
    ).await;

    let original = json!({"email": "a@x.com", "nombre": "A", "telefono": "1"});
    let duplicate = json!({"email": "a@x.com", "nombre": "B", "telefono": "2"});

    let response = test::TestRequest::post()
        .uri("/contactos")
        .insert_header(bearer(&token))
        .set_json(&original)
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 200);

    let response = test::TestRequest::post()
        .uri("/contactos")
        .insert_header(bearer(&token))
        .set_json(&duplicate)
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["detail"], "Contacto ya existe");

    let response = test::TestRequest::get()
        .uri("/contactos/a@x.com")
        .insert_header(bearer(&token))
        .send_request(&app)
        .await;
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body, original);
}

#[actix_web::test]
async fn test_list_and_update() {
    let state = test_state().await;
    let token = issued_token(&state).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes)
    ).await;

    for (email, name) in [("a@x.com", "A"), ("b@x.com", "B")] {
        let response = test::TestRequest::post()
            .uri("/contactos")
            .insert_header(bearer(&token))
            .set_json(json!({"email": email, "nombre": name, "telefono": "1"}))
            .send_request(&app)
            .await;
        assert_eq!(response.status(), 200);
    }

    let updated = json!({"email": "b@x.com", "nombre": "Bea", "telefono": "42"});
    let response = test::TestRequest::put()
        .uri("/contactos/b@x.com")
        .insert_header(bearer(&token))
        .set_json(&updated)
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body, updated);

    let response = test::TestRequest::get()
        .uri("/contactos")
        .insert_header(bearer(&token))
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!([
            {"email": "a@x.com", "nombre": "A", "telefono": "1"},
            {"email": "b@x.com", "nombre": "Bea", "telefono": "42"}
        ])
    );
}

#[actix_web::test]
async fn test_update_and_delete_missing_contact() {
    let state = test_state().await;
    let token = issued_token(&state).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes)
    ).await;

    let response = test::TestRequest::put()
        .uri("/contactos/ghost@x.com")
        .insert_header(bearer(&token))
        .set_json(json!({"email": "ghost@x.com", "nombre": "G", "telefono": "0"}))
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["detail"], "Contacto no existe");

    let response = test::TestRequest::delete()
        .uri("/contactos/ghost@x.com")
        .insert_header(bearer(&token))
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 400);
}

#[actix_web::test]
async fn test_unauthorized_requests_do_not_mutate() {
    let state = test_state().await;
    let token = issued_token(&state).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes)
    ).await;

    let response = test::TestRequest::post()
        .uri("/contactos")
        .insert_header(bearer(&token))
        .set_json(json!({"email": "a@x.com", "nombre": "A", "telefono": "1"}))
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 200);

    let response = test::TestRequest::post()
        .uri("/contactos")
        .insert_header(bearer("bogus"))
        .set_json(json!({"email": "z@x.com", "nombre": "Z", "telefono": "9"}))
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 401);

    let response = test::TestRequest::delete()
        .uri("/contactos/a@x.com")
        .send_request(&app)
        .await;
    assert_eq!(response.status(), 401);

    let response = test::TestRequest::get()
        .uri("/contactos")
        .insert_header(bearer(&token))
        .send_request(&app)
        .await;
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body, json!([{"email": "a@x.com", "nombre": "A", "telefono": "1"}]));
}
