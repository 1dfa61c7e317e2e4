use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pizza_sms::domain::MenuCatalog;
use pizza_sms::lifecycle::{FrontDesk, OrderingSystem};
use pizza_sms::webhook::router;
use tower::ServiceExt;

fn sms(path: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

fn twiml(message: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{message}</Message></Response>"
    )
}

#[tokio::test]
async fn test_sms_conversation_over_http() {
    let system = OrderingSystem::new(MenuCatalog::pizzeria());
    let app = router(system.front_desk());

    let (status, content_type, body) = send(&app, sms("/sms", "From=%2B15551234567&Body=Hi")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/xml"));
    assert_eq!(
        body,
        twiml("Welcome to Domino&apos;s! How can we assist you today? Type &apos;menu&apos; to see the menu or &apos;order&apos; to start your order.")
    );

    // The root route answers too and shares state with /sms
    let (_, _, body) = send(&app, sms("/", "From=%2B15551234567&Body=order")).await;
    assert!(body.contains("What type of pizza would you like?"));

    let (_, _, body) = send(&app, sms("/sms", "From=%2B15551234567&Body=B")).await;
    assert_eq!(
        body,
        twiml("You&apos;ve selected Hawaiian Pizza. How many would you like to order?")
    );

    send(&app, sms("/sms", "From=%2B15551234567&Body=2")).await;
    let (_, _, body) = send(&app, sms("/sms", "From=%2B15551234567&Body=done")).await;
    assert_eq!(
        body,
        twiml("Thanks for your order!\n2 Hawaiian Pizza - $14.99 each\nTotal: $29.98")
    );

    drop(app);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_missing_fields_default_to_empty() {
    let system = OrderingSystem::new(MenuCatalog::pizzeria());
    let app = router(system.front_desk());

    // Empty sender is still a customer; first message is the welcome
    let (status, _, body) = send(&app, sms("/sms", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome to Domino&apos;s!"));

    // Empty body from a known sender falls through to the help text
    let (_, _, body) = send(&app, sms("/sms", "")).await;
    assert!(body.contains("I&apos;m sorry, I didn&apos;t understand your message."));

    drop(app);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_health() {
    let system = OrderingSystem::new(MenuCatalog::pizzeria());
    let app = router(system.front_desk());

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, content_type, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, r#"{"status":"ok"}"#);

    drop(app);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_closed_actors_return_apology() {
    let (customer_actor, customers) = pizza_sms::customer_actor::new(1);
    let (conversation_actor, conversations) = pizza_sms::conversation_actor::new(1);
    drop(customer_actor);
    drop(conversation_actor);

    let app = router(FrontDesk::new(customers, conversations));
    let (status, content_type, body) = send(&app, sms("/sms", "From=%2B15550000000&Body=menu")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type.as_deref(), Some("application/xml"));
    assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>Sorry"));
}
