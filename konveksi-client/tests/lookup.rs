mod common;

use common::{seed_order, setup};
use http::StatusCode;
use konveksi_client::OrderLookupView;
use konveksi_client::views::LookupState;
use konveksi_client::views::messages::{LOOKUP_FAILED, LOOKUP_NOT_FOUND, MSG_LOOKUP_EMPTY};

#[tokio::test]
async fn test_blank_input_only_sets_hint() {
    let (state, client) = setup();
    let mut view = OrderLookupView::new(client);

    for input in ["", "   ", "\t\n"] {
        view.set_input(input);
        view.submit().await;
        assert_eq!(view.hint(), Some(MSG_LOOKUP_EMPTY));
        assert_eq!(*view.state(), LookupState::Idle);
    }
    assert_eq!(state.request_count(), 0);
}

#[tokio::test]
async fn test_blank_input_keeps_previous_result() {
    let (state, client) = setup();
    let order = seed_order(&client, "Budi").await;

    let mut view = OrderLookupView::new(client);
    view.set_input(order.order_code.clone());
    view.submit().await;
    assert!(view.state().detail().is_some());

    let before = state.request_count();
    view.set_input("  ");
    view.submit().await;
    assert_eq!(state.request_count(), before);
    assert_eq!(view.state().detail().map(|d| d.order.id), Some(order.id));
}

#[tokio::test]
async fn test_padded_identifier_is_trimmed() {
    let (state, client) = setup();
    let order = seed_order(&client, "Budi").await;

    let mut padded = OrderLookupView::new(client.clone());
    padded.set_input(format!("  {}  ", order.order_code));
    padded.submit().await;

    let mut exact = OrderLookupView::new(client);
    exact.set_input(order.order_code.clone());
    exact.submit().await;

    assert_eq!(padded.state(), exact.state());
    assert!(padded.hint().is_none());

    let requests = state.requests();
    let n = requests.len();
    let expected = format!("/api/orders/progress/{}", order.order_code);
    assert_eq!(requests[n - 2].path, expected);
    assert_eq!(requests[n - 1].path, expected);
}

#[tokio::test]
async fn test_lookup_by_numeric_id_and_lowercase_code() {
    let (_state, client) = setup();
    let order = seed_order(&client, "Budi").await;

    let mut view = OrderLookupView::new(client);
    view.set_input(order.id.to_string());
    view.submit().await;
    assert_eq!(view.state().detail().map(|d| &d.order), Some(&order));

    view.set_input(order.order_code.to_lowercase());
    view.submit().await;
    assert_eq!(view.state().detail().map(|d| &d.order), Some(&order));
}

#[tokio::test]
async fn test_unknown_identifier_is_not_found() {
    let (_state, client) = setup();
    let mut view = OrderLookupView::new(client);
    view.set_input("K99-19990101-999");
    view.submit().await;

    assert_eq!(
        *view.state(),
        LookupState::NotFound(LOOKUP_NOT_FOUND.to_string())
    );
    assert_eq!(view.state().error_message(), Some(LOOKUP_NOT_FOUND));
}

#[tokio::test]
async fn test_server_error_is_generic_failure() {
    let (state, client) = setup();
    let order = seed_order(&client, "Budi").await;

    let mut view = OrderLookupView::new(client);
    view.set_input(order.order_code.clone());
    state.fail_next_with(StatusCode::INTERNAL_SERVER_ERROR, "database down");
    view.submit().await;

    assert_eq!(*view.state(), LookupState::Failed(LOOKUP_FAILED.to_string()));
}

#[tokio::test]
async fn test_new_submission_replaces_result() {
    let (_state, client) = setup();
    let order = seed_order(&client, "Budi").await;

    let mut view = OrderLookupView::new(client);
    view.set_input("tidak-ada");
    view.submit().await;
    assert!(view.state().error_message().is_some());

    view.set_input(order.order_code.clone());
    view.submit().await;
    assert!(view.state().error_message().is_none());
    assert_eq!(view.state().detail().map(|d| d.order.id), Some(order.id));
}

#[tokio::test]
async fn test_lookup_needs_no_admin_token() {
    let state = konveksi_mock::MockState::new(Some(common::ADMIN_TOKEN.to_string()));
    let admin = std::sync::Arc::new(
        konveksi_client::OneshotHttpClient::new(konveksi_mock::build_router(state.clone()))
            .with_token(common::ADMIN_TOKEN),
    );
    let order = seed_order(&admin, "Budi").await;

    let anonymous = std::sync::Arc::new(konveksi_client::OneshotHttpClient::new(
        konveksi_mock::build_router(state),
    ));
    let mut view = OrderLookupView::new(anonymous);
    view.set_input(order.order_code.clone());
    view.submit().await;
    assert!(view.state().detail().is_some());
}
