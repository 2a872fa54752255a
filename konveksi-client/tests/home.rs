mod common;

use common::setup;
use http::StatusCode;
use konveksi_client::HomeView;

#[tokio::test]
async fn test_home_loads_all_sections() {
    let (state, client) = setup();
    let mut home = HomeView::new(client);
    assert!(home.is_loading());

    home.load().await;

    assert!(!home.is_loading());
    assert_eq!(home.banners().len(), 2);
    assert_eq!(home.featured_products().len(), 6);
    assert_eq!(home.settings().company_name.as_deref(), Some("Konveksi 99"));
    assert_eq!(state.request_count(), 3);
    assert!(
        state
            .requests()
            .iter()
            .any(|r| r.path == "/api/products?page=1&limit=6")
    );
}

#[tokio::test]
async fn test_one_failure_empties_the_page() {
    let (state, client) = setup();
    let mut home = HomeView::new(client);

    state.fail_next(StatusCode::INTERNAL_SERVER_ERROR);
    home.load().await;

    assert!(!home.is_loading());
    assert!(home.banners().is_empty());
    assert!(home.featured_products().is_empty());
    assert!(home.settings().company_name.is_none());
}

#[tokio::test]
async fn test_reload_after_failure_recovers() {
    let (state, client) = setup();
    let mut home = HomeView::new(client);

    state.fail_next(StatusCode::SERVICE_UNAVAILABLE);
    home.load().await;
    assert!(home.banners().is_empty());

    home.load().await;
    assert_eq!(home.banners().len(), 2);
}
