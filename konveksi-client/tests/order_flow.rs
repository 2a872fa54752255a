//! Admin creates an order, records progress, customer looks it up

mod common;

use std::sync::Arc;

use common::setup;
use konveksi_client::views::{OrderModal, ProgressModal};
use konveksi_client::{OrderLookupView, OrderStatus, OrderWorkbench};

#[tokio::test]
async fn test_admin_to_customer_flow() {
    common::init_tracing();
    let (_state, client) = setup();

    // admin side
    let mut workbench = OrderWorkbench::new(Arc::clone(&client));
    workbench.load().await;
    assert!(workbench.orders().is_empty());

    workbench.open_create();
    if let Some(form) = workbench.order_form_mut() {
        form.customer_name = "CV Maju Jaya".into();
        form.customer_phone = "0812-3456-7890".into();
        form.notes = "Seragam kerja 50 pcs".into();
    }
    workbench.submit_order_form().await;
    assert_eq!(*workbench.order_modal(), OrderModal::Closed);

    let row = workbench.orders()[0].clone();
    assert!(row.order_code.starts_with("K99-"));
    assert_eq!(row.customer_phone.as_deref(), Some("0812-3456-7890"));

    workbench.open_progress(&row).await;
    for (status, description) in [
        ("Desain disetujui", ""),
        ("", "Bahan sudah dipotong"),
        ("selesai", "Siap diambil"),
    ] {
        if let Some(form) = workbench.progress_form_mut() {
            form.status = status.into();
            form.description = description.into();
        }
        workbench.submit_progress().await;
    }

    let ProgressModal::Open(panel) = workbench.progress_modal() else {
        panic!("progress panel should stay open");
    };
    assert_eq!(panel.timeline.len(), 3);
    assert!(panel.error.is_none());
    workbench.close_progress_modal();

    // the row picked up the status promoted by the last entry
    assert_eq!(workbench.orders()[0].status, OrderStatus::Selesai);

    // customer side
    let mut lookup = OrderLookupView::new(Arc::clone(&client));
    lookup.set_input(format!(" {} ", row.order_code));
    lookup.submit().await;

    let detail = lookup.state().detail().expect("order should be found");
    assert_eq!(detail.order.id, row.id);
    assert_eq!(detail.order.status, OrderStatus::Selesai);

    let steps: Vec<Option<&str>> = detail.progress.iter().map(|p| p.status.as_deref()).collect();
    assert_eq!(steps, vec![Some("Desain disetujui"), None, Some("selesai")]);
    assert_eq!(
        detail.progress[1].description.as_deref(),
        Some("Bahan sudah dipotong")
    );
}

#[tokio::test]
async fn test_lookup_tracks_appended_progress() {
    let (_state, client) = setup();
    let service = konveksi_client::OrderService::new(Arc::clone(&client));

    let order = service.create(&common::form("Budi")).await.unwrap();
    assert!(!order.order_code.is_empty());
    assert_eq!(order.status, OrderStatus::Pending);

    let first = konveksi_client::ProgressForm {
        status: "Desain disetujui".into(),
        description: String::new(),
    };
    service.append_progress(order.id, &first).await.unwrap();

    let detail = service.lookup_public(&order.order_code).await.unwrap();
    assert_eq!(detail.order, order);
    assert_eq!(detail.progress.len(), 1);

    let second = konveksi_client::ProgressForm {
        status: String::new(),
        description: "Sedang dijahit".into(),
    };
    service.append_progress(order.id, &second).await.unwrap();

    let detail = service.lookup_public(&order.order_code).await.unwrap();
    assert_eq!(detail.progress.len(), 2);
    assert_eq!(detail.progress[0].status.as_deref(), Some("Desain disetujui"));
    assert_eq!(detail.progress[1].description.as_deref(), Some("Sedang dijahit"));
    assert!(detail.progress[0].id < detail.progress[1].id);
}
