//! A sale flows through the shop the way the front-end drives it: record the
//! sale, then announce it. The services never talk to each other.

mod common;

use serde_json::json;

#[tokio::test]
async fn sale_and_announcement_land_in_their_own_stores() {
    let ctx = common::setup().await;

    let (status, sale) = ctx
        .post_json(
            format!("{}/analytics/sales", ctx.analytics_url),
            json!({ "product": "Розы", "quantity": 15, "amount": 7500 }),
        )
        .await
        .unwrap();
    assert_eq!(status, 201);
    assert_eq!(sale["id"], 2);

    let (status, notification) = ctx
        .post_json(
            format!("{}/notifications", ctx.notification_url),
            json!({
                "message": format!("Продажа №{}: {}", sale["id"], sale["product"].as_str().unwrap()),
                "type": "sale"
            }),
        )
        .await
        .unwrap();
    assert_eq!(status, 201);
    assert_eq!(notification["id"], 2);

    let stats = ctx
        .get_json(format!("{}/analytics/sales", ctx.analytics_url))
        .await
        .unwrap();
    assert_eq!(stats["totalSales"], 15000.0);
    assert_eq!(stats["salesCount"], 2);
    assert_eq!(stats["averageSale"], 7500.0);

    let notifications = ctx
        .get_json(format!("{}/notifications", ctx.notification_url))
        .await
        .unwrap();
    assert_eq!(notifications.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn rejected_sale_leaves_both_stores_untouched() {
    let ctx = common::setup().await;

    let (status, error) = ctx
        .post_json(
            format!("{}/analytics/sales", ctx.analytics_url),
            json!({ "product": "Розы", "quantity": 1, "amount": -1 }),
        )
        .await
        .unwrap();
    assert_eq!(status, 422);
    assert_eq!(error["error"], "Validation error");

    let stats = ctx
        .get_json(format!("{}/analytics/sales", ctx.analytics_url))
        .await
        .unwrap();
    let notifications = ctx
        .get_json(format!("{}/notifications", ctx.notification_url))
        .await
        .unwrap();
    assert_eq!(stats["salesCount"], 1);
    assert_eq!(notifications.as_array().unwrap().len(), 1);
}
