#![allow(clippy::expect_used)]
//! Seed loader against a real database.

use salvo::http::StatusCode;

use outreach_test::outreach_db::db::query::{
    communication, communication_method, company, notification,
};
use outreach_test::outreach_service::seed::fixtures::user_id_from_legacy;

use super::helpers::{TestDb, Value, get};

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn seeding_twice_yields_one_dataset() {
    let db = TestDb::new().await;

    let first = db.seed().await;
    let second = db.seed().await;

    assert_eq!(first.cleared, 0);
    assert_eq!(second.cleared, 27);

    let mut conn = db.conn().await;
    let counts = (
        company::count(&mut conn).await.expect("count companies"),
        communication_method::count(&mut conn)
            .await
            .expect("count methods"),
        communication::count(&mut conn)
            .await
            .expect("count communications"),
        notification::count(&mut conn)
            .await
            .expect("count notifications"),
    );
    assert_eq!(counts, (6, 5, 10, 6));
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn seeded_methods_are_ordered_and_flagged() {
    let db = TestDb::new().await;
    db.seed().await;

    let mut conn = db.conn().await;
    let methods = communication_method::list_methods(&mut conn)
        .await
        .expect("list methods");

    let sequences: Vec<i32> = methods.iter().map(|m| m.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 3, 4, 5]);

    let mandatory: Vec<&str> = methods
        .iter()
        .filter(|m| m.mandatory)
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(
        mandatory,
        vec!["LinkedIn Post", "LinkedIn Message", "Email"]
    );
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn seeded_follow_up_email_references_vasu_and_email() {
    let db = TestDb::new().await;
    db.seed().await;

    let mut conn = db.conn().await;
    let communications = communication::list_communications(&mut conn, None)
        .await
        .expect("list communications");
    let follow_up = communications
        .iter()
        .find(|c| c.notes.as_deref() == Some("Follow-up email sent to Vasu Technologies."))
        .expect("follow-up communication seeded");

    let owner = company::get_company(&mut conn, follow_up.company_id)
        .await
        .expect("load company")
        .expect("company exists");
    let method = communication_method::get_method(&mut conn, follow_up.method_id)
        .await
        .expect("load method")
        .expect("method exists");

    assert_eq!(owner.name, "Vasu Technologies");
    assert_eq!(method.name, "Email");
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn seeded_notifications_are_served_with_literal_types() {
    let db = TestDb::new().await;
    db.seed().await;
    let service = db.service();

    let (status, body) = get(&service, "/notifications").await;
    assert_eq!(status, StatusCode::OK);

    let notifications = body.as_array().expect("array body");
    assert_eq!(notifications.len(), 6);
    for item in notifications {
        let kind = item["type"].as_str();
        assert!(
            matches!(kind, Some("overdue" | "due today")),
            "unexpected {item}"
        );
    }

    let user = user_id_from_legacy("6748460ea8ccd99f8fae3010").expect("well formed id");
    let (status, body) = get(&service, &format!("/notifications?user_id={user}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));
    assert!(
        body.as_array()
            .into_iter()
            .flatten()
            .all(|n| n["user"] == Value::String(user.to_string()))
    );
}
