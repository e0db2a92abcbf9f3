#![allow(clippy::expect_used)]
//! Record handlers against a real database.

use salvo::http::StatusCode;

use super::helpers::{TestDb, Value, delete, get, id_of, json, post, put};

fn acme() -> Value {
    json!({
        "name": "Acme Corp",
        "location": "Pune",
        "linkedIn": "https://linkedin.com/company/acme",
        "emails": ["hello@acme.test"],
        "phoneNumbers": ["+91 000 000 0000"],
        "periodicity": "2 weeks",
    })
}

fn email_method() -> Value {
    json!({
        "name": "Email",
        "description": "Send an email",
        "sequence": 3,
        "mandatory": true,
    })
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn company_lifecycle() {
    let db = TestDb::new().await;
    let service = db.service();

    let (status, created) = post(&service, "/companies", &acme()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["linkedIn"], "https://linkedin.com/company/acme");
    assert_eq!(created["comments"], Value::Null);
    let id = id_of(&created);

    let (status, fetched) = get(&service, &format!("/companies/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Acme Corp");

    let mut renamed = acme();
    renamed["name"] = json!("Acme Holdings");
    let (status, updated) = put(&service, &format!("/companies/{id}"), &renamed).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Acme Holdings");

    assert_eq!(
        delete(&service, &format!("/companies/{id}")).await,
        StatusCode::NO_CONTENT
    );

    let (status, body) = get(&service, &format!("/companies/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn unknown_ids_are_not_found() {
    let db = TestDb::new().await;
    let service = db.service();
    let missing = uuid::Uuid::now_v7();

    let (status, _) = put(
        &service,
        &format!("/communications/{missing}"),
        &email_method(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(
        delete(&service, &format!("/notifications/{missing}")).await,
        StatusCode::NOT_FOUND
    );
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn communication_with_dangling_reference_is_rejected() {
    let db = TestDb::new().await;
    let service = db.service();

    let (_, company) = post(&service, "/companies", &acme()).await;
    let body = json!({
        "company": id_of(&company),
        "type": uuid::Uuid::now_v7(),
        "date": "2024-12-02",
        "notes": "Nobody offers this channel",
    });

    let (status, error) = post(&service, "/communications-user", &body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        error["error"]
            .as_str()
            .is_some_and(|m| m.contains("communication method"))
    );
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn referenced_records_cannot_be_deleted() {
    let db = TestDb::new().await;
    let service = db.service();

    let (_, company) = post(&service, "/companies", &acme()).await;
    let (_, method) = post(&service, "/communications", &email_method()).await;
    let (status, logged) = post(
        &service,
        "/communications-user",
        &json!({
            "company": id_of(&company),
            "type": id_of(&method),
            "date": "2024-12-02",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(logged["date"], "2024-12-02");

    let company_path = format!("/companies/{}", id_of(&company));
    let method_path = format!("/communications/{}", id_of(&method));
    assert_eq!(delete(&service, &company_path).await, StatusCode::CONFLICT);
    assert_eq!(delete(&service, &method_path).await, StatusCode::CONFLICT);

    let communication_path = format!("/communications-user/{}", id_of(&logged));
    assert_eq!(
        delete(&service, &communication_path).await,
        StatusCode::NO_CONTENT
    );
    assert_eq!(delete(&service, &method_path).await, StatusCode::NO_CONTENT);
    assert_eq!(
        delete(&service, &company_path).await,
        StatusCode::NO_CONTENT
    );
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn communications_filter_by_company_newest_first() {
    let db = TestDb::new().await;
    db.seed().await;
    let service = db.service();

    let (_, companies) = get(&service, "/companies").await;
    let vasu = companies
        .as_array()
        .into_iter()
        .flatten()
        .find(|c| c["name"] == "Vasu Technologies")
        .map(id_of)
        .expect("Vasu Technologies seeded");

    let (status, body) = get(&service, &format!("/communications-user?company_id={vasu}")).await;
    assert_eq!(status, StatusCode::OK);

    let dates: Vec<&str> = body
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|c| c["date"].as_str())
        .collect();
    assert_eq!(dates, vec!["2024-12-02", "2024-11-30", "2024-11-29"]);
}
