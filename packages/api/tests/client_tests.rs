use api::{ApiClient, ApiError, NewPayment, NewPerson};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri());
    (server, client)
}

#[tokio::test]
async fn test_list_people_envelope_with_string_flags() {
    let (server, client) = client().await;

    Mock::given(method("GET"))
        .and(path("/students/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "user_id": 1, "name": "Asha", "email": "a@x.in", "phone": "1", "is_student": true, "is_teacher": false },
                { "user_id": 2, "name": "Bina", "email": "b@x.in", "phone": "2", "is_student": "true", "is_teacher": "true" },
                { "user_id": 3, "name": "Chetan", "email": "c@x.in", "phone": "3", "is_student": "yes", "is_teacher": null }
            ]
        })))
        .mount(&server)
        .await;

    let people = client.list_people().await.unwrap();
    assert_eq!(people.len(), 3);
    assert!(people[0].is_student && !people[0].is_teacher);
    assert!(people[1].is_student && people[1].is_teacher);
    assert!(!people[2].is_student && !people[2].is_teacher);
}

#[tokio::test]
async fn test_list_people_bare_array() {
    let (server, client) = client().await;

    Mock::given(method("GET"))
        .and(path("/students/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "user_id": 9 }])))
        .mount(&server)
        .await;

    let people = client.list_people().await.unwrap();
    assert_eq!(people[0].user_id, 9);
}

#[tokio::test]
async fn test_create_person_posts_to_user() {
    let (server, client) = client().await;
    let new_person = NewPerson {
        name: "Dev Patel".into(),
        email: "dev@x.in".into(),
        phone: "+919999999999".into(),
        is_student: true,
        is_teacher: false,
    };

    Mock::given(method("POST"))
        .and(path("/user"))
        .and(body_json(json!({
            "name": "Dev Patel",
            "email": "dev@x.in",
            "phone": "+919999999999",
            "is_student": true,
            "is_teacher": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": 12, "name": "Dev Patel", "email": "dev@x.in",
            "phone": "+919999999999", "is_student": true, "is_teacher": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_person(&new_person).await.unwrap().unwrap();
    assert_eq!(created.user_id, 12);
}

#[tokio::test]
async fn test_create_person_surfaces_detail() {
    let (server, client) = client().await;

    Mock::given(method("POST"))
        .and(path("/user"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "Invalid Phone Number" })),
        )
        .mount(&server)
        .await;

    let err = client
        .create_person(&NewPerson::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 400, .. }));
    assert_eq!(err.user_message("Failed to add student."), "Invalid Phone Number");
}

#[tokio::test]
async fn test_update_and_delete_person() {
    let (server, client) = client().await;

    Mock::given(method("PUT"))
        .and(path("/students/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": 4, "name": "Renamed", "is_student": false, "is_teacher": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/students/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .expect(1)
        .mount(&server)
        .await;

    let update = NewPerson {
        name: "Renamed".into(),
        is_student: false,
        is_teacher: true,
        ..Default::default()
    };
    let updated = client.update_person(4, &update).await.unwrap().unwrap();
    assert!(updated.is_teacher);

    client.delete_person(4).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_person_is_not_found() {
    let (server, client) = client().await;

    Mock::given(method("DELETE"))
        .and(path("/students/77"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "User not found" })))
        .mount(&server)
        .await;

    let err = client.delete_person(77).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_find_person_falls_back_to_list() {
    let (server, client) = client().await;

    Mock::given(method("GET"))
        .and(path("/students/5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/students/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "user_id": 4, "name": "Four" }, { "user_id": 5, "name": "Five" }]
        })))
        .mount(&server)
        .await;

    let found = client.find_person(5).await.unwrap().unwrap();
    assert_eq!(found.name, "Five");
    assert!(client.find_person(6).await.unwrap().is_none());
}

#[tokio::test]
async fn test_payments_endpoints() {
    let (server, client) = client().await;

    Mock::given(method("GET"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "payment_id": 1, "student_id": 2, "amount": 1500.0, "due_date": "2024-05-01", "status": "Paid" },
                { "payment_id": 2, "student_id": 3, "amount": "800", "due_date": "2024-05-01", "status": "Overdue" }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/students/2/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "payment_id": 1, "student_id": 2, "amount": 1500.0, "status": "Paid" }],
            "student": { "user_id": 2 }
        })))
        .mount(&server)
        .await;

    let all = client.list_payments().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].amount, 800.0);

    let mine = client.list_student_payments(2).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].payment_id, 1);
}

#[tokio::test]
async fn test_create_payment() {
    let (server, client) = client().await;
    let payment = NewPayment {
        student_id: 2,
        amount: 2500.0,
        due_date: "2024-06-01".into(),
        payment_date: "2024-06-02".into(),
        payment_method: "UPI".into(),
        status: "Paid".into(),
        notes: None,
    };

    Mock::given(method("POST"))
        .and(path("/payments"))
        .and(body_json(json!({
            "student_id": 2,
            "amount": 2500.0,
            "due_date": "2024-06-01",
            "payment_date": "2024-06-02",
            "payment_method": "UPI",
            "status": "Paid",
            "notes": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "payment_id": 31, "student_id": 2, "amount": 2500.0,
            "due_date": "2024-06-01", "payment_date": "2024-06-02",
            "payment_method": "UPI", "status": "Paid", "notes": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_payment(&payment).await.unwrap().unwrap();
    assert_eq!(created.payment_id, 31);
    assert_eq!(created.payment_method.as_deref(), Some("UPI"));
}

#[tokio::test]
async fn test_committed_write_with_unreadable_body_is_success() {
    let (server, client) = client().await;

    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "recorded" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/students/9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let payment = NewPayment {
        student_id: 9,
        amount: 100.0,
        due_date: "2024-07-01".into(),
        payment_date: "2024-07-01".into(),
        payment_method: "Cash".into(),
        status: "Paid".into(),
        notes: None,
    };
    assert_eq!(client.create_payment(&payment).await.unwrap(), None);
    assert_eq!(client.create_person(&NewPerson::default()).await.unwrap(), None);
    assert_eq!(
        client.update_person(9, &NewPerson::default()).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_dashboard_stats_and_failure() {
    let (server, client) = client().await;

    Mock::given(method("GET"))
        .and(path("/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_students": 10, "total_teachers": 2, "total_payments": 30,
            "total_revenue": 45000.0, "pending_amount": 3000.0, "overdue_amount": 1200.0
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let stats = client.dashboard_stats().await.unwrap();
    assert_eq!(stats.total_students, 10);
    assert_eq!(stats.overdue_amount, 1200.0);

    // Later calls fall through to wiremock's default 404.
    assert!(client.dashboard_stats().await.is_err());
}

#[tokio::test]
async fn test_unreachable_backend_is_request_error() {
    let client = ApiClient::new("http://127.0.0.1:9");
    let err = client.list_people().await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
    assert_eq!(
        err.user_message("Failed to connect to the server."),
        "Failed to connect to the server."
    );
}
