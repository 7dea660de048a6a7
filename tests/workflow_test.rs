use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use library_desk::ClientError;
use library_desk::api::ApiClient;
use library_desk::forms::{
    BookForm, FineForm, IssueForm, MembershipForm, NO_PENDING_RETURN, ReturnForm, SearchForm,
};
use library_desk::models::{MediaType, Role};
use library_desk::services::{
    Desk, auth_service, maintenance_service, report_service, transaction_service,
};
use library_desk::session::{PendingReturn, Session, SessionStore};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn session_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("library-desk-it-{}", std::process::id()))
        .join(format!("{}.json", name))
}

// Desk against the mock server with an isolated session file
fn setup_desk(server: &MockServer, name: &str) -> Desk {
    let client = ApiClient::new(Url::parse(&server.uri()).unwrap(), Duration::from_secs(5))
        .expect("Failed to build client");
    let store = SessionStore::new(session_path(name));
    store.clear().expect("Failed to clear session");
    Desk::new(client, store).with_today(today())
}

fn log_in(desk: &Desk, role: Role) {
    desk.store()
        .save(&Session {
            token: Some("test-token".to_string()),
            role: Some(role),
            username: Some("desk".to_string()),
            pending_return: None,
        })
        .expect("Failed to save session");
}

#[tokio::test]
async fn test_login_persists_session() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "login");

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "role": "admin",
            "access_token": "opaque-token",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;

    let msg = auth_service::login(&desk, " admin ", "admin").await.unwrap();
    assert_eq!(msg, "Logged in as admin (admin)");

    let session = desk.session().unwrap();
    assert_eq!(session.token.as_deref(), Some("opaque-token"));
    assert_eq!(session.role, Some(Role::Admin));
    assert_eq!(session.username.as_deref(), Some("admin"));

    auth_service::logout(&desk).unwrap();
    assert_eq!(desk.session().unwrap(), Session::default());
}

#[tokio::test]
async fn test_login_requires_credentials() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "login-empty");

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = auth_service::login(&desk, "admin", "  ").await.unwrap_err();
    assert_eq!(err.to_string(), auth_service::CREDENTIALS_MANDATORY);
}

#[tokio::test]
async fn test_requests_need_a_session() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "no-session");

    let err = transaction_service::load_active_issues(&desk)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotLoggedIn));
}

#[tokio::test]
async fn test_dashboard_uses_session_role() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "dashboard");
    log_in(&desk, Role::User);

    Mock::given(method("GET"))
        .and(path("/user/home"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "modules": ["Reports", "Transactions"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = auth_service::dashboard(&desk).await.unwrap();
    let rendered = listing.to_string();
    assert!(rendered.contains("Reports\nTransactions\n"));
    assert!(rendered.contains("Dashboard: user_home"));
}

#[tokio::test]
async fn test_invalid_book_form_sends_nothing() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "book-invalid");
    log_in(&desk, Role::Admin);

    Mock::given(method("POST"))
        .and(path("/maintenance/add-book"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let form = BookForm {
        title: "Dune".to_string(),
        ..Default::default()
    };
    let err = maintenance_service::add_book(&desk, &form)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "All fields are mandatory.");
}

#[tokio::test]
async fn test_add_book_and_membership_messages() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "maintenance");
    log_in(&desk, Role::Admin);

    Mock::given(method("POST"))
        .and(path("/maintenance/add-book"))
        .and(body_json(json!({
            "media_type": "book",
            "title": "Dune",
            "author": "Frank Herbert",
            "serial_no": "BK-4",
            "category": "scifi"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Book added successfully",
            "book_id": 4
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/maintenance/add-membership"))
        .and(body_json(json!({ "member_name": "Ada", "duration_months": 6 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Membership created successfully",
            "membership_number": "M-20261019-101500123456"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let msg = maintenance_service::add_book(
        &desk,
        &BookForm {
            media_type: None,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            serial_no: "BK-4".to_string(),
            category: "scifi".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(msg, "Book added successfully");

    let msg = maintenance_service::add_membership(
        &desk,
        &MembershipForm {
            name: "Ada".to_string(),
            duration: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(msg, "Membership Created | Number: M-20261019-101500123456");
}

#[tokio::test]
async fn test_search_with_no_results_shows_notice() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "search-empty");
    log_in(&desk, Role::User);

    Mock::given(method("GET"))
        .and(path("/transactions/book-available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let listing = transaction_service::search_available_books(
        &desk,
        &SearchForm {
            title: None,
            media_type: Some(MediaType::Movie),
        },
    )
    .await
    .unwrap();
    assert!(listing.is_empty());
    assert_eq!(
        listing.message.as_deref(),
        Some(transaction_service::NO_BOOKS_FOUND)
    );
}

#[tokio::test]
async fn test_issue_rejects_past_date_locally() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "issue-past");
    log_in(&desk, Role::User);

    Mock::given(method("POST"))
        .and(path("/transactions/issue-book"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let form = IssueForm {
        book_id: Some("4".to_string()),
        user_id: "2".to_string(),
        issue_date: Some("2026-10-18".to_string()),
        ..Default::default()
    };
    let err = transaction_service::issue_book(&desk, &form)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Issue date cannot be lesser than today.");
}

#[tokio::test]
async fn test_issue_book_reports_transaction_id() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "issue");
    log_in(&desk, Role::User);

    Mock::given(method("POST"))
        .and(path("/transactions/issue-book"))
        .and(body_json(json!({
            "user_id": 2,
            "book_id": 4,
            "issue_date": "2026-10-19",
            "return_date": "2026-11-03",
            "remarks": "first loan"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Book issued successfully",
            "transaction_id": 17,
            "book_name": "Dune",
            "author": "Frank Herbert",
            "issue_date": "2026-10-19",
            "return_date": "2026-11-03"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let form = IssueForm {
        book_id: Some("4".to_string()),
        user_id: "2".to_string(),
        remarks: " first loan ".to_string(),
        ..Default::default()
    };
    let msg = transaction_service::issue_book(&desk, &form).await.unwrap();
    assert_eq!(msg, "Book issued successfully. Transaction ID: 17");
}

#[tokio::test]
async fn test_return_then_pay_fine_flow() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "return-flow");
    log_in(&desk, Role::User);

    Mock::given(method("POST"))
        .and(path("/transactions/return-book"))
        .and(body_json(json!({
            "transaction_id": 17,
            "serial_no": "BK-4",
            "return_date": "2026-10-19"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Proceed to pay fine page",
            "transaction_id": 17,
            "book_name": "Dune",
            "author": "Frank Herbert",
            "issue_date": "2026-09-20",
            "return_date": "2026-10-05",
            "selected_return_date": "2026-10-19",
            "fine": 140
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/transactions/pay-fine"))
        .and(body_json(json!({
            "transaction_id": 17,
            "fine_paid": true,
            "remarks": null
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Book returned successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let msg = transaction_service::return_book(
        &desk,
        &ReturnForm {
            transaction_id: "17".to_string(),
            serial_no: "BK-4".to_string(),
            return_date: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(msg, "Validated. Proceed to Pay Fine page. Fine: 140");
    assert_eq!(
        desk.session().unwrap().pending_return,
        Some(PendingReturn {
            transaction_id: 17,
            fine: 140
        })
    );

    let msg = transaction_service::pay_fine(
        &desk,
        &FineForm {
            fine_paid: true,
            remarks: String::new(),
        },
    )
    .await
    .unwrap();
    assert_eq!(msg, "Book returned successfully");
    assert_eq!(desk.session().unwrap().pending_return, None);
    // Token survives the return flow
    assert!(desk.session().unwrap().is_logged_in());
}

#[tokio::test]
async fn test_failed_payment_keeps_pending_return() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "pay-fail");
    desk.store()
        .save(&Session {
            token: Some("test-token".to_string()),
            role: Some(Role::User),
            username: None,
            pending_return: Some(PendingReturn {
                transaction_id: 9,
                fine: 30,
            }),
        })
        .unwrap();

    Mock::given(method("POST"))
        .and(path("/transactions/pay-fine"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Paid fine checkbox is mandatory for pending fine"
        })))
        .mount(&server)
        .await;

    let err = transaction_service::pay_fine(&desk, &FineForm::default())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Paid fine checkbox is mandatory for pending fine"
    );
    assert!(desk.session().unwrap().pending_return.is_some());
}

#[tokio::test]
async fn test_pay_fine_without_return_step() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "pay-none");
    log_in(&desk, Role::User);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = transaction_service::pay_fine(&desk, &FineForm::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), NO_PENDING_RETURN);
}

#[tokio::test]
async fn test_active_issues_empty_and_error() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "active");
    log_in(&desk, Role::User);

    Mock::given(method("GET"))
        .and(path("/transactions/active-issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/transactions/overdue-returns"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({})))
        .mount(&server)
        .await;

    let listing = transaction_service::load_active_issues(&desk).await.unwrap();
    assert_eq!(listing.to_string(), "No active issues found.\n");

    let err = transaction_service::load_overdue_returns(&desk)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Unable to load overdue returns");
}

#[tokio::test]
async fn test_overview_combines_reports() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "overview");
    log_in(&desk, Role::Admin);

    Mock::given(method("GET"))
        .and(path("/reports/issued-books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "transaction_id": 1, "user_id": 2, "book_id": 4,
                "issue_date": "2026-09-20", "due_date": "2026-10-05", "status": "Issued"
            },
            {
                "transaction_id": 2, "user_id": 3, "book_id": 5,
                "issue_date": "2026-09-01", "due_date": "2026-09-16", "status": "Returned"
            }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reports/overdue-returns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "transaction_id": 1, "user_id": 2, "book_id": 4,
                "due_date": "2026-10-05", "days_late": 14, "fine": 140
            }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reports/fine-report"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "transaction_id": 1, "user_id": 2, "book_id": 4,
                "due_date": "2026-10-05", "return_date": null,
                "fine": 0, "fine_paid": 0, "status": "Clear"
            },
            {
                "transaction_id": 2, "user_id": 3, "book_id": 5,
                "due_date": "2026-09-16", "return_date": "2026-09-20",
                "fine": 40, "fine_paid": 0, "status": "Fine Pending"
            }
        ])))
        .mount(&server)
        .await;

    let overview = report_service::load_overview(&desk).await.unwrap();
    assert_eq!(overview.total_transactions, 2);
    assert_eq!(overview.currently_issued, 1);
    assert_eq!(overview.overdue, 1);
    assert_eq!(overview.overdue_fines, 140);
    assert_eq!(overview.fines_pending, 1);
    assert_eq!(overview.outstanding_fines, 40);

    let listing = report_service::load_fine_report(&desk).await.unwrap();
    let table = listing.as_table().expect("fine report is a table");
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0][4], "-");
}

#[tokio::test]
async fn test_user_transactions_needs_numeric_id() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "user-report");
    log_in(&desk, Role::Admin);

    let err = report_service::load_user_transactions(&desk, "two")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "User ID must be a number.");
}

#[tokio::test]
async fn test_status_reports_backend_and_url() {
    let server = MockServer::start().await;
    let desk = setup_desk(&server, "status");

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "Backend running" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let msg = auth_service::status(&desk).await.unwrap();
    assert_eq!(msg, format!("Backend running ({}/)", server.uri()));
}
