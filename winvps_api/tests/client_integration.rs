use serde_json::json;
use winvps_api::types::{CreateMachineOptions, MachineCommand, UpdateMachineOptions};
use winvps_api::{Client, Error, RequestOptions, ValidationError};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(mock_server: &MockServer) -> Client {
    Client::with_base_url(&mock_server.uri(), TOKEN).unwrap()
}

#[tokio::test]
async fn get_templates_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("templates.json");

    Mock::given(method("GET"))
        .and(path("/api/v2/templates"))
        .and(header("API-KEY", TOKEN))
        .and(header("Accept", "application/json"))
        .and(header("User-Agent", "winvps-rs"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.get_templates(None).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, 1);
    assert_eq!(page.data[0].name, "test");
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.pagination.limit, 50);
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.pages, 1);
}

#[tokio::test]
async fn list_sends_paging_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/jobs/pending"))
        .and(query_param("limit", "2"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("jobs.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let options = RequestOptions::new().with_limit(2).with_page(1);
    let page = client.get_pending_jobs(Some(&options)).await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.pagination.next_page(), Some(2));
}

#[tokio::test]
async fn get_machine_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/machines/VPS9999"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"not found"}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_machine("VPS9999").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("not found"));
    assert!(matches!(err, Error::Api { status: 404, .. }));
}

#[tokio::test]
async fn get_machine_full_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/machines/VPS0123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("machine_full.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let machine = client.get_machine("VPS0123").await.unwrap();
    assert_eq!(machine.machine.notes, "build agent");
    assert_eq!(machine.ips[0].address, "203.0.113.10");
}

#[tokio::test]
async fn null_data_is_missing_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/jobs/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":null}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_job(42).await.unwrap_err();
    assert!(matches!(err, Error::MissingData { status: 200 }));
    assert!(err.to_string().contains("missing data"));
}

#[tokio::test]
async fn null_pagination_on_single_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/machines/VPS1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data":{"name":"VPS1","status":"running","notes":""},"pagination":null,"error":""}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let machine = client.get_machine("VPS1").await.unwrap();
    assert_eq!(machine.machine.name, "VPS1");
    assert!(machine.ips.is_empty());
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_products(None).await.unwrap_err();
    assert!(matches!(err, Error::Decode { status: 200, .. }));
}

#[tokio::test]
async fn error_body_that_is_not_an_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/brands"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    match client.get_brands(None).await.unwrap_err() {
        Error::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn error_with_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/locations"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_locations(None).await.unwrap_err();
    assert!(matches!(err, Error::EmptyResponse { status: 500 }));
}

#[tokio::test]
async fn create_machine_incomplete_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/machines"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("create_machine.json")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let options = CreateMachineOptions {
        product_id: 1,
        location_id: 3,
        ..Default::default()
    };
    let err = client.create_machine(&options).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingField("template_id"))
    ));
    assert_eq!(err.status(), None);

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn create_machine_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/machines"))
        .and(header("Content-Type", "application/json"))
        .and(header("API-KEY", TOKEN))
        .and(body_json(json!({
            "product_id": 1,
            "template_id": 2,
            "location_id": 3,
            "disk_type": "ssd"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string(load_fixture("create_machine.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut options = CreateMachineOptions::new(1, 2, 3);
    options.disk_type = "ssd".to_string();
    let created = client.create_machine(&options).await.unwrap();
    assert_eq!(created.name, "VPS0200");
    assert_eq!(created.jobs.len(), 1);
    assert_eq!(created.jobs[0].status, "pending");
}

#[tokio::test]
async fn update_machine_uses_put() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/machines/VPS0123"))
        .and(body_json(json!({"add_disk": 10, "password": "newpassword"})))
        .respond_with(ResponseTemplate::new(202).set_body_string(
            r#"{"data":{"jobs":[{"id":7,"type":"update","status":"pending"}]}}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let options = UpdateMachineOptions {
        password: "newpassword".to_string(),
        add_disk: 10,
        ..Default::default()
    };
    let jobs = client.update_machine("VPS0123", &options).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].kind, "update");
}

#[tokio::test]
async fn machine_command_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/machines/VPS0123/enable_rdp"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data":{"jobs":[{"id":8,"type":"enable_rdp","status":"pending"}]}}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let jobs = client
        .send_machine_command("VPS0123", MachineCommand::EnableRdp)
        .await
        .unwrap();
    assert_eq!(jobs[0].id, 8);
}

#[tokio::test]
async fn change_password_returns_result_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/machines/VPS0123/change_password"))
        .and(body_json(json!({"password": "s3cret"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{"result":true}}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client
        .change_machine_password("VPS0123", "s3cret")
        .await
        .unwrap());
}

#[tokio::test]
async fn change_password_requires_password() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client
        .change_machine_password("VPS0123", "")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingField("password"))
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_ip_and_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/machines/VPS0123/add_ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data":{"address":"203.0.113.77","jobs":[{"id":9}]}}"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/machines/VPS0123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data":{"jobs":[{"id":10,"type":"delete"}]}}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let added = client.add_machine_ip("VPS0123").await.unwrap();
    assert_eq!(added.address, "203.0.113.77");
    assert_eq!(added.jobs[0].id, 9);

    let jobs = client.delete_machine("VPS0123").await.unwrap();
    assert_eq!(jobs[0].kind, "delete");
}

#[tokio::test]
async fn cancel_job_ignores_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/jobs/502"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.cancel_job(502).await.unwrap();
}

#[tokio::test]
async fn cancel_job_failure_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/jobs/1"))
        .respond_with(
            ResponseTemplate::new(409).set_body_string(r#"{"error":"job already finished"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.cancel_job(1).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "status: 409, error: job already finished");
}

#[tokio::test]
async fn get_all_machines_walks_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/machines"))
        .and(query_param("limit", "2"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("machines_page1.json")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/machines"))
        .and(query_param("limit", "2"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("machines_page2.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let machines = client.get_all_machines(Some(2)).await.unwrap();
    let names: Vec<&str> = machines.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["VPS0101", "VPS0102", "VPS0103"]);
}

#[tokio::test]
async fn get_all_stops_when_server_ignores_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data":[{"id":1}],"pagination":{"total":2,"limit":1,"page":1,"pages":2}}"#,
        ))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let jobs = client.get_all_jobs(Some(1)).await.unwrap();
    assert_eq!(jobs.len(), 2);
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let client = Client::with_base_url("http://127.0.0.1:1", TOKEN).unwrap();
    let err = client.get_jobs(None).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.status(), None);
}
