mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server(&["a", "b", "c"]);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["directory"]["status"], "ok");
    assert_eq!(json["checks"]["directory"]["message"], "Aliases: 3");
    assert_eq!(json["checks"]["gate"]["message"], "Pending writes: 0");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::create_test_server(&[]);

    let json = server.get("/health").await.json::<Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("directory").is_some());
    assert!(json["checks"].get("gate").is_some());
}
