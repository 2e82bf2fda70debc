use super::*;
use serde_json::json;

/// Runs every operation against the mock server and collects the outcomes.
async fn call_all(client: &MugshotClient) -> Vec<(&'static str, MugshotError)> {
    vec![
        (
            "add_face",
            client
                .add_face(TEST_IMAGE, &json!({"name": "Ada"}))
                .await
                .unwrap_err(),
        ),
        ("search_face", client.search_face(TEST_IMAGE).await.unwrap_err()),
        (
            "search_face_first",
            client.search_face_first(TEST_IMAGE).await.unwrap_err(),
        ),
        ("match_face", client.match_face(TEST_IMAGE).await.unwrap_err()),
        ("delete_face", client.delete_face("face_1").await.unwrap_err()),
    ]
}

#[tokio::test]
async fn non_success_status_fails_every_operation() {
    for (code, status_line) in [
        (401, "401 Unauthorized"),
        (404, "404 Not Found"),
        (500, "500 Internal Server Error"),
    ] {
        let (mut server, client) = mock_api().await;
        let _mock = server
            .mock("POST", mockito::Matcher::Any)
            .with_status(code)
            .with_body(r#"{"success":false,"message":"nope"}"#)
            .expect(5)
            .create_async()
            .await;

        for (op, err) in call_all(&client).await {
            assert!(err.is_status(), "{op} with {code}: got {err:?}");
            assert_eq!(err.status_code(), Some(code as u16), "{op}");
            assert_eq!(
                err.to_string(),
                format!("HTTP error! Status: {status_line}"),
                "{op}"
            );
        }
    }
}

#[tokio::test]
async fn malformed_json_fails_every_operation() {
    let (mut server, client) = mock_api().await;
    let _mock = server
        .mock("POST", mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "#)
        .expect(5)
        .create_async()
        .await;

    for (op, err) in call_all(&client).await {
        assert!(err.is_decode(), "{op}: got {err:?}");
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    // Bind then drop so nothing listens on the port.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = MugshotClient::with_endpoint(TEST_API_KEY, format!("http://127.0.0.1:{port}"));

    let err = client.delete_face("face_1").await.unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
}

#[tokio::test]
async fn invalid_mime_fails_before_sending() {
    let (mut server, client) = mock_api().await;
    let mock = server
        .mock("POST", mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"success":true,"result":[]}"#)
        .expect(0)
        .create_async()
        .await;

    let image = ImageInput::from(TEST_IMAGE).with_mime("not a mime");
    let err = client.search_face(image).await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, MugshotError::InvalidMime { .. }), "got {err:?}");
    assert!(!err.is_transport());
    assert!(!err.is_status());
    assert!(!err.is_decode());
}
