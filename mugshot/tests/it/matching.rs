use super::*;
use serde_json::json;

#[tokio::test]
async fn match_face_returns_match_flags() {
    let (mut server, client) = mock_api().await;
    let mock = with_image_part(with_sdk_headers(server.mock("POST", "/face/find/match")))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"success":true,"result":[
                {"id":"face_1","match":true,"score":0.95,"metadata":{"name":"Ada"}},
                {"id":"face_2","match":false,"score":0.31,"metadata":null}
            ]}"#,
        )
        .create_async()
        .await;

    let res = client.match_face(TEST_IMAGE).await.unwrap();

    mock.assert_async().await;
    assert!(res.success);
    assert_eq!(res.result.len(), 2);
    assert!(res.result[0].is_match);
    assert_eq!(res.result[0].score, 0.95);
    assert_eq!(res.result[0].metadata["name"], json!("Ada"));
    assert!(!res.result[1].is_match);
    assert!(res.result[1].metadata.is_empty());
    assert_eq!(res.matches().count(), 1);
}
