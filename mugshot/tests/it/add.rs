use super::*;
use mockito::Matcher;
use serde_json::json;
use std::collections::HashMap;

#[tokio::test]
async fn add_face_returns_decoded_body() {
    let (mut server, client) = mock_api().await;
    let mock = with_image_part(with_sdk_headers(server.mock("POST", "/face/add")))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"message":"Face added successfully","face_id":"face_8f2c"}"#)
        .create_async()
        .await;

    let res = client
        .add_face(TEST_IMAGE, &json!({"name": "Ada"}))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        res,
        AddFaceResponse {
            success: true,
            message: "Face added successfully".into(),
            face_id: "face_8f2c".into(),
        }
    );
}

#[tokio::test]
async fn add_face_sends_metadata_as_json_field() {
    let (mut server, client) = mock_api().await;
    let mock = server
        .mock("POST", "/face/add")
        .match_body(Matcher::Regex(
            r#"(?s)name="metadata"\s+\{"age":36,"name":"Ada","tags":\["vip"\]\}"#.to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"success":true,"message":"ok","face_id":"f1"}"#)
        .create_async()
        .await;

    let mut metadata = Metadata::new();
    metadata.insert("name".into(), json!("Ada"));
    metadata.insert("tags".into(), json!(["vip"]));
    metadata.insert("age".into(), json!(36));

    client.add_face(TEST_IMAGE, &metadata).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn add_face_accepts_any_serializable_map() {
    let (mut server, client) = mock_api().await;
    let mock = server
        .mock("POST", "/face/add")
        .match_body(Matcher::Regex(r#"(?s)name="metadata"\s+\{"badge":"B-7"\}"#.to_string()))
        .with_status(200)
        .with_body(r#"{"success":true,"message":"ok","face_id":"f2"}"#)
        .create_async()
        .await;

    let metadata: HashMap<&str, &str> = HashMap::from([("badge", "B-7")]);
    let res = client.add_face(TEST_IMAGE.to_vec(), &metadata).await.unwrap();

    mock.assert_async().await;
    assert_eq!(res.face_id, "f2");
}

#[tokio::test]
async fn add_face_uses_custom_file_name() {
    let (mut server, client) = mock_api().await;
    let mock = server
        .mock("POST", "/face/add")
        .match_body(Matcher::Regex(
            r#"(?s)name="image"; filename="ada.png".*image/png"#.to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"success":true,"message":"ok","face_id":"f3"}"#)
        .create_async()
        .await;

    let image = ImageInput::from(TEST_IMAGE)
        .with_file_name("ada.png")
        .with_mime("image/png");
    client.add_face(image, &Metadata::new()).await.unwrap();
    mock.assert_async().await;
}
