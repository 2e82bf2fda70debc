use super::*;
use mockito::Matcher;

#[tokio::test]
async fn delete_face_posts_form_encoded_id() {
    let (mut server, client) = mock_api().await;
    let mock = with_sdk_headers(server.mock("POST", "/face/delete"))
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::UrlEncoded("face_id".into(), "face_8f2c".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"message":"Face deleted"}"#)
        .create_async()
        .await;

    let res = client.delete_face("face_8f2c").await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        res,
        DeleteFaceResponse {
            success: true,
            message: "Face deleted".into(),
        }
    );
}

#[tokio::test]
async fn delete_face_escapes_id() {
    let (mut server, client) = mock_api().await;
    let mock = server
        .mock("POST", "/face/delete")
        .match_body("face_id=a+b%26c")
        .with_status(200)
        .with_body(r#"{"success":false,"message":"not found"}"#)
        .create_async()
        .await;

    let res = client.delete_face(String::from("a b&c")).await.unwrap();

    mock.assert_async().await;
    assert!(!res.success);
    assert_eq!(res.message, "not found");
}
