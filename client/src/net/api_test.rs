use super::*;

#[test]
fn cards_endpoint_is_proxy_path() {
    assert_eq!(CARDS_ENDPOINT, "/api/cards");
}

#[test]
fn failure_message_surfaces_server_message_verbatim() {
    assert_eq!(failure_message(r#"{"message":"Unauthorized"}"#), "Unauthorized");
}

#[test]
fn failure_message_falls_back_when_message_missing() {
    assert_eq!(failure_message("{}"), GENERIC_FAILURE_MESSAGE);
    assert_eq!(failure_message(r#"{"message":null}"#), GENERIC_FAILURE_MESSAGE);
    assert_eq!(failure_message(r#"{"message":"  "}"#), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn failure_message_falls_back_on_non_json_body() {
    assert_eq!(failure_message("<html>502 Bad Gateway</html>"), GENERIC_FAILURE_MESSAGE);
    assert_eq!(failure_message(""), GENERIC_FAILURE_MESSAGE);
}
