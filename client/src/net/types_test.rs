use super::*;

#[test]
fn target_list_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&TargetList::Requests).unwrap(), "\"requests\"");
    assert_eq!(serde_json::to_string(&TargetList::Problems).unwrap(), "\"problems\"");
    assert_eq!(serde_json::to_string(&TargetList::Suggestions).unwrap(), "\"suggestions\"");
}

#[test]
fn target_list_as_str_matches_wire_name() {
    for list in [TargetList::Requests, TargetList::Problems, TargetList::Suggestions] {
        let wire = serde_json::to_value(list).unwrap();
        assert_eq!(wire.as_str(), Some(list.as_str()));
    }
}

#[test]
fn card_request_rejects_unknown_list() {
    let raw = r#"{"list":"archive","title":"t","description":"d"}"#;
    assert!(serde_json::from_str::<CardRequest>(raw).is_err());
}

#[test]
fn card_request_parses_wire_shape() {
    let raw = r#"{"list":"problems","title":"[PROBLEMA] x","description":"**Contato:** y"}"#;
    let req: CardRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(req.list, TargetList::Problems);
    assert_eq!(req.title, "[PROBLEMA] x");
}

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);

    let body: ErrorBody = serde_json::from_str(r#"{"message":"Unauthorized"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Unauthorized"));
}
