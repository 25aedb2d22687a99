use super::*;

#[test]
fn decode_user_reads_json_entry() {
    let raw = r#"{"id":"u7","display_name":"Noor","email":"noor@vibe.app","photo_url":"https://img/n.png"}"#;
    let user = decode_user(raw).unwrap();
    assert_eq!(user.id, "u7");
    assert_eq!(user.photo_url.as_deref(), Some("https://img/n.png"));
}

#[test]
fn decode_user_rejects_blank_and_garbage() {
    assert_eq!(decode_user(""), None);
    assert_eq!(decode_user("   "), None);
    assert_eq!(decode_user("not json"), None);
    assert_eq!(decode_user(r#"{"id":"u1"}"#), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_user_is_none_outside_the_browser() {
    assert_eq!(load_user(), None);
    clear_user();
}
