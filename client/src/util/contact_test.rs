use super::*;

#[test]
fn whatsapp_link_is_exact() {
    assert_eq!(
        whatsapp_link(),
        "https://wa.me/5541999999999?text=Ol%C3%A1!%20Preciso%20de%20suporte%20t%C3%A9cnico%20para%20meu%20IPTV."
    );
}

#[test]
fn spaces_encode_as_percent_20() {
    assert_eq!(encode_uri_component("a b"), "a%20b");
    assert!(!whatsapp_link().contains('+'));
}

#[test]
fn uri_component_keeps_unreserved_marks() {
    assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(encode_uri_component("a&b=c?d/e"), "a%26b%3Dc%3Fd%2Fe");
}
