//! Direct support contact: WhatsApp deep link.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

/// Support line that receives WhatsApp messages.
pub const SUPPORT_NUMBER: &str = "5541999999999";

/// Message pre-filled in the chat.
pub const GREETING: &str = "Olá! Preciso de suporte técnico para meu IPTV.";

/// Characters escaped in a URI component: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `value` as a URI component (spaces become `%20`).
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// `https://wa.me/<number>?text=<greeting>` with the greeting encoded as a
/// URI component.
pub fn whatsapp_link() -> String {
    let base = format!("https://wa.me/{SUPPORT_NUMBER}");
    let query = format!("text={}", encode_uri_component(GREETING));
    match Url::parse(&base) {
        Ok(mut url) => {
            url.set_query(Some(&query));
            url.into()
        }
        Err(_) => format!("{base}?{query}"),
    }
}
