//! Share helpers
//!
//! Pure functions for the WhatsApp share action: the fixed pt-BR message
//! template and the `wa.me` composer link that carries it.

use domain::Provider;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Messaging composer endpoint
pub const WHATSAPP_SHARE_BASE: &str = "https://wa.me/";

/// Characters left as-is by JavaScript's `encodeURIComponent`
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

/// The message sent along with a generated link
#[must_use]
pub fn share_message(provider: Provider, link: &str) -> String {
    format!(
        "Oi! Criei uma corrida do {} pra você. É só clicar no link que vai abrir o app pronto:\n\n{link}",
        provider.display_name()
    )
}

/// The composer URL pre-filled with [`share_message`]
#[must_use]
pub fn whatsapp_share_url(provider: Provider, link: &str) -> String {
    let message = share_message(provider, link);
    format!(
        "{WHATSAPP_SHARE_BASE}?text={}",
        utf8_percent_encode(&message, URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: &str = "https://m.uber.com/ul/?action=setPickup&pickup%5Blatitude%5D=-23.9";

    #[test]
    fn message_names_the_provider() {
        let msg = share_message(Provider::Uber, LINK);
        assert!(msg.starts_with("Oi! Criei uma corrida do Uber pra você."));
        assert!(msg.ends_with(&format!("\n\n{LINK}")));

        let msg = share_message(Provider::NinetyNine, LINK);
        assert!(msg.contains("corrida do 99 pra"));
    }

    #[test]
    fn share_url_encodes_like_uri_component() {
        let url = whatsapp_share_url(Provider::Uber, LINK);
        assert!(url.starts_with("https://wa.me/?text=Oi!%20Criei%20uma%20corrida%20do%20Uber"));
        assert!(url.contains("%0A%0A"));
        assert!(url.contains("voc%C3%AA"));
        // nested link is escaped so its own query does not leak
        assert!(url.contains("https%3A%2F%2Fm.uber.com%2Ful%2F%3Faction%3DsetPickup%26"));
        assert!(url.contains("%255B"));
    }

    #[test]
    fn share_url_round_trips() {
        let url = whatsapp_share_url(Provider::NinetyNine, LINK);
        let parsed = url::Url::parse(&url).unwrap();
        assert_eq!(parsed.host_str(), Some("wa.me"));
        let text = parsed
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, share_message(Provider::NinetyNine, LINK));
    }
}
