//! WhatsApp deep link builder

use urlencoding::encode;

/// Build a wa.me deep link carrying the rendered summary.
///
/// The target number is international format; a leading '+' is stripped
/// as wa.me expects digits only.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let number = number.trim().trim_start_matches('+');
    format!("https://wa.me/{}?text={}", number, encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_encodes_message() {
        let url = whatsapp_link("5491126830760", "*Nuevo Pedido*\nPlato 1");
        assert_eq!(
            url,
            "https://wa.me/5491126830760?text=%2ANuevo%20Pedido%2A%0APlato%201"
        );
    }

    #[test]
    fn test_leading_plus_is_stripped() {
        let url = whatsapp_link("+5491126830760", "hola");
        assert!(url.starts_with("https://wa.me/5491126830760?text="));
    }
}
