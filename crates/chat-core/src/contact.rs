//! Contact address normalization.

/// Domain suffix the upstream messaging system attaches to phone-number
/// based contact identifiers.
const CONTACT_DOMAIN: &str = "@s.whatsapp.net";

/// Build the stored contact identifier from a raw phone number.
///
/// Strips every non-digit character (spaces, `+`, punctuation) and
/// appends the fixed domain suffix, matching how the row store keys
/// messages by counterparty.
pub fn contact_address(phone_number: &str) -> String {
    let digits: String = phone_number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("{digits}{CONTACT_DOMAIN}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting_characters() {
        assert_eq!(
            contact_address("+55 (11) 98765-4321"),
            "5511987654321@s.whatsapp.net"
        );
    }

    #[test]
    fn plain_digits_pass_through() {
        assert_eq!(contact_address("5511987654321"), "5511987654321@s.whatsapp.net");
    }

    #[test]
    fn empty_input_yields_bare_domain() {
        assert_eq!(contact_address(""), "@s.whatsapp.net");
        assert_eq!(contact_address("abc"), "@s.whatsapp.net");
    }
}
