use std::fmt;

use reqwest::header::HeaderValue;

use crate::shared::result::AppResult;

#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err("La API key de MineSkin está vacía.".to_string());
        }
        if !api_key.is_ascii() || HeaderValue::from_str(&api_key).is_err() {
            return Err(
                "La API key de MineSkin contiene caracteres no permitidos en una cabecera HTTP."
                    .to_string(),
            );
        }
        Ok(Self(api_key))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::Credential;

    #[test]
    fn trims_and_rejects_blank_keys() {
        assert_eq!(Credential::new("  key-123 \n").unwrap().expose(), "key-123");
        assert!(Credential::new("   ").is_err());
    }

    #[test]
    fn rejects_keys_that_cannot_be_sent_as_a_header() {
        for key in ["abc\ndef", "abc\u{7f}def", "clé-ñ"] {
            let error = Credential::new(key).unwrap_err();
            assert!(error.contains("caracteres no permitidos"), "{key:?}");
        }
    }

    #[test]
    fn debug_output_hides_the_key() {
        let credential = Credential::new("secret-key").unwrap();
        assert!(!format!("{credential:?}").contains("secret-key"));
    }
}
