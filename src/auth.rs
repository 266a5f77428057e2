use std::fmt;

/// A GitHub access token.
///
/// Wraps the raw secret so it cannot leak through `Debug` output or logs.
#[derive(Clone)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trips_raw_value() {
        let token = Token::from("ghp_abc123");
        assert_eq!(token.as_str(), "ghp_abc123");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let token = Token::from("ghp_abc123");
        assert_eq!(format!("{token:?}"), "Token(****)");
    }
}
