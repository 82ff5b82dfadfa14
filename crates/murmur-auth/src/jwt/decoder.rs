//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use murmur_core::config::AuthConfig;
use murmur_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates JWT tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks:
    /// 1. Signature validity
    /// 2. Expiration
    /// 3. Token type is Access
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::authentication(
                "Invalid token type: expected access token",
            ));
        }

        Ok(claims)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AppError::authentication(
                "Invalid token type: expected refresh token",
            ));
        }

        Ok(claims)
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use murmur_core::config::AuthConfig;
    use murmur_core::error::ErrorKind;

    use super::super::encoder::JwtEncoder;
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-at-least-32-bytes-long!".into(),
            jwt_access_ttl_minutes: 15,
            jwt_refresh_ttl_hours: 24,
            password_min_length: 8,
        }
    }

    #[test]
    fn access_token_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let user_id = Uuid::new_v4();

        let pair = encoder.generate_token_pair(user_id, "ada").unwrap();
        let claims = decoder.decode_access_token(&pair.access_token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.username, "ada");
        assert_eq!(claims.token_type, TokenType::Access);
        assert!(!claims.is_expired());
    }

    #[test]
    fn refresh_token_rejected_as_access() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let pair = encoder.generate_token_pair(Uuid::new_v4(), "ada").unwrap();
        let err = decoder.decode_access_token(&pair.refresh_token).unwrap_err();

        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn wrong_secret_rejected() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);

        let other = AuthConfig {
            jwt_secret: "a-completely-different-secret-value".into(),
            ..test_config()
        };
        let decoder = JwtDecoder::new(&other);

        let pair = encoder.generate_token_pair(Uuid::new_v4(), "ada").unwrap();
        let err = decoder.decode_access_token(&pair.access_token).unwrap_err();

        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn garbage_token_rejected() {
        let decoder = JwtDecoder::new(&test_config());
        assert!(decoder.decode_access_token("not-a-jwt").is_err());
    }
}
