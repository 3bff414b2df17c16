use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type to allow services to define their own token payload.
/// Uses HS256 (HMAC with SHA-256) algorithm by default.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Errors
    /// * `MissingSigningKey` - Secret is empty
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::MissingSigningKey);
        }

        let algorithm = Algorithm::HS256;
        let mut validation = Validation::new(algorithm);
        // Expiry is checked by the caller against its own clock
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            algorithm,
        })
    }

    /// Encode claims into a JWT token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode (must implement Serialize)
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode a JWT token and verify its signature.
    ///
    /// Does not check the `exp` claim against the current time; it only
    /// requires `sub` and `exp` to be present.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Malformed` - Token is not a parseable JWT or misses required claims
    /// * `BadSignature` - Signature does not match the signing key
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let token_data =
            decode::<T>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        JwtError::BadSignature
                    }
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
