//! RSA public-key structural validation
//!
//! Checks that text holds an RSA public key of an expected size. Input
//! may be a PEM `PUBLIC KEY` container or the raw base64 of the DER
//! bytes; any other PEM block type is refused outright, even when the
//! block itself is well-formed.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rsa::RsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;

use crate::foundation::{Validate, ValidationError};

/// How the DER bytes were obtained from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodePath {
    /// A `-----BEGIN PUBLIC KEY-----` container.
    PemBlock,
    /// The whole input decoded as standard base64.
    RawBase64,
}

// ============================================================================
// RSA PUBLIC KEY VALIDATOR
// ============================================================================

/// Validates that a string is an RSA public key with the expected
/// modulus size in bits.
///
/// The size is derived from the byte length of the modulus
/// (`bytes * 8`), matching how key sizes are conventionally quoted. The
/// comparison is therefore byte-granular: a modulus whose leading byte
/// has high bits clear reports the rounded-up size (a 2041-bit modulus
/// occupying 256 bytes passes a check for 2048). Callers needing exact
/// bit-level semantics should inspect the key themselves.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch_validator::prelude::*;
///
/// let v = rsa_public_key_bits(2048);
/// assert!(v.validate(pem_text).is_ok());
/// assert!(rsa_public_key_bits(4096).validate(pem_text).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RsaPublicKeyBits {
    bits: usize,
}

impl RsaPublicKeyBits {
    /// Creates a validator expecting the given modulus size in bits.
    #[must_use]
    pub fn new(bits: usize) -> Self {
        Self { bits }
    }

    /// The expected modulus size in bits.
    #[must_use]
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Extracts DER bytes from the input: a PEM `PUBLIC KEY` block if one
    /// is present, otherwise the whole text as raw base64.
    fn der_bytes(input: &str) -> Result<(Vec<u8>, DecodePath), ValidationError> {
        match pem::parse(input) {
            Ok(block) => {
                if block.tag() != "PUBLIC KEY" {
                    return Err(ValidationError::new(
                        "key_wrong_container",
                        "PEM block is not a PUBLIC KEY",
                    )
                    .with_param("tag", block.tag().to_string()));
                }
                Ok((block.into_contents(), DecodePath::PemBlock))
            }
            Err(_) => {
                let der = BASE64.decode(input).map_err(|_| {
                    ValidationError::new(
                        "key_undecodable",
                        "Input is neither a PEM block nor valid base64",
                    )
                })?;
                Ok((der, DecodePath::RawBase64))
            }
        }
    }
}

impl Validate for RsaPublicKeyBits {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let (der, path) = Self::der_bytes(input)?;
        tracing::trace!(?path, der_len = der.len(), "decoded public key container");

        let key = RsaPublicKey::from_public_key_der(&der).map_err(|_| {
            ValidationError::new(
                "key_not_rsa",
                "Bytes do not parse as an RSA public key",
            )
        })?;

        let actual = key.n().to_bytes_be().len() * 8;
        if actual == self.bits {
            Ok(())
        } else {
            Err(ValidationError::new(
                "key_bits_mismatch",
                "RSA modulus has the wrong size",
            )
            .with_param("expected", self.bits.to_string())
            .with_param("actual", actual.to_string()))
        }
    }
}

/// Creates an [`RsaPublicKeyBits`] validator.
#[must_use]
pub fn rsa_public_key_bits(bits: usize) -> RsaPublicKeyBits {
    RsaPublicKeyBits::new(bits)
}

// ============================================================================
// TESTS
// ============================================================================
