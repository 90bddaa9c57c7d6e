//! # Recoverable ECDSA Signatures (secp256k1)
//!
//! Validators sign checkpoint digests with secp256k1 and attach the recovery
//! id, so verifiers recover the signer identity instead of carrying public
//! keys around.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: S must not exceed n/2
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - **Constant-Time Comparisons**: scalar checks use the `subtle` crate
//! - **Identity**: last 20 bytes of keccak256 of the uncompressed public key

use crate::hashing::keccak256;
use crate::CryptoError;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use shared_types::{Hash, ValidatorAddress};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// Serialized signature length: r (32) || s (32) || v (1).
pub const SIGNATURE_LEN: usize = 65;

/// secp256k1 curve order n
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// floor(n/2), upper bound (inclusive) for S.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Recoverable secp256k1 signature (`r || s || v`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecoverableSignature {
    /// R component
    pub r: [u8; 32],
    /// S component (low half)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27 or 28)
    pub v: u8,
}

impl RecoverableSignature {
    /// Parse from 65 raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(CryptoError::InvalidSignatureLength {
                expected: SIGNATURE_LEN,
                actual: bytes.len(),
            });
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v: bytes[64] })
    }

    /// Serialize to 65 raw bytes.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

/// secp256k1 keypair held by a validator.
pub struct ValidatorKeyPair {
    signing_key: SigningKey,
}

impl ValidatorKeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Validator identity (20 bytes).
    pub fn address(&self) -> ValidatorAddress {
        address_from_pubkey(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte prehash, returning a low-S recoverable signature with
    /// `v` in {27, 28}.
    pub fn sign_prehash(&self, prehash: &Hash) -> Result<RecoverableSignature, CryptoError> {
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(prehash)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        // Flipping s to n - s mirrors R, which flips the y parity.
        let (sig, recid) = match sig.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced()),
            ),
            None => (sig, recid),
        };

        let bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(RecoverableSignature {
            r,
            s,
            v: recid.to_byte() + 27,
        })
    }
}

/// Recover the signer identity of `prehash`.
///
/// Validation order:
/// 1. R and S in [1, n-1]
/// 2. S in the lower half (EIP-2)
/// 3. v in {0, 1, 27, 28}
/// 4. public key recovery
pub fn recover_address(
    prehash: &Hash,
    signature: &RecoverableSignature,
) -> Result<ValidatorAddress, CryptoError> {
    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(CryptoError::InvalidSignatureFormat);
    }
    if !is_low_s(&signature.s) {
        return Err(CryptoError::MalleableSignature);
    }

    let recovery_id = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);
    let sig = Signature::from_slice(&sig_bytes).map_err(|_| CryptoError::InvalidSignatureFormat);
    sig_bytes.zeroize();
    let sig = sig?;

    let recovered = VerifyingKey::recover_from_prehash(prehash, &sig, recovery_id)
        .map_err(|_| CryptoError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered))
}

/// Derive the 20-byte identity from a public key.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> ValidatorAddress {
    let encoded = public_key.to_encoded_point(false);
    // Skip the 0x04 uncompressed prefix.
    let hash = keccak256(&encoded.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Constant-time `s <= n/2`.
fn is_low_s(s: &[u8; 32]) -> bool {
    (!ct_less_than(&SECP256K1_HALF_ORDER, s)).into()
}

/// Constant-time `0 < scalar < n`.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }
    (!is_zero & ct_less_than(scalar, &SECP256K1_ORDER)).into()
}

/// Big-endian `a < b` without early exit.
fn ct_less_than(a: &[u8; 32], b: &[u8; 32]) -> Choice {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let not_decided = !(less | greater);
        less |= not_decided & Choice::from((a[i] < b[i]) as u8);
        greater |= not_decided & Choice::from((a[i] > b[i]) as u8);
    }

    less
}

/// Valid v values: 0, 1, 27, 28
fn parse_recovery_id(v: u8) -> Result<RecoveryId, CryptoError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(CryptoError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| CryptoError::InvalidRecoveryId(v))
}

/// `n - s`, used to build malleated signatures in tests.
pub fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;

    for i in (0..32).rev() {
        let diff = (SECP256K1_ORDER[i] as i32) - (s[i] as i32) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }

    result
}
