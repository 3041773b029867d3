//! Request signature computation.
//!
//! Every outbound gateway request carries a `signature` field: the lowercase
//! hexadecimal SHA-256 digest of the request's contract-defined fields, joined
//! with commas, with the merchant's secret key as the final element. The gateway
//! recomputes the same digest on its side and rejects requests that do not match,
//! so the field order and the join behavior here must stay bit-exact.
//!
//! The join performs no escaping. A field value that itself contains a comma
//! produces a digest the gateway cannot distinguish from a different field
//! split. This is a documented constraint of the gateway's protocol and must
//! not be "fixed" locally.

use sha2::{Digest, Sha256};

/// Computes the gateway signature for an ordered list of request fields.
///
/// The function is pure: the same input list always yields the same output.
/// Callers never pass the secret key themselves; [`FawryClient`](crate::client::FawryClient)
/// appends it as the last element before calling this.
///
/// # Arguments
///
/// * `fields` - The request fields in the gateway's documented order, secret key last
///
/// # Examples
///
/// ```
/// use fawry_rs::signature::compute;
///
/// let sig = compute(&["M1", "R1", "S"]);
/// assert_eq!(
///     sig,
///     "7b1c08d28967f300eade249da386599869d97a5b0fdf554819bc7437f0863e1b"
/// );
/// ```
pub fn compute(fields: &[&str]) -> String {
    let joined = fields.join(",");
    let digest = Sha256::digest(joined.as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let fields = ["MERCH001", "REF-100", "CUST-7", "CARD", "100.00", "tok_abc", "secret"];
        assert_eq!(compute(&fields), compute(&fields));
    }

    #[test]
    fn test_known_digest() {
        // SHA-256 of the byte string "M1,R1,S"
        assert_eq!(
            compute(&["M1", "R1", "S"]),
            "7b1c08d28967f300eade249da386599869d97a5b0fdf554819bc7437f0863e1b"
        );
    }

    #[test]
    fn test_single_field_no_separator() {
        // SHA-256 of "a" with no comma appended
        assert_eq!(
            compute(&["a"]),
            "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb"
        );
    }

    #[test]
    fn test_comma_join() {
        // SHA-256 of "a,b,c"
        assert_eq!(
            compute(&["a", "b", "c"]),
            "205830ca5b23bbe39ab510cfddc1dff2d9842e38b5fa7b7c48cd4ca7e44f92a1"
        );
    }

    #[test]
    fn test_field_change_changes_digest() {
        let base = compute(&["M1", "R1", "S"]);
        assert_ne!(base, compute(&["M2", "R1", "S"]));
        assert_ne!(base, compute(&["M1", "R2", "S"]));
        assert_ne!(base, compute(&["M1", "R1", "T"]));
    }

    #[test]
    fn test_field_order_matters() {
        assert_ne!(compute(&["M1", "R1", "S"]), compute(&["R1", "M1", "S"]));
        // Also pin the swapped digest so a join-order regression is caught exactly
        assert_eq!(
            compute(&["R1", "M1", "S"]),
            "3350bb8e232373d0f6c18160be8b584867b951e6dc70e7fc60b9df3126bbe8df"
        );
    }

    #[test]
    fn test_empty_field_still_joined() {
        // An empty field contributes an empty segment between two commas; it must
        // not be dropped from the join.
        assert_ne!(compute(&["a", "", "c"]), compute(&["a", "c"]));
    }

    #[test]
    fn test_lowercase_hex() {
        let sig = compute(&["M1", "R1", "S"]);
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
