//! Issuance & verification of per-address, per-spot allowlist signatures
//!
//! Each allowlisted address receives a fixed number of claim spots, indexed
//! by a single counter running across the whole roster in roster order. The
//! signed message for a spot is `keccak256(address || spot_id)` with the spot
//! id encoded as a 256-bit big-endian integer, matching the contract's
//! on-chain reconstruction of the digest.

use alloy::{
    primitives::{eip191_hash_message, keccak256, Address, B256, U256},
    signers::{local::PrivateKeySigner, Signature, SignerSync},
};

use crate::{
    errors::AllowlistError,
    types::{ClaimTicket, SignatureBundle},
};

/// The length of an encoded `r || s || v` ECDSA signature
const SIGNATURE_LEN: usize = 65;

/// Compute the digest signed for one (address, spot) pair
///
/// This is `keccak256(address_bytes || spot_id_as_uint256)`, the fixed-order,
/// fixed-type hash the verifying contract recomputes from its call arguments.
pub fn payload_hash(address: Address, spot_id: u64) -> B256 {
    let spot_bytes = U256::from(spot_id).to_be_bytes::<{ U256::BYTES }>();
    let payload = [address.as_slice(), spot_bytes.as_slice()].concat();
    keccak256(&payload)
}

/// Issue a signature bundle for the given roster.
///
/// Spot ids are assigned from a counter starting at 0 and running across the
/// entire roster in roster order, so no two tickets anywhere in the bundle
/// share a spot. Signing is deterministic ECDSA; re-running with the same
/// roster, spot count, & key reproduces the bundle byte-for-byte.
pub fn issue_bundle(
    signer: &PrivateKeySigner,
    roster: &[Address],
    spots_per_address: u64,
) -> Result<SignatureBundle, AllowlistError> {
    if roster.is_empty() {
        return Err(AllowlistError::EmptyRoster);
    }
    if spots_per_address == 0 {
        return Err(AllowlistError::InvalidSpotCount);
    }

    let mut bundle = SignatureBundle::new();
    let mut spot_id = 0_u64;

    for address in roster {
        // A duplicate entry would silently replace the earlier tickets,
        // stranding their spots
        if bundle.contains(address) {
            return Err(AllowlistError::DuplicateAddress(*address));
        }

        let mut tickets = Vec::with_capacity(spots_per_address as usize);
        for _ in 0..spots_per_address {
            let digest = payload_hash(*address, spot_id);

            // Sign the raw 32 hash bytes as an EIP-191 personal message
            let signature = signer
                .sign_message_sync(digest.as_slice())
                .map_err(|e| AllowlistError::Signing(e.to_string()))?;

            tickets.push(ClaimTicket {
                signature: signature.as_bytes().to_vec().into(),
                spot_id,
            });
            spot_id += 1;
        }

        bundle.insert(*address, tickets);
    }

    Ok(bundle)
}

/// Verify a ticket against the claiming address and the configured issuer.
///
/// Recomputes the (address, spot) digest, recovers the signer from the
/// ticket's signature, and accepts only if it matches the issuer. This is the
/// off-chain mirror of the contract's presale check; spot-uniqueness is
/// enforced by the contract's own claimed-spot state.
pub fn verify_ticket(
    address: Address,
    ticket: &ClaimTicket,
    issuer: Address,
) -> Result<bool, AllowlistError> {
    let digest = eip191_hash_message(payload_hash(address, ticket.spot_id));

    let sig_bytes: &[u8] = ticket.signature.as_ref();
    if sig_bytes.len() != SIGNATURE_LEN {
        return Err(AllowlistError::MalformedSignature(format!(
            "expected {} bytes, got {}",
            SIGNATURE_LEN,
            sig_bytes.len()
        )));
    }

    // Normalize the recovery ID: 27/28 for legacy signatures, 0/1 otherwise
    let parity = match sig_bytes[SIGNATURE_LEN - 1] {
        27 | 0 => false,
        28 | 1 => true,
        v => {
            return Err(AllowlistError::MalformedSignature(format!(
                "invalid recovery ID: {v}"
            )))
        }
    };
    let signature = Signature::from_bytes_and_parity(&sig_bytes[..SIGNATURE_LEN - 1], parity);

    let recovered = signature
        .recover_address_from_prehash(&digest)
        .map_err(|e| AllowlistError::Signing(e.to_string()))?;

    Ok(recovered == issuer)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The number of spots per address used across the tests
    const SPOTS: u64 = 3;

    /// Generate a roster of `n` random addresses
    fn random_roster(n: usize) -> Vec<Address> {
        (0..n).map(|_| Address::random()).collect()
    }

    #[test]
    fn test_issue_and_verify() {
        let signer = PrivateKeySigner::random();
        let issuer = signer.address();
        let roster = random_roster(3);

        let bundle = issue_bundle(&signer, &roster, SPOTS).expect("failed to issue bundle");

        for address in &roster {
            for ticket in bundle.tickets(address).unwrap() {
                assert!(
                    verify_ticket(*address, ticket, issuer).unwrap(),
                    "ticket for ({}, {}) did not recover the issuer",
                    address,
                    ticket.spot_id
                );
            }
        }
    }

    #[test]
    fn test_spot_assignment_follows_roster_order() {
        let signer = PrivateKeySigner::random();
        let roster = random_roster(3);

        let bundle = issue_bundle(&signer, &roster, SPOTS).unwrap();

        // First address gets {0,1,2}, second {3,4,5}, third {6,7,8}
        for (i, address) in roster.iter().enumerate() {
            let spots: Vec<u64> = bundle
                .tickets(address)
                .unwrap()
                .iter()
                .map(|t| t.spot_id)
                .collect();
            let expected: Vec<u64> = (0..SPOTS).map(|j| i as u64 * SPOTS + j).collect();
            assert_eq!(spots, expected);
        }
    }

    #[test]
    fn test_spots_globally_unique_and_contiguous() {
        let signer = PrivateKeySigner::random();
        let roster = random_roster(5);

        let bundle = issue_bundle(&signer, &roster, SPOTS).unwrap();
        let total = roster.len() as u64 * SPOTS;

        assert_eq!(bundle.num_tickets() as u64, total);
        // Sorted spot ids must exactly cover [0, total)
        assert_eq!(bundle.spot_ids(), (0..total).collect::<Vec<u64>>());
    }

    #[test]
    fn test_issuance_is_deterministic() {
        let signer = PrivateKeySigner::random();
        let roster = random_roster(2);

        let first = issue_bundle(&signer, &roster, SPOTS).unwrap();
        let second = issue_bundle(&signer, &roster, SPOTS).unwrap();

        assert_eq!(first, second, "re-issuance changed signature bytes");
    }

    #[test]
    fn test_cross_address_replay_rejected() {
        let signer = PrivateKeySigner::random();
        let issuer = signer.address();
        let roster = random_roster(2);

        let bundle = issue_bundle(&signer, &roster, SPOTS).unwrap();

        // A ticket issued to the first address must not verify for the second
        let stolen = &bundle.tickets(&roster[0]).unwrap()[0];
        assert!(!verify_ticket(roster[1], stolen, issuer).unwrap());
    }

    #[test]
    fn test_wrong_spot_rejected() {
        let signer = PrivateKeySigner::random();
        let issuer = signer.address();
        let roster = random_roster(1);

        let bundle = issue_bundle(&signer, &roster, SPOTS).unwrap();

        // Re-binding a valid signature to a different spot must fail
        let mut ticket = bundle.tickets(&roster[0]).unwrap()[0].clone();
        ticket.spot_id += 1;
        assert!(!verify_ticket(roster[0], &ticket, issuer).unwrap());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let signer = PrivateKeySigner::random();
        let roster = random_roster(1);

        let bundle = issue_bundle(&signer, &roster, SPOTS).unwrap();
        let ticket = &bundle.tickets(&roster[0]).unwrap()[0];

        let other_issuer = PrivateKeySigner::random().address();
        assert!(!verify_ticket(roster[0], ticket, other_issuer).unwrap());
    }

    #[test]
    fn test_invalid_configurations_rejected() {
        let signer = PrivateKeySigner::random();

        assert!(matches!(
            issue_bundle(&signer, &[], SPOTS),
            Err(AllowlistError::EmptyRoster)
        ));

        let roster = random_roster(1);
        assert!(matches!(
            issue_bundle(&signer, &roster, 0),
            Err(AllowlistError::InvalidSpotCount)
        ));

        let duplicated = vec![roster[0], roster[0]];
        assert!(matches!(
            issue_bundle(&signer, &duplicated, SPOTS),
            Err(AllowlistError::DuplicateAddress(_))
        ));
    }

    #[test]
    fn test_malformed_signature_rejected() {
        let issuer = PrivateKeySigner::random().address();
        let address = Address::random();

        let truncated = ClaimTicket {
            signature: vec![0_u8; 64].into(),
            spot_id: 0,
        };
        assert!(matches!(
            verify_ticket(address, &truncated, issuer),
            Err(AllowlistError::MalformedSignature(_))
        ));

        let mut bad_v = vec![0_u8; 65];
        bad_v[64] = 29;
        let bad_v_ticket = ClaimTicket {
            signature: bad_v.into(),
            spot_id: 0,
        };
        assert!(matches!(
            verify_ticket(address, &bad_v_ticket, issuer),
            Err(AllowlistError::MalformedSignature(_))
        ));
    }
}
