//! Types making up the allowlist signature bundle artifact

use std::collections::BTreeMap;

use alloy::primitives::{Address, Bytes};
use serde::{
    de::{self, Deserializer},
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};

/// A single signed claim on one allowlist spot.
///
/// The signature is the issuer's EIP-191 personal signature over the
/// (address, spot) payload hash; the spot id is globally unique across the
/// whole bundle and redeemable exactly once on-chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimTicket {
    /// The 65-byte `r || s || v` signature, hex-encoded in the artifact
    pub signature: Bytes,
    /// The globally unique claim spot this ticket redeems
    #[serde(rename = "spotId")]
    pub spot_id: u64,
}

/// The full address → tickets mapping produced by one issuance run.
///
/// Serialized as a JSON object whose keys are EIP-55 checksummed addresses,
/// the casing the minting frontend & tests look addresses up under.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignatureBundle(BTreeMap<Address, Vec<ClaimTicket>>);

impl SignatureBundle {
    /// Constructs an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the bundle already holds tickets for the given address
    pub fn contains(&self, address: &Address) -> bool {
        self.0.contains_key(address)
    }

    /// Associates the ordered tickets with the given address, returning the
    /// previously held tickets if any
    pub fn insert(
        &mut self,
        address: Address,
        tickets: Vec<ClaimTicket>,
    ) -> Option<Vec<ClaimTicket>> {
        self.0.insert(address, tickets)
    }

    /// The tickets held by the given address
    pub fn tickets(&self, address: &Address) -> Option<&[ClaimTicket]> {
        self.0.get(address).map(Vec::as_slice)
    }

    /// Iterates over (address, tickets) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &Vec<ClaimTicket>)> {
        self.0.iter()
    }

    /// The number of addresses holding tickets
    pub fn num_addresses(&self) -> usize {
        self.0.len()
    }

    /// The total number of tickets across all addresses
    pub fn num_tickets(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// All spot ids in the bundle, in ascending order
    pub fn spot_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .0
            .values()
            .flat_map(|tickets| tickets.iter().map(|t| t.spot_id))
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Whether the bundle holds no tickets at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SignatureBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (address, tickets) in &self.0 {
            map.serialize_entry(&address.to_checksum(None), tickets)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SignatureBundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: BTreeMap<String, Vec<ClaimTicket>> = BTreeMap::deserialize(deserializer)?;
        let mut inner = BTreeMap::new();
        for (key, tickets) in raw {
            let address: Address = key.parse().map_err(de::Error::custom)?;
            inner.insert(address, tickets);
        }
        Ok(Self(inner))
    }
}
