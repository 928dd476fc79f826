use num_bigint::BigInt;

/// x-coordinate of a share, the 1-based position in the share document
pub type Index = u64;

/// y-coordinate of a share and the type of the reconstructed secret
pub type Value = BigInt;
