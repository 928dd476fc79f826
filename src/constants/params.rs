/// Smallest supported positional base
pub const PARAM_MIN_BASE: u32 = 2;
/// Largest supported positional base, `0-9` followed by `a-z`
pub const PARAM_MAX_BASE: u32 = 36;

/// Base used when writing share documents if none is requested
pub const PARAM_DEFAULT_BASE: u32 = 10;

/// Default bit size bound for the random coefficients of a split polynomial
pub const PARAM_DEFAULT_COEFFICIENT_BITS: u64 = 64;

/// Number of missing share indices named in the loader warning before it only reports the count
pub const PARAM_MAX_LISTED_MISSING: usize = 16;
