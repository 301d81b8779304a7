//! Configuration errors for decoration features.

/// A feature configuration that cannot be placed.
///
/// Raised when the configuration is built, so that placement itself never
/// has to deal with a bad radius or an unresolved voxel name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// `max_radius` leaves no room above the minimum radius.
    #[error("max_radius must be greater than {min}, got {max_radius}")]
    RadiusTooSmall { max_radius: i64, min: u32 },

    /// `max_radius` would make a single placement scan unreasonably large.
    #[error("max_radius must not exceed {max}, got {max_radius}")]
    RadiusTooLarge { max_radius: i64, max: u32 },

    /// `amount_per_chunk` does not fit the signed field it is stored in.
    #[error("amount_per_chunk must not exceed {max}, got {amount}")]
    AmountTooLarge { amount: u64, max: u32 },

    /// `amount_per_chunk` was negative.
    #[error("amount_per_chunk must not be negative, got {0}")]
    NegativeAmount(i64),

    /// A voxel name did not resolve in the registry.
    #[error("unknown voxel type: {0}")]
    UnknownVoxel(String),
}
