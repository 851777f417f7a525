/// Arguments for the `lookup` binary.
pub mod args;

/// Arrows over JSON values, in optional and fallible flavors.
pub mod arrows;

/// Main logic of the `lookup` binary.
pub mod binary_logic;
