//! Miscellaneous math functions for general use

/// Free functions for handling and converting between
/// different representations of angles.
pub mod angular;

/// Floating point comparison in units of the last place
pub mod ulp;
