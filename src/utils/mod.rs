//! Pure helpers used by the directory service.
//!
//! - [`alias_synthesizer`] - Default alias derivation from the maximum key
//! - [`prefix_bound`] - Upper bound computation for prefix scans
//! - [`alias_validator`] - Caller-supplied alias rules
//! - [`target_validator`] - Redirect target URL checks

pub mod alias_synthesizer;
pub mod alias_validator;
pub mod prefix_bound;
pub mod target_validator;
