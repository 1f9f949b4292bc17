//! # rt
//!
//! Runtime support for generated codecs and dispatchers: the bit-packing
//! primitives, the multiplex seen-state and the N-message aggregator.
//! Generated modules reference these as `dbc_gen::rt::...`.

pub mod aggregator;
pub mod bits;
pub mod seen;

pub use aggregator::MessageAggregator;
pub use bits::{clamp_signed, clamp_unsigned, extract_bits, insert_bits, sign_extend, to_raw};
pub use seen::SeenSet;
