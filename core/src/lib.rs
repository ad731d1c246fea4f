//! # ipconv-core
//!
//! Conversion and validation core for IPv4 address representations.
//!
//! An IPv4 address can be written as a decimal integer (`3232235777`), a
//! dotted-quad (`192.168.1.1`) or a hexadecimal string (`c0a80101`). This
//! crate parses, validates and re-renders values between those forms, with
//! optional byte-order reversal, and provides the [`Converter`] that keeps a
//! set of linked display fields synchronized.

pub mod codec;
pub mod coordinator;
pub mod error;
pub mod filters;
pub mod patterns;
pub mod repr;

pub use coordinator::{Converter, ValueSink};
pub use error::CodecError;
pub use repr::AddressKind;
