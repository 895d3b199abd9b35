//! formtpl — form template lookup.
//!
//! Given `--field=value` pairs, infers each value's type (date, phone, email
//! or text) and reports the stored form template those types satisfy. The
//! domain lives in [`formtpl_core`]; this crate adds the command-line glue
//! so that integration tests can drive it without spawning the binary.

pub mod cli;
