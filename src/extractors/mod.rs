//! The five document extractors.
//!
//! Each extractor is a pure function from fetched document text to one
//! normalized token. They share the failure taxonomy in [`crate::error`]
//! and never fall back: if the wording a parser is keyed to disappears from
//! the live document, the whole verification fails. That fragility is part
//! of the contract, since the expected digest is keyed to these exact
//! extraction policies.

pub mod bitcoin;
pub mod isbn;
pub mod rfc;
pub mod unicode;
pub mod voyager;
