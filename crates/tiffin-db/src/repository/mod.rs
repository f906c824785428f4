//! # Repository Module
//!
//! Repository implementations for the menu catalog and the order
//! ledger. Each repository holds a pool clone and implements the
//! matching `tiffin-core` contract; the catalog repository also
//! carries the admin CRUD surface.

pub mod catalog;
pub mod ledger;
