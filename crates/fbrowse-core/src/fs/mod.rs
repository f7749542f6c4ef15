//! File system abstractions for fbrowse.
//!
//! [`entry::DirectoryEntry`] is the listed unit, [`path`] resolves and
//! validates user-typed paths, [`ops`] lists directories and performs the
//! create / delete / rename / copy / move primitives, and [`open`] hands
//! files to the host's default application.

pub mod entry;
pub mod open;
pub mod ops;
pub mod path;

pub use entry::DirectoryEntry;
pub use ops::CancelToken;
