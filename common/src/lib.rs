//! Types and state machines shared by the dashboard backend and the browser app.
//!
//! Nothing in this crate performs I/O. The backend and the frontend feed it the
//! responses they receive from the hosted Morph service and act on the requests
//! it hands back.

pub mod cell;
pub mod columns;
pub mod debounce;
pub mod model;
pub mod nav;
pub mod registry;
pub mod requests;
pub mod table;
