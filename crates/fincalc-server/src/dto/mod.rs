//! Data Transfer Objects for API requests and responses.
//!
//! Requests validate themselves against [`Limits`]; responses round at
//! construction (2 dp for money, 6 dp for rates, 4 dp for bond prices).

pub mod bonds;
pub mod common;
pub mod mortgage;
pub mod system;
pub mod tvm;
pub mod xirr;

pub use bonds::*;
pub use common::*;
pub use mortgage::*;
pub use system::*;
pub use tvm::*;
pub use xirr::*;
