/*
[INPUT]:  Auth server schema and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod nonce;
pub mod requests;
pub mod responses;

pub use nonce::*;
pub use requests::*;
pub use responses::*;
