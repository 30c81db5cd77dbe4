//! Immutable JSON values with a canonical serializer and a strict parser.
//!
//! ```
//! use jsonval::{Json, Kind};
//!
//! let v = Json::parse(r#"[ null , false , true , 123 , "abc" ]"#).unwrap();
//! assert_eq!(v.size(), 5);
//! assert_eq!(v.at(3).kind(), Kind::Number);
//! assert_eq!(v.dump(), r#"[null, false, true, 123, "abc"]"#);
//! ```
//!
//! Values are cheap to clone: a [`Json`] is a handle to a shared node that is
//! never mutated after construction. Typed accessors never fail; asking a value
//! for the wrong kind yields `0`, `false`, `""` or an empty collection.

mod compare;
mod error;
mod formatter;
mod number;
mod parser;
mod value;

pub use error::{ErrorKind, ParseError};
pub use parser::{ParseOptions, Parser, DEFAULT_MAX_DEPTH};
pub use value::{Array, Index, Json, Kind, Object};
