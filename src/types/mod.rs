//! # Type System
//!
//! Field type tags and owned values for the record codec:
//!
//! - [`StaticType`] / [`FieldType`]: schema-side type tags with fixed-width
//!   classification
//! - [`Value`]: owned typed value passed into encode and returned from decode

pub mod field_type;
pub mod value;

pub use field_type::{
    FieldType, StaticType, ADDRESS_WIDTH, MAX_INT_WIDTH, MAX_STATIC_FIELD_WIDTH,
};
pub use value::Value;
