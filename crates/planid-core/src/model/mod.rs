//! Schema vocabulary carried by scan nodes: output attributes, their
//! types, and the literal values referenced by pushed filters.

mod attribute;
mod data_type;
pub(crate) mod value;

pub use attribute::{Attribute, AttributeId};
pub use data_type::DataType;
pub use value::Value;
