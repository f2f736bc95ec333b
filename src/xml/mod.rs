pub mod decode;
pub mod value;

pub use decode::{decode, DecodeError};
pub use value::XmlValue;
