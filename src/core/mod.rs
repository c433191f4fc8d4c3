pub mod codec;
pub mod decode;
pub mod encode;

pub use crate::domain::model::{Body, EntityKind, EyeColor, Family, Person, PhysicalAttributes};
pub use crate::domain::ports::{ConfigProvider, WireFormat};
pub use crate::utils::error::Result;
pub use decode::FromJson;
pub use encode::ToJson;
