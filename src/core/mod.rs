pub mod cipher;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{DecodedMessage, Message, Shift};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Sink};
pub use crate::utils::error::Result;
