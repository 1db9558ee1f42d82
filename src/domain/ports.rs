use crate::domain::model::{DecodedMessage, Message, Shift};
use crate::utils::error::Result;

/// Destination for the rendered report. Production writes to stdout;
/// tests substitute an in-memory buffer.
pub trait Sink: Send + Sync {
    fn write_report(&self, report: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn message(&self) -> &str;
    fn shift(&self) -> Shift;
}

pub trait Pipeline: Send + Sync {
    fn source(&self) -> Result<Message>;
    fn transform(&self, message: Message) -> Result<DecodedMessage>;
    fn emit(&self, decoded: DecodedMessage) -> Result<String>;
}
