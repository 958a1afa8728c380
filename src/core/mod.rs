pub mod detect;
pub mod etl;
pub mod parse;
pub mod pipeline;
pub mod writer;

pub use crate::domain::events::ConversionEvent;
pub use crate::domain::model::{Dataset, Record, SourceFormat};
pub use crate::domain::ports::{Reporter, Storage};
pub use crate::utils::error::Result;
