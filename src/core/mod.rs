pub mod fetcher;
pub mod form;
pub mod validator;

pub use crate::domain::model::{Alert, Fact, Month, RequestState, ValidDay};
pub use crate::domain::ports::{ConfigProvider, FactSource};
pub use crate::utils::error::Result;
