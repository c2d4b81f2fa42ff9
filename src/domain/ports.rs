use crate::domain::model::{Fact, ValidDay};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn api_host(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch_fact(&self, day: ValidDay) -> Result<Fact>;
}
