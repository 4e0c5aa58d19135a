use super::Db;
use crate::{provider::Memory, Provider, Result};

use autoproject_core::schema::{self, ModelBuilder};

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    schema: schema::Builder,

    /// Defaults to [`Memory`]
    provider: Option<Arc<dyn Provider>>,
}

impl Builder {
    /// Register a model. Models receive IDs in registration order.
    pub fn model(&mut self, model: ModelBuilder) -> &mut Self {
        self.schema = std::mem::take(&mut self.schema).model(model);
        self
    }

    pub fn provider(&mut self, provider: impl Provider) -> &mut Self {
        let provider: Arc<dyn Provider> = Arc::new(provider);
        self.provider = Some(provider);
        self
    }

    pub fn build(&mut self) -> Result<Db> {
        let schema = std::mem::take(&mut self.schema).build()?;
        let provider: Arc<dyn Provider> = match self.provider.take() {
            Some(provider) => provider,
            None => Arc::new(Memory::new()),
        };

        Ok(Db {
            schema: Arc::new(schema),
            provider,
        })
    }
}
