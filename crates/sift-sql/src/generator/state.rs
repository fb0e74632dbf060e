use std::sync::Arc;

use sift_core::{stmt::SearchCondition, Error, Result, Runtime};

use crate::{conversion::ConversionContext, mapping::MappingRegistry};

use super::CompiledClause;

/// Shared generator state machine.
///
/// Two states: Open (mappings mutable, no clause yet) and Compiled
/// (mappings frozen, clause cached). The transition happens exactly once,
/// on the first successful compilation, and is irreversible.
#[derive(Debug)]
pub struct GeneratorState {
    condition: SearchCondition,
    registry: MappingRegistry,
    runtime: Arc<Runtime>,
    compiled: Option<CompiledClause>,
    context: Option<Arc<ConversionContext>>,
}

impl GeneratorState {
    pub fn new(condition: SearchCondition, runtime: Arc<Runtime>) -> Self {
        Self {
            condition,
            registry: MappingRegistry::new(),
            runtime,
            compiled: None,
            context: None,
        }
    }

    pub fn condition(&self) -> &SearchCondition {
        &self.condition
    }

    pub fn runtime(&self) -> &Arc<Runtime> {
        &self.runtime
    }

    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    /// The sole mutation gate. Every mapping-configuration entry point goes
    /// through here so the freeze is enforced in one place.
    pub fn registry_mut(&mut self) -> Result<&mut MappingRegistry> {
        if self.compiled.is_some() {
            return Err(Error::ConfigurationClosed);
        }
        Ok(&mut self.registry)
    }

    pub fn compiled(&self) -> Option<&CompiledClause> {
        self.compiled.as_ref()
    }

    /// Performs the one-way Open to Compiled transition. Compilation
    /// failures never reach this point, so a failed compile leaves the
    /// state Open and retryable.
    pub fn store(&mut self, clause: CompiledClause, context: ConversionContext) {
        debug_assert!(self.compiled.is_none());
        self.compiled = Some(clause);
        self.context = Some(Arc::new(context));
    }

    /// The conversion context captured at compile time.
    pub fn context(&self) -> Result<Arc<ConversionContext>> {
        self.context.clone().ok_or(Error::NotYetCompiled)
    }
}
