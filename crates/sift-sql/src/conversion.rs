use sift_core::stmt::Value;

use crate::{mapping::FieldMapping, platform::Platform};

/// Conversion state that must survive past query execution.
///
/// Bundles the platform adapter, the parameter values at compile time and
/// the mappings flagged for result-time conversion. Attached to the query
/// as an out-of-band hint under [`WhereBuilder::HINT_KEY`] so a later
/// hydration stage can replay conversions whose behavior depends on the
/// final bound values or on driver-specific rendering.
///
/// [`WhereBuilder::HINT_KEY`]: crate::WhereBuilder::HINT_KEY
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionContext {
    platform: Platform,
    parameters: Vec<Value>,
    mappings: Vec<FieldMapping>,
}

impl ConversionContext {
    pub(crate) fn new(platform: Platform, parameters: Vec<Value>, mappings: Vec<FieldMapping>) -> Self {
        Self {
            platform,
            parameters,
            mappings,
        }
    }

    /// The platform the clause was generated against, including the values
    /// it inlined instead of binding.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// The bound parameter values, in placeholder order.
    pub fn parameters(&self) -> &[Value] {
        &self.parameters
    }

    /// The mappings whose values need a conversion replayed during
    /// hydration.
    pub fn mappings(&self) -> &[FieldMapping] {
        &self.mappings
    }
}
