use std::sync::Arc;

use sift_core::{
    query::{Hint, QueryTarget},
    stmt::SearchCondition,
    Error, Result,
};

use crate::{
    conversion::ConversionContext,
    generator::{CompiledClause, ConditionGenerator, GeneratorState},
    mapping::{FieldMapping, FieldOptions, MappingRegistry},
    platform::Platform,
    query_gen::QueryGenerator,
};

/// Compiles a search condition into a parameterized WHERE clause and
/// attaches it to a caller-supplied query.
///
/// The target query is validated once, at construction: a finalized query
/// must support hint attachment, and an incremental builder must support
/// both incremental append and hint attachment. Mappings are configured
/// while the builder is Open; the first successful
/// [`compile_where_clause`] freezes them and caches the clause.
///
/// [`compile_where_clause`]: ConditionGenerator::compile_where_clause
#[derive(Debug)]
pub struct WhereBuilder {
    query: QueryTarget,
    state: GeneratorState,
}

impl WhereBuilder {
    /// Hint key under which the conversion context is registered on the
    /// query.
    pub const HINT_KEY: &'static str = "sift_sql.conversions";

    pub fn new(query: impl Into<QueryTarget>, condition: SearchCondition) -> Result<Self> {
        let query = query.into();
        let capability = query.capability();

        match &query {
            QueryTarget::Native(_) if capability.hint_attachment => {}
            QueryTarget::Builder(_) if capability.incremental_append => {
                if !capability.hint_attachment {
                    // Conversions are resolved per query, not per clause
                    // text, so a hint sink is mandatory.
                    return Err(Error::MissingCapability("hint attachment"));
                }
            }
            QueryTarget::Native(_) => {
                return Err(Error::UnsupportedQueryType(
                    "finalized query without hint support",
                ));
            }
            QueryTarget::Builder(_) => {
                return Err(Error::UnsupportedQueryType(
                    "builder without incremental append",
                ));
            }
        }

        let runtime = query.runtime().clone();
        Ok(Self {
            query,
            state: GeneratorState::new(condition, runtime),
        })
    }

    pub fn hint_key(&self) -> &'static str {
        Self::HINT_KEY
    }

    /// The mapping registry, for explicit lookups via
    /// [`MappingRegistry::resolve`].
    pub fn registry(&self) -> &MappingRegistry {
        self.state.registry()
    }

    pub fn query(&self) -> &QueryTarget {
        &self.query
    }

    pub fn into_query(self) -> QueryTarget {
        self.query
    }

    /// The conversion context captured by the first compilation. Fails with
    /// [`Error::NotYetCompiled`] before that point, when platform and
    /// parameters are still undefined.
    pub fn conversion_context(&self) -> Result<Arc<ConversionContext>> {
        self.state.context()
    }

    /// Compiles and caches the clause on first call; later calls reuse the
    /// cache. A compilation failure writes nothing, leaving the builder
    /// Open for a corrected retry.
    fn compile(&mut self) -> Result<()> {
        if self.state.compiled().is_some() {
            return Ok(());
        }

        let runtime = self.state.runtime().clone();
        let mut platform = Platform::for_connection(runtime.connection());
        let mappings: Vec<FieldMapping> = self
            .state
            .registry()
            .mappings()
            .into_iter()
            .cloned()
            .collect();

        let generated = QueryGenerator::new(
            runtime.connection(),
            &mut platform,
            &mappings,
            self.state.condition(),
        )
        .generate()?;

        let context = ConversionContext::new(
            platform,
            generated.parameters.clone(),
            self.state.registry().conversion_mappings(),
        );
        self.state.store(
            CompiledClause {
                text: generated.text,
                parameters: generated.parameters,
            },
            context,
        );
        Ok(())
    }
}

impl ConditionGenerator for WhereBuilder {
    fn set_default_scope(&mut self, entity: &str, alias: &str) -> Result<()> {
        self.state.registry_mut()?.set_default_scope(entity, alias);
        Ok(())
    }

    fn set_field(&mut self, name: &str, property: &str, options: FieldOptions) -> Result<()> {
        let runtime = self.state.runtime().clone();
        let field_set = self.state.condition().field_set().clone();
        self.state
            .registry_mut()?
            .set_field(runtime.schema(), &field_set, name, property, options)
    }

    fn compile_where_clause(&mut self, prepend: &str) -> Result<String> {
        self.compile()?;
        let clause = self.state.compiled().expect("clause was just compiled");

        if clause.text.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("{prepend}{}", clause.text))
        }
    }

    fn attach_to_query(&mut self, prepend: &str) -> Result<()> {
        self.compile()?;
        let clause = self.state.compiled().expect("clause was just compiled");
        if clause.text.is_empty() {
            return Ok(());
        }

        let text = clause.text.clone();
        let hint = Hint::from_arc(self.state.context()?);
        match &mut self.query {
            QueryTarget::Native(query) => {
                query.append_text(&format!("{prepend}{text}"));
            }
            // The builder composes conjunctions itself; no prepend needed.
            QueryTarget::Builder(builder) => builder.and_where(text),
        }
        self.query.set_hint(Self::HINT_KEY, hint);
        Ok(())
    }
}
