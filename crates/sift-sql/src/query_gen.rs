use sift_core::{
    stmt::{Comparison, ConditionGroup, SearchCondition, Value},
    Connection, Result,
};

use crate::{mapping::FieldMapping, platform::Platform};

/// The output of clause generation: WHERE text and the values bound into
/// it, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedWhere {
    pub text: String,
    pub parameters: Vec<Value>,
}

/// Renders a search condition to SQL text using resolved field mappings.
///
/// Fields without a mapping are excluded from the output; a field bound to
/// several mapping targets matches any of them. An unconstrained condition
/// produces an empty string.
#[derive(Debug)]
pub struct QueryGenerator<'a> {
    connection: &'a Connection,
    platform: &'a mut Platform,
    mappings: &'a [FieldMapping],
    condition: &'a SearchCondition,
}

impl<'a> QueryGenerator<'a> {
    pub fn new(
        connection: &'a Connection,
        platform: &'a mut Platform,
        mappings: &'a [FieldMapping],
        condition: &'a SearchCondition,
    ) -> Self {
        Self {
            connection,
            platform,
            mappings,
            condition,
        }
    }

    pub fn generate(mut self) -> Result<GeneratedWhere> {
        debug_assert_eq!(self.platform.dialect(), self.connection.dialect());

        let condition = self.condition;
        let mut parameters = Vec::new();
        let text = self.group_sql(condition.root(), &mut parameters);

        Ok(GeneratedWhere { text, parameters })
    }

    fn group_sql(&mut self, group: &'a ConditionGroup, parameters: &mut Vec<Value>) -> String {
        let mappings = self.mappings;
        let mut parts = Vec::new();

        for (field, constraints) in group.fields() {
            let targets: Vec<&FieldMapping> =
                mappings.iter().filter(|m| m.field == field).collect();
            if targets.is_empty() {
                continue;
            }

            for comparison in constraints.comparisons() {
                let mut alternatives: Vec<String> = targets
                    .iter()
                    .map(|mapping| self.predicate_sql(mapping, comparison, parameters))
                    .collect();
                parts.push(if alternatives.len() == 1 {
                    alternatives.remove(0)
                } else {
                    format!("({})", alternatives.join(" OR "))
                });
            }
        }

        for sub in group.groups() {
            let sql = self.group_sql(sub, parameters);
            if !sql.is_empty() {
                parts.push(format!("({sql})"));
            }
        }

        parts.join(group.logical().as_sql())
    }

    fn predicate_sql(
        &mut self,
        mapping: &FieldMapping,
        comparison: &Comparison,
        parameters: &mut Vec<Value>,
    ) -> String {
        let mut sql = mapping.qualified_column();
        sql.push(' ');
        sql.push_str(comparison.op().as_sql());
        sql.push(' ');

        match comparison.value() {
            // Booleans are inlined through the platform; everything else is
            // bound.
            value @ Value::Bool(_) => sql.push_str(&self.platform.embed(value)),
            value => {
                parameters.push(value.clone());
                self.platform.push_placeholder(&mut sql, parameters.len());
            }
        }

        sql
    }
}
