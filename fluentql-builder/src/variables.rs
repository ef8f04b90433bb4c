//! Variables payload.

use serde_json::{Map, Value};
use tracing::trace;

use crate::format::to_camel_case;
use crate::parameter::ParameterTable;

impl ParameterTable {
    /// Project bound variables into the JSON object sent as GraphQL `variables`.
    ///
    /// Keys are camelCased; values are passed through untouched. Variables
    /// with no value are left out.
    pub fn to_variables(&self) -> Map<String, Value> {
        let mut payload = Map::with_capacity(self.len());
        for parameter in self.iter() {
            if !parameter.has_value() {
                trace!(variable = parameter.name(), "Omitting null variable from payload");
                continue;
            }
            payload.insert(to_camel_case(parameter.name()), parameter.value().clone());
        }
        payload
    }
}
