use crate::techniques::Technique;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};

/// One candidate solution: a raw technique id per county index. Assignments
/// are created fresh by the optimization engine for every evaluation and
/// carry no state of their own; all validation happens when they are
/// evaluated against a map.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub technique_ids: Vec<u8>,
}

impl Assignment {
    pub fn new(technique_ids: Vec<u8>) -> Self {
        Self { technique_ids }
    }

    pub fn len(&self) -> usize {
        self.technique_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technique_ids.is_empty()
    }

    /// The validated technique for a county index.
    pub fn technique(&self, county: usize) -> Result<Technique> {
        let id = *self
            .technique_ids
            .get(county)
            .ok_or_else(|| anyhow!("County index {} out of range", county))?;
        Technique::from_id(id)
    }
}

impl TryFrom<Map<String, Value>> for Assignment {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}
