use serde::{Deserialize, Serialize};

use crate::domain::Item;

/// Ordered collection of validated items from one source. This shape is also
/// the JSON snapshot format: a single array-valued field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub items: Vec<Item>,
}

impl Feed {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
