use crate::error::{BinSolverError, Result};
use crate::types::{BinInput, ItemInput, Objective, PackRequest};

/// Builder for constructing pack requests with a fluent API
///
/// Empty bin or item lists are allowed; the service validates them.
#[derive(Debug, Default)]
pub struct PackRequestBuilder {
    bins: Vec<BinInput>,
    items: Vec<ItemInput>,
    objective: Option<Objective>,
}

impl PackRequestBuilder {
    /// Create a new pack request builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bin definition
    ///
    /// # Example
    ///
    /// ```
    /// use binsolver_sdk::{BinInput, PackRequestBuilder};
    ///
    /// let builder = PackRequestBuilder::new()
    ///     .add_bin(BinInput::new(10.0, 10.0, 10.0));
    /// ```
    pub fn add_bin(mut self, bin: BinInput) -> Self {
        self.bins.push(bin);
        self
    }

    /// Add multiple bin definitions
    pub fn add_bins(mut self, bins: Vec<BinInput>) -> Self {
        self.bins.extend(bins);
        self
    }

    /// Add an item definition
    ///
    /// # Example
    ///
    /// ```
    /// use binsolver_sdk::{ItemInput, PackRequestBuilder};
    ///
    /// let builder = PackRequestBuilder::new()
    ///     .add_item(ItemInput::new(5.0, 5.0, 5.0, 2));
    /// ```
    pub fn add_item(mut self, item: ItemInput) -> Self {
        self.items.push(item);
        self
    }

    /// Add multiple item definitions
    pub fn add_items(mut self, items: Vec<ItemInput>) -> Self {
        self.items.extend(items);
        self
    }

    /// Set the optimization objective
    ///
    /// # Example
    ///
    /// ```
    /// use binsolver_sdk::{Objective, PackRequestBuilder};
    ///
    /// let builder = PackRequestBuilder::new()
    ///     .objective(Objective::MinBins);
    /// ```
    pub fn objective(mut self, objective: Objective) -> Self {
        self.objective = Some(objective);
        self
    }

    /// Build the pack request
    ///
    /// # Errors
    ///
    /// Returns an error if no objective has been set.
    pub fn build(self) -> Result<PackRequest> {
        let objective = self.objective.ok_or_else(|| {
            BinSolverError::InvalidRequest(
                "Objective (minBins/fast) must be set".to_string(),
            )
        })?;

        Ok(PackRequest {
            bins: self.bins,
            items: self.items,
            objective,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid_request() {
        let request = PackRequestBuilder::new()
            .add_bin(BinInput::new(10.0, 10.0, 10.0).with_id("box"))
            .add_item(ItemInput::new(5.0, 5.0, 5.0, 1))
            .add_item(ItemInput::new(2.0, 2.0, 2.0, 4))
            .objective(Objective::MinBins)
            .build()
            .unwrap();

        assert_eq!(request.bins.len(), 1);
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.objective, Objective::MinBins);
    }

    #[test]
    fn test_builder_no_objective() {
        let result = PackRequestBuilder::new()
            .add_bin(BinInput::new(10.0, 10.0, 10.0))
            .add_item(ItemInput::new(5.0, 5.0, 5.0, 1))
            .build();

        assert!(matches!(result, Err(BinSolverError::InvalidRequest(_))));
    }

    #[test]
    fn test_builder_allows_empty_items() {
        // Item-list validation is service-side, not client-side.
        let result = PackRequestBuilder::new()
            .add_bin(BinInput::new(10.0, 10.0, 10.0))
            .objective(Objective::Fast)
            .build();

        assert!(result.is_ok());
        assert!(result.unwrap().items.is_empty());
    }
}
