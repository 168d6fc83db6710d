use serde::{Deserialize, Serialize};

/// A bin definition: a container the service may pack items into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinInput {
    /// Optional caller-assigned identifier, echoed back in results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Width
    pub w: f64,
    /// Height
    pub h: f64,
    /// Depth
    pub d: f64,
}

impl BinInput {
    /// Create a bin with the given dimensions
    pub fn new(w: f64, h: f64, d: f64) -> Self {
        Self { id: None, w, h, d }
    }

    /// Attach an identifier to this bin
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// An item definition: a unit to be placed, with a requested quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInput {
    /// Optional caller-assigned identifier, echoed back in placements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Width
    pub w: f64,
    /// Height
    pub h: f64,
    /// Depth
    pub d: f64,
    /// How many copies of this item to pack
    pub quantity: u32,
}

impl ItemInput {
    /// Create an item with the given dimensions and quantity
    pub fn new(w: f64, h: f64, d: f64, quantity: u32) -> Self {
        Self {
            id: None,
            w,
            h,
            d,
            quantity,
        }
    }

    /// Attach an identifier to this item
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Optimization goal for a packing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Objective {
    /// Use as few bins as possible
    MinBins,
    /// Favor computation speed over packing quality
    Fast,
}

/// Request body for the pack endpoint
///
/// The service rejects an empty `items` list; the client does not validate
/// request contents before sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackRequest {
    /// Available bin definitions
    pub bins: Vec<BinInput>,
    /// Items to place
    pub items: Vec<ItemInput>,
    /// Optimization goal
    pub objective: Objective,
}

/// One placed item instance inside a bin
///
/// `w`/`h`/`d` are the placed extents, so they encode the orientation the
/// packer chose for this instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Identifier of the item this instance came from, if the item had one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    /// Position along the bin's width axis
    pub x: f64,
    /// Position along the bin's height axis
    pub y: f64,
    /// Position along the bin's depth axis
    pub z: f64,
    /// Placed width
    pub w: f64,
    /// Placed height
    pub h: f64,
    /// Placed depth
    pub d: f64,
}

/// One packed bin in a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinResult {
    /// Identifier of the bin definition this bin was created from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Width
    pub w: f64,
    /// Height
    pub h: f64,
    /// Depth
    pub d: f64,
    /// Placements in the order the packer produced them
    pub placements: Vec<Placement>,
}

/// Summary counters for a packing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackStats {
    /// Total item instances in the request
    pub items: u32,
    /// Instances the packer placed
    pub placed: u32,
    /// Instances that did not fit
    pub unplaced: u32,
    /// Number of bins used
    pub bins_used: u32,
    /// Server-side computation time in milliseconds
    pub duration_ms: u64,
}

/// Response body from the pack endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackResponse {
    /// Packed bins
    pub bins: Vec<BinResult>,
    /// Items (with remaining quantities) that could not be placed
    pub unplaced: Vec<ItemInput>,
    /// Run summary
    pub stats: PackStats,
}

/// Error body the service returns on non-success statuses
///
/// Every field is optional so a failure body that deviates from the schema
/// still parses as far as it can.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: Option<ErrorDetail>,
}

/// Code and message of a service error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. "INVALID_INPUT")
    pub code: Option<String>,
    /// Human-readable description
    pub message: Option<String>,
}
