//! Partial-update (patch) document
//!
//! A JSON-Patch-like model restricted to the patchable view of a device:
//! `name`, `brand`, and `state`. Operation kinds form a closed set; paths
//! are validated against an explicit deny-list of read-only fields rather
//! than inspecting field metadata at runtime.

use crate::constants::FORBIDDEN_PATCH_PATHS;
use crate::entities::Device;
use crate::error::{Error, Result};
use crate::value_objects::DeviceState;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Patch operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    /// Set the target field (same as replace for scalar members)
    Add,
    /// Set the target field
    Replace,
    /// Clear the target field from the view; the entity keeps its value
    Remove,
    /// Assert the target field currently equals the given value
    Test,
}

/// A single patch operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    /// Operation kind
    pub op: PatchOp,
    /// Target path, e.g. `/name`
    pub path: String,
    /// Operand for add/replace/test; absent for remove
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// An ordered sequence of patch operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument {
    /// Operations, applied in order
    pub operations: Vec<PatchOperation>,
}

impl PatchDocument {
    /// Create a document from a list of operations
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        Self { operations }
    }

    /// Reject the document if any operation targets a read-only field.
    ///
    /// Paths are compared case-insensitively as substrings, so `/Id` and
    /// `/rowVersion` are caught regardless of casing. The whole document is
    /// rejected before any operation is applied.
    pub fn ensure_patchable(&self) -> Result<()> {
        for operation in &self.operations {
            let path = operation.path.to_lowercase();
            if FORBIDDEN_PATCH_PATHS.iter().any(|p| path.contains(p)) {
                return Err(Error::invalid_patch(format!(
                    "Cannot patch field '{}'. This field is read-only.",
                    operation.path
                )));
            }
        }
        Ok(())
    }

    /// Apply the operations to a patchable view, in order.
    ///
    /// Standard patch semantics: an unknown path, a missing or ill-typed
    /// operand, or a failed `test` assertion fails the whole patch.
    pub fn apply_to(&self, view: &mut DevicePatch) -> Result<()> {
        for operation in &self.operations {
            view.apply(operation)?;
        }
        Ok(())
    }
}

/// The patchable view of a device: only `name`, `brand`, and `state`.
///
/// Initialized from the current entity; a field left as `Some` after
/// application carries the post-patch value, a field cleared to `None` (via
/// remove) leaves the entity untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePatch {
    /// Post-patch name, if defined by the view
    pub name: Option<String>,
    /// Post-patch brand, if defined by the view
    pub brand: Option<String>,
    /// Post-patch state, if defined by the view
    pub state: Option<DeviceState>,
}

impl DevicePatch {
    /// Build the view from the current entity
    pub fn from_device(device: &Device) -> Self {
        Self {
            name: Some(device.name.clone()),
            brand: Some(device.brand.clone()),
            state: Some(device.state),
        }
    }

    fn apply(&mut self, operation: &PatchOperation) -> Result<()> {
        match operation.path.to_lowercase().as_str() {
            "/name" => Self::apply_field(&mut self.name, operation),
            "/brand" => Self::apply_field(&mut self.brand, operation),
            "/state" => Self::apply_field(&mut self.state, operation),
            _ => Err(Error::invalid_patch(format!(
                "Unknown patch path '{}'",
                operation.path
            ))),
        }
    }

    fn apply_field<T>(field: &mut Option<T>, operation: &PatchOperation) -> Result<()>
    where
        T: Serialize + serde::de::DeserializeOwned,
    {
        match operation.op {
            PatchOp::Add | PatchOp::Replace => {
                let value = Self::operand(operation)?;
                *field = Some(serde_json::from_value(value.clone()).map_err(|e| {
                    Error::invalid_patch(format!(
                        "Invalid value for path '{}': {e}",
                        operation.path
                    ))
                })?);
                Ok(())
            }
            PatchOp::Remove => {
                *field = None;
                Ok(())
            }
            PatchOp::Test => {
                let expected = Self::operand(operation)?;
                let actual = serde_json::to_value(&*field)?;
                if actual == *expected {
                    Ok(())
                } else {
                    Err(Error::invalid_patch(format!(
                        "Test operation failed at path '{}'",
                        operation.path
                    )))
                }
            }
        }
    }

    fn operand(operation: &PatchOperation) -> Result<&Value> {
        operation.value.as_ref().ok_or_else(|| {
            Error::invalid_patch(format!(
                "Operation '{:?}' at path '{}' requires a value",
                operation.op, operation.path
            ))
        })
    }
}
