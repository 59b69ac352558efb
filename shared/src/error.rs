use crate::shadow::{Field, LayerId, ShadowProperty};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShadowError {
    #[error("shadow layer {0} does not exist")]
    LayerNotFound(LayerId),
    #[error("{property} {field} does not accept this kind of value")]
    ValueKindMismatch {
        property: ShadowProperty,
        field: Field,
    },
    #[error("invalid editor config: {0}")]
    Config(String),
}
