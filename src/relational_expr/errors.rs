use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FlattenError {
    #[error("Subquery '{0}' has no projection to flatten.")]
    EmptyProjection(String),

    #[error("Reference into '{alias}' is nested {depth} levels deep (max {max}).")]
    LiftDepthExceeded {
        alias: String,
        depth: usize,
        max: u32,
    },
}
