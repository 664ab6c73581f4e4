pub mod ids;
pub mod model;
pub mod violation;

// Re-export core types for convenience
pub use ids::VertexId;
pub use model::{Edge, GridError, GridSpec};
pub use violation::{CheckKind, Violation};
