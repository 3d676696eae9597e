/// Marker trait for state objects: cloneable, comparable, and complete
/// enough to render the view without reaching elsewhere.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
