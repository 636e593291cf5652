/// Collapse step selecting and fixing one cell
pub mod collapse;
/// Entropy policies and boundary scanning
pub mod entropy;
/// Generation driver and run configuration
pub mod executor;
/// Constraint propagation sweep
pub mod propagation;
/// Resolution policies for collapsed cells
pub mod resolution;
