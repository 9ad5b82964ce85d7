/// Bug tracking domain layer
///
/// Pure business logic: bug models, ordering and classification policies,
/// and display derivations. Nothing in this layer talks to the network.
pub mod domain;
pub mod policies;
