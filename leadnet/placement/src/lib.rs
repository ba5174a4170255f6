//! Placement resolver: maps a service name to the node currently hosting one
//! of its pods, plus the node-IP adaptor used to reconcile identity with a
//! `NetworkMatrix` keyed by IP.

pub mod resolver;

pub use resolver::PlacementResolver;
