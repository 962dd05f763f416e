pub mod builder;
pub mod cost;
pub mod graph;
pub mod ignore;
pub mod ports;
pub mod registry;
pub mod semantic;
