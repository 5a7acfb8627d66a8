pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::animal;
pub use domain::treatment;
pub use domain::vet;
pub use outbound::repositories;
