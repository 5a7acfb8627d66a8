pub mod animal;
pub mod treatment;
pub mod vet;
