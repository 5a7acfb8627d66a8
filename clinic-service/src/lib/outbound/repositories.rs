use mongodb::error::ErrorKind;
use mongodb::error::WriteFailure;

pub mod animal;
pub mod treatment;
pub mod vet;

pub use animal::MongoAnimalRepository;
pub use treatment::MongoTreatmentRepository;
pub use vet::MongoVetRepository;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// True when a write was rejected by a unique index.
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}
