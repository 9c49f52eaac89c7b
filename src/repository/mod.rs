pub mod camps;
pub mod participants;
pub mod users;

pub use camps::*;
pub use participants::*;
pub use users::*;

use crate::database::MongoDB;

/// Repositórios por collection, construídos uma vez no startup e injetados
/// nos handlers via web::Data (substitui handles globais capturados por closure).
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub camps: CampRepository,
    pub participants: ParticipantRepository,
}

impl Repositories {
    pub fn new(db: &MongoDB) -> Self {
        Self {
            users: UserRepository::new(db),
            camps: CampRepository::new(db),
            participants: ParticipantRepository::new(db),
        }
    }
}

/// E11000: violação de índice único no insert
pub fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(ref write_err))
            if write_err.code == 11000
    )
}
