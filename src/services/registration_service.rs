use mongodb::bson::oid::ObjectId;

use crate::models::{JoinCampRequest, Participant};
use crate::repository::Repositories;
use crate::utils::AppError;

/// Workflow de inscrição (join-camp), por (campId, participantEmail):
///
/// 1. Check: par já inscrito? -> AlreadyJoined, nenhuma escrita.
/// 2. Insert: grava o registro de participante. O índice único cobre a
///    corrida entre o check e o insert - um duplicate key também vira
///    AlreadyJoined.
/// 3. Increment: +1 no participant_count do camp. Escrita independente do
///    passo 2, sem transação: se falhar, o registro fica e o contador
///    sub-reporta em 1; nenhum rollback é tentado.
pub async fn join_camp(
    repos: &Repositories,
    request: JoinCampRequest,
) -> Result<Participant, AppError> {
    let camp_id = request.camp_id.clone();
    let email = request.participant_email.clone();

    // campId precisa ser um ObjectId válido antes de qualquer escrita
    ObjectId::parse_str(&camp_id).map_err(|_| AppError::InvalidId(camp_id.clone()))?;

    // 1. Check (fast path - o índice único é a autoridade)
    if repos.participants.exists(&camp_id, &email).await? {
        return Err(AppError::AlreadyJoined);
    }

    // 2. Insert
    let participant = Participant {
        id: None,
        camp_id: request.camp_id,
        participant_email: request.participant_email,
        extra: request.extra,
    };
    let created = repos.participants.insert(participant).await?;

    // 3. Increment (best-effort, fora de transação)
    if let Err(e) = repos.camps.increment_participant_count(&camp_id).await {
        log::warn!(
            "⚠️  Participant {} joined camp {} but count increment failed: {}",
            email,
            camp_id,
            e
        );
        return Err(e);
    }

    log::info!("✅ {} joined camp {}", email, camp_id);

    Ok(created)
}
