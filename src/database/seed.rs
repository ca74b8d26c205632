use sqlx::PgPool;
use tracing::info;

use crate::database::UnitOfWork;
use crate::error::Result;
use crate::models::disability::DisabilityCategory;
use crate::repositories::disability_repo;

const REFERENCE_DISABILITIES: [(DisabilityCategory, &str, i32); 16] = [
    (DisabilityCategory::Visual, "Baixa visão, dificuldade em enxergar a longa distância", 30),
    (DisabilityCategory::Visual, "Cegueira completa", 80),
    (DisabilityCategory::Visual, "Dificuldade em diferenciar cores", 20),
    (DisabilityCategory::Hearing, "Perda auditiva parcial em um ouvido", 25),
    (DisabilityCategory::Hearing, "Surdez total", 90),
    (DisabilityCategory::Hearing, "Sensibilidade a sons altos", 15),
    (DisabilityCategory::Physical, "Paralisia parcial nos membros inferiores", 60),
    (DisabilityCategory::Physical, "Dificuldade de mobilidade devido a esclerose", 75),
    (DisabilityCategory::Physical, "Limitação no movimento das articulações", 40),
    (DisabilityCategory::Intellectual, "Transtorno do espectro autista", 50),
    (DisabilityCategory::Intellectual, "Déficit de atenção e hiperatividade", 30),
    (DisabilityCategory::Intellectual, "Deficiência intelectual leve", 45),
    (DisabilityCategory::Psychosocial, "Transtorno de ansiedade", 25),
    (DisabilityCategory::Psychosocial, "Depressão grave", 70),
    (DisabilityCategory::Psychosocial, "Transtorno bipolar", 65),
    (DisabilityCategory::Psychosocial, "Transtorno de estresse pós-traumático (TEPT)", 60),
];

/// Inserts the reference disability catalogue. Rows already present (same
/// category and description) are left untouched, so this is safe on every boot.
pub async fn seed_reference_disabilities(pool: &PgPool) -> Result<u64> {
    let mut uow = UnitOfWork::begin(pool).await?;
    let mut inserted = 0;
    for (category, description, rate) in REFERENCE_DISABILITIES {
        if disability_repo::insert_if_absent(uow.conn(), category, description, rate).await? {
            inserted += 1;
        }
    }
    uow.commit().await?;

    info!(inserted, "Reference disabilities seeded");
    Ok(inserted)
}
