//! Summary DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::SummaryStats;
use crate::domain::reservation::CourtUsage;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CanchaMasReservadaDto {
    pub nombre: String,
    pub cantidad: i64,
}

impl From<CourtUsage> for CanchaMasReservadaDto {
    fn from(u: CourtUsage) -> Self {
        Self {
            nombre: u.court_name,
            cantidad: u.reservations,
        }
    }
}

/// Aggregate report; `cancha_mas_reservada` is null when there are no
/// reservations yet.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResumenDto {
    pub total_canchas: u64,
    pub total_reservas: u64,
    pub cancha_mas_reservada: Option<CanchaMasReservadaDto>,
}

impl From<SummaryStats> for ResumenDto {
    fn from(s: SummaryStats) -> Self {
        Self {
            total_canchas: s.total_courts,
            total_reservas: s.total_reservations,
            cancha_mas_reservada: s.most_reserved.map(CanchaMasReservadaDto::from),
        }
    }
}
