//! Paraíba do Sul: Santa Cecília pumping into the Light system (Santana,
//! Vigário, Nilo Peçanha, Fontes, Pereira Passos) and the Tocos/Lajes
//! transfers.
//!
//! Limits come from the ONS "Atualização de Séries Históricas de Vazões".

use super::codes::*;
use super::{ArtificialRule, StationRule};

/// Santa Cecília pumping bands (m³/s).
const PUMPING_LOWER: f64 = 190.0;
const PUMPING_MIDDLE: f64 = 205.0;
const PUMPING_UPPER: f64 = 250.0;

/// Daily-correlation factor for Santana natural flow.
const SANTANA_FACTOR: f64 = 0.997;

const TOCOS_TRANSFER: f64 = 25.0;
const VIGARIO_CAPACITY: f64 = 190.0;
const NILO_PECANHA_CAPACITY: f64 = 144.0;
const SIMPLICIO_LIMIT: f64 = 430.0;
const FONTES_THRESHOLD: f64 = 17.0;
const FONTES_EXTRA: f64 = 34.0;

/// Flow pumped at Santa Cecília for a given Paraíba do Sul flow.
pub fn santa_cecilia_pumping(q: f64) -> f64 {
    if q <= PUMPING_LOWER {
        q * 119.0 / 190.0
    } else if q <= PUMPING_MIDDLE {
        119.0
    } else if q <= PUMPING_UPPER {
        q - 90.0
    } else {
        160.0
    }
}

/// Simplício artificial flow from Anta artificial.
pub fn simplicio(anta: f64) -> f64 {
    if anta <= SIMPLICIO_LIMIT {
        (anta - 90.0).max(0.0)
    } else {
        340.0
    }
}

/// Fontes artificial flow.
pub fn fontes(lajes: f64, vigario: f64, nilo_pecanha: f64) -> f64 {
    if lajes < FONTES_THRESHOLD {
        lajes
    } else {
        FONTES_THRESHOLD + (vigario - nilo_pecanha).min(FONTES_EXTRA)
    }
}

pub fn rules() -> Vec<Box<dyn ArtificialRule>> {
    vec![
        StationRule::boxed(
            BOMBEAMENTO_SANTA_CECILIA,
            "Bombeamento Santa Cecília",
            &[SANTA_CECILIA],
            |q| santa_cecilia_pumping(q.get(SANTA_CECILIA)),
        ),
        StationRule::boxed(VERTIMENTO_TOCOS, "Vertimento Tocos", &[TOCOS], |q| {
            (q.get(TOCOS) - TOCOS_TRANSFER).max(0.0)
        }),
        StationRule::boxed(SANTANA, "Santana natural", &[TOCOS, LAJES], |q| {
            (q.get(TOCOS) + q.get(LAJES)) * SANTANA_FACTOR
        }),
        StationRule::boxed(
            SANTANA_ARTIFICIAL,
            "Santana artificial",
            &[SANTANA, TOCOS, VERTIMENTO_TOCOS, BOMBEAMENTO_SANTA_CECILIA],
            |q| {
                (q.get(SANTANA) - q.get(TOCOS))
                    + q.get(VERTIMENTO_TOCOS)
                    + q.get(BOMBEAMENTO_SANTA_CECILIA)
            },
        ),
        StationRule::boxed(VIGARIO, "Vigário artificial", &[SANTANA_ARTIFICIAL], |q| {
            q.get(SANTANA_ARTIFICIAL).min(VIGARIO_CAPACITY)
        }),
        StationRule::boxed(
            SANTANA_VERTIMENTO,
            "Vertimento Santana",
            &[SANTANA_ARTIFICIAL, VIGARIO],
            |q| q.get(SANTANA_ARTIFICIAL) - q.get(VIGARIO),
        ),
        StationRule::boxed(
            ANTA_ARTIFICIAL,
            "Anta artificial",
            &[ANTA, BOMBEAMENTO_SANTA_CECILIA, SANTANA, SANTANA_VERTIMENTO],
            |q| {
                q.get(ANTA) - q.get(BOMBEAMENTO_SANTA_CECILIA) - q.get(SANTANA)
                    + q.get(SANTANA_VERTIMENTO)
            },
        ),
        StationRule::boxed(
            SIMPLICIO_ARTIFICIAL,
            "Simplício artificial",
            &[ANTA_ARTIFICIAL],
            |q| simplicio(q.get(ANTA_ARTIFICIAL)),
        ),
        StationRule::boxed(
            ILHA_POMBOS_ARTIFICIAL,
            "Ilha dos Pombos artificial",
            &[ILHA_POMBOS, BOMBEAMENTO_SANTA_CECILIA, SANTANA, SANTANA_VERTIMENTO],
            |q| {
                q.get(ILHA_POMBOS) - q.get(BOMBEAMENTO_SANTA_CECILIA) - q.get(SANTANA)
                    + q.get(SANTANA_VERTIMENTO)
            },
        ),
        StationRule::boxed(
            NILO_PECANHA_ARTIFICIAL,
            "Nilo Peçanha artificial",
            &[VIGARIO],
            |q| q.get(VIGARIO).min(NILO_PECANHA_CAPACITY),
        ),
        StationRule::boxed(LAJES_ARTIFICIAL, "Lajes artificial", &[LAJES, TOCOS], |q| {
            q.get(LAJES) + q.get(TOCOS).min(TOCOS_TRANSFER)
        }),
        StationRule::boxed(
            FONTES_ARTIFICIAL,
            "Fontes artificial",
            &[LAJES_ARTIFICIAL, VIGARIO, NILO_PECANHA_ARTIFICIAL],
            |q| {
                fontes(
                    q.get(LAJES_ARTIFICIAL),
                    q.get(VIGARIO),
                    q.get(NILO_PECANHA_ARTIFICIAL),
                )
            },
        ),
        StationRule::boxed(
            PEREIRA_PASSOS_ARTIFICIAL,
            "Pereira Passos artificial",
            &[FONTES_ARTIFICIAL, NILO_PECANHA_ARTIFICIAL],
            |q| q.get(FONTES_ARTIFICIAL) + q.get(NILO_PECANHA_ARTIFICIAL),
        ),
    ]
}
