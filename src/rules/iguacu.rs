//! Iguaçu: Jordão diversion into Segredo.

use super::codes::*;
use super::{ArtificialRule, Flows, StationRule};

/// Maximum flow diverted from Jordão to Segredo (m³/s).
const MAX_DIVERSION: f64 = 173.5;

/// Minimum flow kept in the Jordão riverbed (m³/s).
const RESIDUAL_FLOW: f64 = 10.0;

fn diverted(q: &Flows<'_>) -> f64 {
    (q.get(JORDAO) - RESIDUAL_FLOW).min(MAX_DIVERSION)
}

pub fn rules() -> Vec<Box<dyn ArtificialRule>> {
    vec![
        StationRule::boxed(JORDAO_ARTIFICIAL, "Jordão artificial", &[JORDAO], |q| {
            q.get(JORDAO) - diverted(q)
        }),
        StationRule::boxed(
            SEGREDO_ARTIFICIAL,
            "Segredo artificial",
            &[SEGREDO, JORDAO],
            |q| q.get(SEGREDO) + diverted(q),
        ),
    ]
}
