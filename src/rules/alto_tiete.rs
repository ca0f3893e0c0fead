//! Alto Tietê: Billings/Guarapiranga pumping and its effect on the Tietê and
//! Paraná cascades downstream.

use super::codes::*;
use super::{ArtificialRule, Flows, StationRule};
use crate::table::StationCode;

/// Billings + Pedras series regression: `(billings - OFFSET) / SLOPE`.
const BILLINGS_PEDRAS_OFFSET: f64 = 0.185;
const BILLINGS_PEDRAS_SLOPE: f64 = 0.8103;

/// Share of Edgard de Souza's incremental flow that reaches Billings.
const PINHEIROS_SHARE: f64 = 0.1;

/// Flow diverted from the Tietê into Billings:
/// `0.1 · (Edgard de Souza − Guarapiranga − Billings) + Guarapiranga + Billings`.
fn diverted(q: &Flows<'_>) -> f64 {
    let guarapiranga = q.get(GUARAPIRANGA);
    let billings = q.get(BILLINGS);
    PINHEIROS_SHARE * (q.get(EDGARD_SOUZA_COM_TRIBUTARIOS) - guarapiranga - billings)
        + guarapiranga
        + billings
}

const DIVERSION: &[StationCode] = &[EDGARD_SOUZA_COM_TRIBUTARIOS, GUARAPIRANGA, BILLINGS];

pub fn rules() -> Vec<Box<dyn ArtificialRule>> {
    vec![
        StationRule::boxed(
            TRAICAO,
            "Traição",
            &[GUARAPIRANGA, BILLINGS],
            |q| q.get(GUARAPIRANGA) + q.get(BILLINGS),
        ),
        StationRule::boxed(PEDREIRA, "Pedreira", &[BILLINGS], |q| {
            q.get(BILLINGS)
        }),
        StationRule::boxed(
            BILLINGS_PEDRAS,
            "Billings + Pedras",
            &[BILLINGS],
            |q| (q.get(BILLINGS) - BILLINGS_PEDRAS_OFFSET) / BILLINGS_PEDRAS_SLOPE,
        ),
        StationRule::boxed(
            PEDRAS,
            "Pedras",
            &[BILLINGS_PEDRAS, BILLINGS],
            |q| q.get(BILLINGS_PEDRAS) - q.get(BILLINGS),
        ),
        StationRule::boxed(
            EDGARD_SOUZA_SEM_TRIBUTARIOS,
            "Edgard de Souza s/ tributários",
            DIVERSION,
            |q| q.get(EDGARD_SOUZA_COM_TRIBUTARIOS) - q.get(GUARAPIRANGA) - q.get(BILLINGS),
        ),
        StationRule::boxed(
            HENRY_BORDEN,
            "Henry Borden",
            &[PEDRAS, EDGARD_SOUZA_COM_TRIBUTARIOS, GUARAPIRANGA, BILLINGS],
            |q| q.get(PEDRAS) + diverted(q),
        ),
        StationRule::boxed(
            BILLINGS_ARTIFICIAL,
            "Billings artificial",
            DIVERSION,
            diverted,
        ),
        StationRule::boxed(
            BARRA_BONITA_ARTIFICIAL,
            "Barra Bonita artificial",
            &[BARRA_BONITA, EDGARD_SOUZA_COM_TRIBUTARIOS, GUARAPIRANGA, BILLINGS],
            |q| q.get(BARRA_BONITA) - diverted(q),
        ),
        StationRule::boxed(
            BARIRI_ARTIFICIAL,
            "Bariri artificial",
            &[BARIRI, EDGARD_SOUZA_COM_TRIBUTARIOS, GUARAPIRANGA, BILLINGS],
            |q| q.get(BARIRI) - diverted(q),
        ),
        StationRule::boxed(
            IBITINGA_ARTIFICIAL,
            "Ibitinga artificial",
            &[IBITINGA, EDGARD_SOUZA_COM_TRIBUTARIOS, GUARAPIRANGA, BILLINGS],
            |q| q.get(IBITINGA) - diverted(q),
        ),
        StationRule::boxed(
            PROMISSAO_ARTIFICIAL,
            "Promissão artificial",
            &[PROMISSAO, EDGARD_SOUZA_COM_TRIBUTARIOS, GUARAPIRANGA, BILLINGS],
            |q| q.get(PROMISSAO) - diverted(q),
        ),
        StationRule::boxed(
            NOVA_AVANHANDAVA_ARTIFICIAL,
            "Nova Avanhandava artificial",
            &[NOVA_AVANHANDAVA, EDGARD_SOUZA_COM_TRIBUTARIOS, GUARAPIRANGA, BILLINGS],
            |q| q.get(NOVA_AVANHANDAVA) - diverted(q),
        ),
        StationRule::boxed(
            TRES_IRMAOS_ARTIFICIAL,
            "Três Irmãos artificial",
            &[TRES_IRMAOS, EDGARD_SOUZA_COM_TRIBUTARIOS, GUARAPIRANGA, BILLINGS],
            |q| q.get(TRES_IRMAOS) - diverted(q),
        ),
        StationRule::boxed(
            ILHA_SOLTEIRA_EQUIVALENTE,
            "Ilha Solteira equivalente",
            &[
                TRES_IRMAOS,
                ILHA_SOLTEIRA,
                EDGARD_SOUZA_COM_TRIBUTARIOS,
                GUARAPIRANGA,
                BILLINGS,
            ],
            |q| (q.get(TRES_IRMAOS) + q.get(ILHA_SOLTEIRA)) - diverted(q),
        ),
        StationRule::boxed(
            JUPIA_ARTIFICIAL,
            "Jupiá artificial",
            &[JUPIA, EDGARD_SOUZA_COM_TRIBUTARIOS, GUARAPIRANGA, BILLINGS],
            |q| q.get(JUPIA) - diverted(q),
        ),
        StationRule::boxed(
            PORTO_PRIMAVERA_ARTIFICIAL,
            "Porto Primavera artificial",
            &[PORTO_PRIMAVERA, EDGARD_SOUZA_COM_TRIBUTARIOS, GUARAPIRANGA, BILLINGS],
            |q| q.get(PORTO_PRIMAVERA) - diverted(q),
        ),
        StationRule::boxed(
            ITAIPU_ARTIFICIAL,
            "Itaipu artificial",
            &[ITAIPU, EDGARD_SOUZA_COM_TRIBUTARIOS, GUARAPIRANGA, BILLINGS],
            |q| q.get(ITAIPU) - diverted(q),
        ),
    ]
}
