use super::codes::*;
use super::{ArtificialRule, StationRule};

/// Paulo Afonso and the Paulo Afonso/Moxotó complex take Moxotó's flow.
pub fn sao_francisco() -> Vec<Box<dyn ArtificialRule>> {
    vec![
        StationRule::boxed(PAULO_AFONSO, "Paulo Afonso 1,2,3", &[MOXOTO], |q| {
            q.get(MOXOTO)
        }),
        StationRule::boxed(COMPLEXO, "Complexo Paulo Afonso/Moxotó", &[MOXOTO], |q| {
            q.get(MOXOTO)
        }),
    ]
}

pub fn grande() -> Vec<Box<dyn ArtificialRule>> {
    vec![StationRule::boxed(ITUTINGA, "Itutinga", &[CAMARGOS], |q| {
        q.get(CAMARGOS)
    })]
}

pub fn paraguai() -> Vec<Box<dyn ArtificialRule>> {
    vec![StationRule::boxed(ITIQUIRA_II, "Itiquira II", &[ITIQUIRA_I], |q| {
        q.get(ITIQUIRA_I)
    })]
}
