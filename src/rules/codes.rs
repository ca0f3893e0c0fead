//! Station codes referenced by the operator's artificial-flow rules.

use crate::table::StationCode;

const fn code(n: u32) -> StationCode {
    StationCode::new(n)
}

// Alto Tietê
pub const TRAICAO: StationCode = code(104);
pub const GUARAPIRANGA: StationCode = code(117);
pub const BILLINGS: StationCode = code(118);
pub const BILLINGS_ARTIFICIAL: StationCode = code(319);
pub const BILLINGS_PEDRAS: StationCode = code(119);
pub const EDGARD_SOUZA_COM_TRIBUTARIOS: StationCode = code(161);
pub const EDGARD_SOUZA_SEM_TRIBUTARIOS: StationCode = code(164);
pub const PEDRAS: StationCode = code(116);
pub const PEDREIRA: StationCode = code(109);
pub const HENRY_BORDEN: StationCode = code(318);
pub const BARRA_BONITA: StationCode = code(237);
pub const BARRA_BONITA_ARTIFICIAL: StationCode = code(37);
pub const BARIRI: StationCode = code(238);
pub const BARIRI_ARTIFICIAL: StationCode = code(38);
pub const IBITINGA: StationCode = code(239);
pub const IBITINGA_ARTIFICIAL: StationCode = code(39);
pub const PROMISSAO: StationCode = code(240);
pub const PROMISSAO_ARTIFICIAL: StationCode = code(40);
pub const NOVA_AVANHANDAVA: StationCode = code(242);
pub const NOVA_AVANHANDAVA_ARTIFICIAL: StationCode = code(42);
pub const TRES_IRMAOS: StationCode = code(243);
pub const TRES_IRMAOS_ARTIFICIAL: StationCode = code(43);
pub const ILHA_SOLTEIRA: StationCode = code(34);
pub const ILHA_SOLTEIRA_EQUIVALENTE: StationCode = code(44);
pub const JUPIA: StationCode = code(245);
pub const JUPIA_ARTIFICIAL: StationCode = code(45);
pub const PORTO_PRIMAVERA: StationCode = code(246);
pub const PORTO_PRIMAVERA_ARTIFICIAL: StationCode = code(46);
pub const ITAIPU: StationCode = code(266);
pub const ITAIPU_ARTIFICIAL: StationCode = code(66);

// Paraíba do Sul
pub const SANTA_CECILIA: StationCode = code(125);
pub const BOMBEAMENTO_SANTA_CECILIA: StationCode = code(298);
pub const ANTA: StationCode = code(129);
pub const ANTA_ARTIFICIAL: StationCode = code(127);
pub const SANTANA: StationCode = code(203);
pub const SANTANA_VERTIMENTO: StationCode = code(304);
pub const SANTANA_ARTIFICIAL: StationCode = code(315);
pub const TOCOS: StationCode = code(201);
pub const VERTIMENTO_TOCOS: StationCode = code(317);
pub const VIGARIO: StationCode = code(316);
pub const SIMPLICIO_ARTIFICIAL: StationCode = code(126);
pub const ILHA_POMBOS: StationCode = code(130);
pub const ILHA_POMBOS_ARTIFICIAL: StationCode = code(299);
pub const NILO_PECANHA_ARTIFICIAL: StationCode = code(131);
pub const LAJES: StationCode = code(202);
pub const LAJES_ARTIFICIAL: StationCode = code(132);
pub const FONTES_ARTIFICIAL: StationCode = code(303);
pub const PEREIRA_PASSOS_ARTIFICIAL: StationCode = code(306);

// Grande
pub const CAMARGOS: StationCode = code(1);
pub const ITUTINGA: StationCode = code(2);

// São Francisco
pub const MOXOTO: StationCode = code(173);
pub const PAULO_AFONSO: StationCode = code(175);
pub const COMPLEXO: StationCode = code(176);

// Iguaçu
pub const JORDAO: StationCode = code(73);
pub const JORDAO_ARTIFICIAL: StationCode = code(70);
pub const SEGREDO: StationCode = code(76);
pub const SEGREDO_ARTIFICIAL: StationCode = code(75);

// Paraguai
pub const ITIQUIRA_I: StationCode = code(259);
pub const ITIQUIRA_II: StationCode = code(252);

// Xingu
pub const PIMENTAL: StationCode = code(288);
pub const BELO_MONTE_ARTIFICIAL: StationCode = code(292);
pub const PIMENTAL_ARTIFICIAL: StationCode = code(302);
