//! Clasificador de intenciones
//!
//! Mapea el mensaje libre del usuario a una intención de un conjunto
//! cerrado, por coincidencia de patrones regex en orden fijo. La tabla es
//! una lista ordenada (no un HashMap): el orden de declaración es el único
//! criterio de desempate cuando un mensaje coincide con dos intenciones.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Intención detectada en el mensaje del usuario
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ReportGeneration,
    VehicleStatus,
    TripManagement,
    Maintenance,
    Routes,
    Loads,
    GeneralHelp,
    Unknown,
}

/// Tabla ordenada de patrones por intención.
/// ReportGeneration va primero: "genera un reporte de vehículos" debe
/// clasificar como reporte, no como estado de flota.
const INTENT_PATTERNS: &[(Intent, &[&str])] = &[
    (
        Intent::ReportGeneration,
        &[
            r"(?i)\breportes?\b",
            r"(?i)\binformes?\b",
            r"(?i)\bexportar\b",
            r"(?i)\bpdf\b",
            r"(?i)\bdescargar\b",
        ],
    ),
    (
        Intent::VehicleStatus,
        &[
            r"(?i)\bveh[ií]culos?\b",
            r"(?i)\bcami[oó]n(?:es)?\b",
            r"(?i)\bflota\b",
            r"(?i)\bunidad(?:es)?\b",
            r"(?i)\bplacas?\b",
            r"(?i)\bdisponibles?\b",
        ],
    ),
    (
        Intent::TripManagement,
        &[
            r"(?i)\bviajes?\b",
            r"(?i)\benv[ií]os?\b",
            r"(?i)\btrayectos?\b",
            r"(?i)\bdespachos?\b",
        ],
    ),
    (
        Intent::Maintenance,
        &[
            r"(?i)\bmantenimientos?\b",
            r"(?i)\breparaci[oó]n(?:es)?\b",
            r"(?i)\btaller(?:es)?\b",
            r"(?i)\brevisi[oó]n(?:es)?\b",
        ],
    ),
    (
        Intent::Routes,
        &[
            r"(?i)\brutas?\b",
            r"(?i)\brecorridos?\b",
            r"(?i)\bitinerarios?\b",
            r"(?i)\bdestinos?\b",
        ],
    ),
    (
        Intent::Loads,
        &[
            r"(?i)\bcargas?\b",
            r"(?i)\bmercanc[ií]as?\b",
            r"(?i)\bpaquetes?\b",
            r"(?i)\bencomiendas?\b",
        ],
    ),
    (
        Intent::GeneralHelp,
        &[
            r"(?i)\bhola\b",
            r"(?i)\bbuen[oa]s\b",
            r"(?i)\bayuda\b",
            r"(?i)\bay[uú]dame\b",
            r"(?i)\bqu[eé] puedes hacer\b",
            r"(?i)\bhelp\b",
            r"(?i)\bgracias\b",
        ],
    ),
];

lazy_static! {
    /// Patrones compilados una sola vez, preservando el orden de la tabla
    static ref COMPILED_PATTERNS: Vec<(Intent, Vec<Regex>)> = INTENT_PATTERNS
        .iter()
        .map(|(intent, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(p).expect("patrón de intención inválido"))
                .collect();
            (*intent, compiled)
        })
        .collect();
}

/// Clasificar un mensaje. Nunca falla: sin coincidencia devuelve `Unknown`.
pub fn classify(message: &str) -> Intent {
    let normalized = message.to_lowercase();

    for (intent, patterns) in COMPILED_PATTERNS.iter() {
        if patterns.iter().any(|p| p.is_match(&normalized)) {
            return *intent;
        }
    }

    Intent::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_vehicle_status() {
        assert_eq!(classify("¿Cuántos vehículos tenemos?"), Intent::VehicleStatus);
        assert_eq!(classify("estado de la FLOTA"), Intent::VehicleStatus);
        assert_eq!(classify("camiones disponibles"), Intent::VehicleStatus);
    }

    #[test]
    fn test_classify_trip_management() {
        assert_eq!(classify("¿qué viajes hay en curso?"), Intent::TripManagement);
        assert_eq!(classify("estado de los envíos"), Intent::TripManagement);
    }

    #[test]
    fn test_classify_maintenance() {
        assert_eq!(classify("mantenimientos programados"), Intent::Maintenance);
        assert_eq!(classify("agenda una revisión"), Intent::Maintenance);
    }

    #[test]
    fn test_classify_routes_and_loads() {
        assert_eq!(classify("muéstrame las rutas"), Intent::Routes);
        assert_eq!(classify("¿dónde está la carga?"), Intent::Loads);
        assert_eq!(classify("seguimiento de mercancía"), Intent::Loads);
    }

    #[test]
    fn test_classify_report_generation() {
        assert_eq!(classify("genera un reporte"), Intent::ReportGeneration);
        assert_eq!(classify("exportar a pdf"), Intent::ReportGeneration);
    }

    #[test]
    fn test_classify_general_help() {
        assert_eq!(classify("hola"), Intent::GeneralHelp);
        assert_eq!(classify("necesito ayuda"), Intent::GeneralHelp);
    }

    #[test]
    fn test_classify_no_match_is_unknown() {
        assert_eq!(classify("xyzzy"), Intent::Unknown);
        assert_eq!(classify(""), Intent::Unknown);
        assert_eq!(classify("el clima de hoy"), Intent::Unknown);
    }

    #[test]
    fn test_classify_word_boundary() {
        // "cargamento" no debe disparar el patrón \bcargas?\b
        assert_eq!(classify("descargamos mañana"), Intent::Unknown);
    }

    #[test]
    fn test_tie_break_is_declaration_order() {
        // "reporte de vehículos" coincide con ReportGeneration y con
        // VehicleStatus; gana la intención declarada primero.
        for _ in 0..10 {
            assert_eq!(
                classify("reporte de vehículos"),
                Intent::ReportGeneration
            );
            assert_eq!(classify("vehículos en viaje"), Intent::VehicleStatus);
        }
    }
}
