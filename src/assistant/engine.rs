//! Motor de respuestas del asistente
//!
//! Función pura de `(mensaje, snapshot, fecha)`: clasifica la intención y
//! despacha a la rama correspondiente, que agrega conteos por estado,
//! formatea el texto de respuesta y arma la lista de acciones para la UI.
//! Solo la rama de reportes sintetiza PDFs, y cualquier fallo ahí es fatal
//! para el request completo.

use chrono::NaiveDate;
use serde_json::json;
use thiserror::Error;
use tracing::info;

use crate::assistant::intent::{self, Intent};
use crate::assistant::pdf::PdfError;
use crate::assistant::reports;
use crate::dto::assistant_dto::{Action, AssistantResponse};
use crate::models::load::LoadStatus;
use crate::models::maintenance::MaintenanceStatus;
use crate::models::snapshot::DomainSnapshot;
use crate::models::trip::TripStatus;
use crate::models::vehicle::VehicleStatus;

/// Muestras máximas por rama
const VEHICLE_SAMPLES: usize = 5;
const TRIP_SAMPLES: usize = 3;
const MAINTENANCE_SAMPLES: usize = 3;
const ROUTE_SAMPLES: usize = 5;
const LOAD_SAMPLES: usize = 3;

/// Errores del motor. Solo la síntesis de reportes puede fallar.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Fallo generando reporte PDF: {0}")]
    Report(#[from] PdfError),
}

/// Generar la respuesta del asistente para un mensaje y un snapshot
pub fn generate(
    message: &str,
    snapshot: &DomainSnapshot,
    today: NaiveDate,
) -> Result<AssistantResponse, AssistantError> {
    let intent = intent::classify(message);
    info!("🧠 Intención clasificada: {:?}", intent);

    let response = match intent {
        Intent::VehicleStatus => vehicle_status_response(snapshot),
        Intent::TripManagement => trip_response(snapshot),
        Intent::Maintenance => maintenance_response(snapshot),
        Intent::Routes => routes_response(snapshot),
        Intent::Loads => loads_response(snapshot),
        Intent::ReportGeneration => report_response(message, snapshot, today)?,
        Intent::GeneralHelp => help_response(),
        Intent::Unknown => unknown_response(),
    };

    Ok(response)
}

fn vehicle_status_response(snapshot: &DomainSnapshot) -> AssistantResponse {
    let vehicles = &snapshot.vehicles;
    // Los vehículos inactivos quedan fuera de los tres buckets a propósito:
    // no son operativamente interesantes para el despachador.
    let available: Vec<_> = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::Available)
        .collect();
    let en_route = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::EnRoute)
        .count();
    let in_maintenance = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::Maintenance)
        .count();

    let mut text = format!(
        "🚛 Estado de la flota:\n\n✅ Disponibles: {}\n🚚 En ruta: {}\n🔧 En mantenimiento: {}\n",
        available.len(),
        en_route,
        in_maintenance
    );

    if !available.is_empty() {
        text.push_str("\nVehículos disponibles:\n");
        for vehicle in available.iter().take(VEHICLE_SAMPLES) {
            text.push_str(&format!(
                "• {} - {} {}\n",
                vehicle.license_plate, vehicle.brand, vehicle.model
            ));
        }
    }

    let mut actions = vec![
        Action::new("view_details", "Ver detalles", json!({ "section": "vehicles" })),
        Action::new("generate_report", "Generar reporte", json!({ "report": "vehicles" })),
    ];
    if !available.is_empty() {
        actions.push(Action::new(
            "schedule_trip",
            "Programar viaje",
            json!({ "section": "trips" }),
        ));
    }

    AssistantResponse {
        response: text,
        actions,
        reports: vec![],
    }
}

fn trip_response(snapshot: &DomainSnapshot) -> AssistantResponse {
    let trips = &snapshot.trips;
    let in_progress = trips
        .iter()
        .filter(|t| t.status == TripStatus::InProgress)
        .count();
    let scheduled = trips
        .iter()
        .filter(|t| t.status == TripStatus::Scheduled)
        .count();
    let completed = trips
        .iter()
        .filter(|t| t.status == TripStatus::Completed)
        .count();

    let mut text = format!(
        "🗺️ Gestión de viajes:\n\n🚚 En curso: {}\n📅 Programados: {}\n✅ Completados: {}\n",
        in_progress, scheduled, completed
    );

    if !trips.is_empty() {
        text.push_str("\nÚltimos viajes:\n");
        for trip in trips.iter().take(TRIP_SAMPLES) {
            let plate = trip
                .vehicle
                .as_ref()
                .map(|v| v.license_plate.as_str())
                .unwrap_or("N/A");
            let route = trip
                .route
                .as_ref()
                .map(|r| r.name.as_str())
                .unwrap_or("N/A");
            text.push_str(&format!(
                "• {} → {} ({})\n",
                plate,
                route,
                trip.status.display_name()
            ));
        }
    }

    AssistantResponse {
        response: text,
        actions: vec![
            Action::new("schedule_trip", "Programar viaje", json!({ "section": "trips" })),
            Action::new("view_details", "Ver detalles", json!({ "section": "trips" })),
            Action::new("generate_report", "Generar reporte", json!({ "report": "trips" })),
        ],
        reports: vec![],
    }
}

fn maintenance_response(snapshot: &DomainSnapshot) -> AssistantResponse {
    let maintenances = &snapshot.maintenances;
    let scheduled = maintenances
        .iter()
        .filter(|m| m.status == MaintenanceStatus::Scheduled)
        .count();
    let in_progress = maintenances
        .iter()
        .filter(|m| m.status == MaintenanceStatus::InProgress)
        .count();

    let mut text = format!(
        "🔧 Mantenimientos:\n\n📅 Programados: {}\n⚙️ En curso: {}\n",
        scheduled, in_progress
    );

    if !maintenances.is_empty() {
        text.push_str("\nPróximos mantenimientos:\n");
        for maintenance in maintenances.iter().take(MAINTENANCE_SAMPLES) {
            let plate = maintenance
                .vehicle
                .as_ref()
                .map(|v| v.license_plate.as_str())
                .unwrap_or("N/A");
            text.push_str(&format!(
                "• {} - {} ({})\n",
                maintenance.maintenance_type, plate, maintenance.scheduled_date
            ));
        }
    }

    AssistantResponse {
        response: text,
        actions: vec![
            Action::new(
                "schedule_maintenance",
                "Programar mantenimiento",
                json!({ "section": "maintenances" }),
            ),
            Action::new("view_details", "Ver detalles", json!({ "section": "maintenances" })),
            Action::new(
                "generate_report",
                "Generar reporte",
                json!({ "report": "maintenances" }),
            ),
        ],
        reports: vec![],
    }
}

fn routes_response(snapshot: &DomainSnapshot) -> AssistantResponse {
    let routes = &snapshot.routes;

    let text = if routes.is_empty() {
        "🗺️ No hay rutas registradas todavía.\n\nPuedes crear una desde la sección de rutas."
            .to_string()
    } else {
        let mut text = format!("🗺️ Rutas registradas ({}):\n\n", routes.len());
        for route in routes.iter().take(ROUTE_SAMPLES) {
            text.push_str(&format!(
                "• {}: {} → {} ({} km)\n",
                route.name, route.origin, route.destination, route.distance_km
            ));
        }
        text
    };

    AssistantResponse {
        response: text,
        actions: vec![
            Action::new("create_route", "Crear ruta", json!({ "section": "routes" })),
            Action::new("optimize_route", "Optimizar ruta", json!({ "section": "routes" })),
            Action::new("generate_report", "Generar reporte", json!({ "report": "routes" })),
        ],
        reports: vec![],
    }
}

fn loads_response(snapshot: &DomainSnapshot) -> AssistantResponse {
    let loads = &snapshot.loads;
    let in_transit = loads
        .iter()
        .filter(|l| l.status == LoadStatus::InTransit)
        .count();
    let delivered = loads
        .iter()
        .filter(|l| l.status == LoadStatus::Delivered)
        .count();
    let pending = loads
        .iter()
        .filter(|l| l.status == LoadStatus::Pending)
        .count();

    let mut text = format!(
        "📦 Cargas:\n\n🚚 En tránsito: {}\n✅ Entregadas: {}\n⏳ Pendientes: {}\n",
        in_transit, delivered, pending
    );

    if !loads.is_empty() {
        text.push_str("\nCargas recientes:\n");
        for load in loads.iter().take(LOAD_SAMPLES) {
            text.push_str(&format!(
                "• {} - {}\n",
                load.code,
                load.status.display_name()
            ));
        }
    }

    AssistantResponse {
        response: text,
        actions: vec![
            Action::new("track_load", "Rastrear carga", json!({ "section": "loads" })),
            Action::new("view_details", "Ver detalles", json!({ "section": "loads" })),
            Action::new("generate_report", "Generar reporte", json!({ "report": "loads" })),
        ],
        reports: vec![],
    }
}

fn report_response(
    message: &str,
    snapshot: &DomainSnapshot,
    today: NaiveDate,
) -> Result<AssistantResponse, AssistantError> {
    let generated = reports::build_reports(message, snapshot, today)?;

    let text = if generated.is_empty() {
        "📄 ¿Qué reporte necesitas? Puedo generar:\n\n\
         • Reporte de vehículos\n\
         • Reporte de viajes\n\
         • Reporte de mantenimientos\n\
         • Reporte de cargas\n\n\
         Por ejemplo: \"genera un reporte de vehículos\"."
            .to_string()
    } else {
        let mut text = format!(
            "📄 He generado {} reporte(s) en PDF:\n\n",
            generated.len()
        );
        for report in &generated {
            text.push_str(&format!("• {}\n", report.filename));
        }
        text
    };

    // La acción de reporte completo se ofrece siempre, haya o no reportes
    let actions = vec![Action::new(
        "generate_full_report",
        "Generar reporte completo",
        json!({ "report": "full" }),
    )];

    Ok(AssistantResponse {
        response: text,
        actions,
        reports: generated,
    })
}

fn help_response() -> AssistantResponse {
    let text = "👋 ¡Hola! Soy el asistente de tu flota. Puedo ayudarte con:\n\n\
                🚛 Vehículos - estado y disponibilidad de la flota\n\
                🗺️ Viajes - viajes en curso, programados y completados\n\
                🔧 Mantenimientos - programados y en curso\n\
                📍 Rutas - rutas registradas y distancias\n\
                📦 Cargas - seguimiento de mercancía\n\
                📄 Reportes - reportes en PDF por dominio\n\n\
                Prueba con:\n\
                • \"¿Cuántos vehículos están disponibles?\"\n\
                • \"¿Qué viajes hay en curso?\"\n\
                • \"Genera un reporte de vehículos\""
        .to_string();

    AssistantResponse {
        response: text,
        actions: vec![Action::new(
            "quick_help",
            "Ayuda rápida",
            json!({ "section": "help" }),
        )],
        reports: vec![],
    }
}

fn unknown_response() -> AssistantResponse {
    let text = "🤔 No entendí tu consulta. Puedo responder sobre:\n\n\
                vehículos, viajes, mantenimientos, rutas, cargas y reportes.\n\n\
                Escribe \"ayuda\" para ver ejemplos."
        .to_string();

    AssistantResponse {
        response: text,
        actions: vec![Action::new(
            "general_help",
            "Ayuda general",
            json!({ "section": "help" }),
        )],
        reports: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::Vehicle;
    use uuid::Uuid;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    fn vehicle(plate: &str, status: VehicleStatus) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            license_plate: plate.to_string(),
            brand: "Volvo".to_string(),
            model: "FH16".to_string(),
            status,
            last_maintenance: None,
        }
    }

    fn fleet_snapshot() -> DomainSnapshot {
        DomainSnapshot {
            vehicles: vec![
                vehicle("ABC-123", VehicleStatus::Available),
                vehicle("DEF-456", VehicleStatus::Available),
                vehicle("GHI-789", VehicleStatus::Maintenance),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_vehicle_status_scenario() {
        let response = generate(
            "¿Cuántos vehículos están disponibles?",
            &fleet_snapshot(),
            fixed_date(),
        )
        .unwrap();

        assert!(response.response.contains("Disponibles: 2"));
        assert!(response.response.contains("En mantenimiento: 1"));
        assert!(response.response.contains("ABC-123"));

        let types: Vec<&str> = response
            .actions
            .iter()
            .map(|a| a.action_type.as_str())
            .collect();
        assert_eq!(types, vec!["view_details", "generate_report", "schedule_trip"]);
        assert!(response.reports.is_empty());
    }

    #[test]
    fn test_vehicle_status_without_available_omits_schedule_trip() {
        let snapshot = DomainSnapshot {
            vehicles: vec![
                vehicle("GHI-789", VehicleStatus::Maintenance),
                vehicle("JKL-012", VehicleStatus::Inactive),
            ],
            ..Default::default()
        };
        let response = generate("estado de la flota", &snapshot, fixed_date()).unwrap();

        assert!(response.response.contains("Disponibles: 0"));
        assert!(!response
            .actions
            .iter()
            .any(|a| a.action_type == "schedule_trip"));
    }

    #[test]
    fn test_vehicle_buckets_exclude_inactive() {
        let snapshot = DomainSnapshot {
            vehicles: vec![
                vehicle("A", VehicleStatus::Available),
                vehicle("B", VehicleStatus::EnRoute),
                vehicle("C", VehicleStatus::Maintenance),
                vehicle("D", VehicleStatus::Inactive),
            ],
            ..Default::default()
        };
        let response = generate("vehículos", &snapshot, fixed_date()).unwrap();

        // Los tres buckets suman 3 de 4: los inactivos quedan fuera
        assert!(response.response.contains("Disponibles: 1"));
        assert!(response.response.contains("En ruta: 1"));
        assert!(response.response.contains("En mantenimiento: 1"));
        assert!(!response.response.contains("Inactivo"));
    }

    #[test]
    fn test_general_help_scenario() {
        let response = generate("hola", &DomainSnapshot::default(), fixed_date()).unwrap();

        assert!(response.response.contains("Soy el asistente de tu flota"));
        assert_eq!(response.actions.len(), 1);
        assert_eq!(response.actions[0].action_type, "quick_help");
        assert!(response.reports.is_empty());
    }

    #[test]
    fn test_unknown_fallback() {
        let response = generate("xyzzy", &DomainSnapshot::default(), fixed_date()).unwrap();

        assert!(response.response.contains("No entendí"));
        assert_eq!(response.actions.len(), 1);
        assert_eq!(response.actions[0].action_type, "general_help");
    }

    #[test]
    fn test_report_generation_two_domains_fixed_order() {
        let response = generate(
            "genera un reporte de vehículos y de viajes",
            &fleet_snapshot(),
            fixed_date(),
        )
        .unwrap();

        assert_eq!(response.reports.len(), 2);
        assert_eq!(response.reports[0].report_type, "vehicle_report");
        assert_eq!(response.reports[1].report_type, "trip_report");
        assert_eq!(
            response.reports[0].filename,
            "reporte_vehiculos_2026-08-28.pdf"
        );
        assert!(response
            .actions
            .iter()
            .any(|a| a.action_type == "generate_full_report"));
    }

    #[test]
    fn test_report_generation_without_domain_returns_menu() {
        let response = generate(
            "genera un reporte",
            &DomainSnapshot::default(),
            fixed_date(),
        )
        .unwrap();

        assert!(response.reports.is_empty());
        assert!(response.response.contains("Reporte de vehículos"));
        assert!(response.response.contains("Reporte de viajes"));
        assert!(response.response.contains("Reporte de mantenimientos"));
        assert!(response.response.contains("Reporte de cargas"));
        assert_eq!(response.actions.len(), 1);
        assert_eq!(response.actions[0].action_type, "generate_full_report");
    }

    #[test]
    fn test_routes_empty_state() {
        let response = generate(
            "muéstrame las rutas",
            &DomainSnapshot::default(),
            fixed_date(),
        )
        .unwrap();
        assert!(response.response.contains("No hay rutas registradas"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let snapshot = fleet_snapshot();
        let first = generate("reporte de la flota", &snapshot, fixed_date()).unwrap();
        let second = generate("reporte de la flota", &snapshot, fixed_date()).unwrap();
        assert_eq!(first, second);
    }
}
