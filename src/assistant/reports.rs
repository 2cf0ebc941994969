//! Construcción de reportes PDF por dominio
//!
//! La detección de dominios solicitados usa chequeos de substring
//! independientes sobre el mensaje, deliberadamente separados de los
//! patrones del clasificador: un mismo mensaje puede pedir varios
//! reportes a la vez. El orden de síntesis es fijo
//! (vehículos → viajes → mantenimientos → cargas) y los callers dependen
//! de que la posición en la lista corresponda al dominio.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::NaiveDate;

use crate::assistant::pdf::{self, PdfError, TableDocument};
use crate::dto::assistant_dto::Report;
use crate::models::snapshot::DomainSnapshot;

/// Dominios sobre los que se puede emitir un reporte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDomain {
    Vehicles,
    Trips,
    Maintenances,
    Loads,
}

/// Orden fijo de síntesis de reportes
const REPORT_ORDER: &[ReportDomain] = &[
    ReportDomain::Vehicles,
    ReportDomain::Trips,
    ReportDomain::Maintenances,
    ReportDomain::Loads,
];

impl ReportDomain {
    /// Chequeo de keywords del dominio en el mensaje ya en minúsculas
    fn is_requested(&self, message: &str) -> bool {
        match self {
            ReportDomain::Vehicles => {
                message.contains("vehícul") || message.contains("flota")
            }
            ReportDomain::Trips => message.contains("viaje") || message.contains("envío"),
            ReportDomain::Maintenances => message.contains("mantenimiento"),
            ReportDomain::Loads => {
                message.contains("carga") || message.contains("mercancía")
            }
        }
    }

    fn report_type(&self) -> &'static str {
        match self {
            ReportDomain::Vehicles => "vehicle_report",
            ReportDomain::Trips => "trip_report",
            ReportDomain::Maintenances => "maintenance_report",
            ReportDomain::Loads => "load_report",
        }
    }

    fn filename_slug(&self) -> &'static str {
        match self {
            ReportDomain::Vehicles => "vehiculos",
            ReportDomain::Trips => "viajes",
            ReportDomain::Maintenances => "mantenimientos",
            ReportDomain::Loads => "cargas",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ReportDomain::Vehicles => "Reporte de Vehículos",
            ReportDomain::Trips => "Reporte de Viajes",
            ReportDomain::Maintenances => "Reporte de Mantenimientos",
            ReportDomain::Loads => "Reporte de Cargas",
        }
    }
}

/// Dominios pedidos en el mensaje, en el orden fijo de síntesis
pub fn requested_domains(message: &str) -> Vec<ReportDomain> {
    let normalized = message.to_lowercase();
    REPORT_ORDER
        .iter()
        .copied()
        .filter(|domain| domain.is_requested(&normalized))
        .collect()
}

/// Sintetizar un reporte por cada dominio pedido, en orden fijo.
/// Cualquier fallo de síntesis aborta el request completo: no hay
/// aislamiento por dominio.
pub fn build_reports(
    message: &str,
    snapshot: &DomainSnapshot,
    today: NaiveDate,
) -> Result<Vec<Report>, PdfError> {
    let mut reports = Vec::new();
    for domain in requested_domains(message) {
        reports.push(build_report(domain, snapshot, today)?);
    }
    Ok(reports)
}

fn build_report(
    domain: ReportDomain,
    snapshot: &DomainSnapshot,
    today: NaiveDate,
) -> Result<Report, PdfError> {
    let (columns, rows) = match domain {
        ReportDomain::Vehicles => vehicle_rows(snapshot),
        ReportDomain::Trips => trip_rows(snapshot),
        ReportDomain::Maintenances => maintenance_rows(snapshot),
        ReportDomain::Loads => load_rows(snapshot),
    };

    let table = TableDocument {
        title: domain.title().to_string(),
        subtitle: format!("Generado el {}", today),
        columns,
        rows,
        footer: format!("Fecha de generación: {}", today),
    };

    let bytes = pdf::render_table(&table)?;

    Ok(Report {
        report_type: domain.report_type().to_string(),
        format: "pdf".to_string(),
        data: BASE64.encode(bytes),
        filename: format!("reporte_{}_{}.pdf", domain.filename_slug(), today),
    })
}

// Los valores opcionales ausentes se renderizan como celda vacía.

fn vehicle_rows(snapshot: &DomainSnapshot) -> (Vec<String>, Vec<Vec<String>>) {
    let columns = to_columns(&["Placa", "Marca", "Modelo", "Estado", "Ult. mantenimiento"]);
    let rows = snapshot
        .vehicles
        .iter()
        .map(|v| {
            vec![
                v.license_plate.clone(),
                v.brand.clone(),
                v.model.clone(),
                v.status.display_name().to_string(),
                v.last_maintenance
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect();
    (columns, rows)
}

fn trip_rows(snapshot: &DomainSnapshot) -> (Vec<String>, Vec<Vec<String>>) {
    let columns = to_columns(&["ID", "Estado", "Vehículo", "Ruta", "Inicio"]);
    let rows = snapshot
        .trips
        .iter()
        .map(|t| {
            vec![
                short_id(&t.id.to_string()),
                t.status.display_name().to_string(),
                t.vehicle
                    .as_ref()
                    .map(|v| v.license_plate.clone())
                    .unwrap_or_default(),
                t.route.as_ref().map(|r| r.name.clone()).unwrap_or_default(),
                t.start_date.format("%Y-%m-%d").to_string(),
            ]
        })
        .collect();
    (columns, rows)
}

fn maintenance_rows(snapshot: &DomainSnapshot) -> (Vec<String>, Vec<Vec<String>>) {
    let columns = to_columns(&["ID", "Tipo", "Estado", "Vehículo", "Fecha programada"]);
    let rows = snapshot
        .maintenances
        .iter()
        .map(|m| {
            vec![
                short_id(&m.id.to_string()),
                m.maintenance_type.clone(),
                m.status.display_name().to_string(),
                m.vehicle
                    .as_ref()
                    .map(|v| v.license_plate.clone())
                    .unwrap_or_default(),
                m.scheduled_date.to_string(),
            ]
        })
        .collect();
    (columns, rows)
}

fn load_rows(snapshot: &DomainSnapshot) -> (Vec<String>, Vec<Vec<String>>) {
    let columns = to_columns(&["Código", "Estado", "Origen", "Destino", "Entrega estimada"]);
    let rows = snapshot
        .loads
        .iter()
        .map(|l| {
            vec![
                l.code.clone(),
                l.status.display_name().to_string(),
                l.origin.clone(),
                l.destination.clone(),
                l.estimated_delivery
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect();
    (columns, rows)
}

fn to_columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Prefijo corto del UUID para que quepa en la columna fija
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_domains_fixed_order() {
        // El orden de salida es el orden fijo, no el orden de mención
        let domains = requested_domains("reporte de viajes y de vehículos");
        assert_eq!(domains, vec![ReportDomain::Vehicles, ReportDomain::Trips]);
    }

    #[test]
    fn test_requested_domains_all_four() {
        let domains =
            requested_domains("reporte de vehículos, viajes, mantenimiento y carga");
        assert_eq!(
            domains,
            vec![
                ReportDomain::Vehicles,
                ReportDomain::Trips,
                ReportDomain::Maintenances,
                ReportDomain::Loads,
            ]
        );
    }

    #[test]
    fn test_requested_domains_none() {
        assert!(requested_domains("genera un reporte").is_empty());
    }

    #[test]
    fn test_requested_domains_merchandise_synonym() {
        let domains = requested_domains("reporte de mercancía");
        assert_eq!(domains, vec![ReportDomain::Loads]);
    }

    #[test]
    fn test_build_reports_base64_round_trip() {
        let snapshot = DomainSnapshot::default();
        let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        let reports = build_reports("reporte de la flota", &snapshot, today).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].report_type, "vehicle_report");
        assert_eq!(reports[0].format, "pdf");
        assert_eq!(reports[0].filename, "reporte_vehiculos_2026-08-28.pdf");

        let decoded = BASE64.decode(&reports[0].data).unwrap();
        assert_eq!(BASE64.encode(&decoded), reports[0].data);
        assert!(decoded.starts_with(b"%PDF"));
    }
}
