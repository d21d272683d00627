use std::{fs::File, io::Write, path::Path};

use anyhow::Context;

use crate::domain::opportunity::MergedRecord;

/// Raw field name → display name used in the exported header.
const RENAMES: [(&str, &str); 6] = [
    ("Host_entity", "país_anfitrión"),
    ("Start_Date", "Fecha_inicio"),
    ("End_Date", "Fecha_final"),
    ("Date_Range", "Fechas_rango"),
    ("Interval_Months", "Duración"),
    ("Apply_Before_Date", "Fecha_aplicacion_final"),
];

const COLUMN_ORDER: [&str; 16] = [
    "Link",
    "Nombre_opp",
    "Empresa",
    "país_anfitrión",
    "Program",
    "Backgrounds",
    "Salario",
    "Dias_de_proceso",
    "Idiomas",
    "Horario",
    "Fecha_inicio",
    "Fecha_final",
    "Fechas_rango",
    "Duración",
    "Fecha_aplicacion_final",
    "mensaje",
];

/// Writes the result table to a CSV file: display names, derived outreach
/// message per row, fixed preferred column order, UTF-8 BOM so spreadsheet
/// tools pick the right encoding.
pub fn format_and_export(records: &[MergedRecord], path: &Path) -> anyhow::Result<()> {
    let rows: Vec<Vec<(String, String)>> = records.iter().map(build_row).collect();
    let first = rows.first().context("no records to export")?;
    let keys: Vec<String> = first.iter().map(|(key, _)| key.clone()).collect();
    let header = order_columns(&keys);

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all("\u{feff}".as_bytes())?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(&header)?;
    for row in &rows {
        writer.write_record(header.iter().map(|column| value_of(row, column)))?;
    }
    writer.flush()?;

    Ok(())
}

/// Display-named key/value pairs for one record, with the derived message
/// appended last.
pub fn build_row(record: &MergedRecord) -> Vec<(String, String)> {
    let mut row: Vec<(String, String)> = record
        .rows()
        .into_iter()
        .map(|(key, value)| (display_name(&key).to_string(), value))
        .collect();
    let mensaje = outreach_message(&row);
    row.push(("mensaje".to_string(), mensaje));
    row
}

/// Preferred columns first (present keys only), then any remaining keys in
/// their original order.
pub fn order_columns(keys: &[String]) -> Vec<String> {
    let mut ordered: Vec<String> = COLUMN_ORDER
        .iter()
        .filter(|column| keys.iter().any(|key| key == *column))
        .map(|column| column.to_string())
        .collect();
    for key in keys {
        if !ordered.contains(key) {
            ordered.push(key.clone());
        }
    }
    ordered
}

fn display_name(key: &str) -> &str {
    RENAMES
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
        .unwrap_or(key)
}

fn value_of<'a>(row: &'a [(String, String)], key: &str) -> &'a str {
    row.iter()
        .find(|(row_key, _)| row_key == key)
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}

// Missing fields interpolate whatever sentinel they carry; no escaping.
fn outreach_message(row: &[(String, String)]) -> String {
    format!(
        "Hola\nTe invitamos a aplicar a la siguiente oportunidad:\n\n\
🌎 Lugar: {}\n\
🏢 Empresa: {}\n\
📌 Nombre de la oportunidad: {}\n\
💡 Área: {}\n\
💵 Sueldo: {}\n\
💬 Idiomas: {}\n\
📅 Fechas de la pasantía {}\n\n\
Para conocer todos los requisitos y postulación entra a: {}\n\
Recuerda avisar a cualquier administradora del grupo si aplicas a alguna de nuestras oportunidades para dar seguimiento a tu proceso de selección",
        value_of(row, "país_anfitrión"),
        value_of(row, "Empresa"),
        value_of(row, "Nombre_opp"),
        value_of(row, "Program"),
        value_of(row, "Salario"),
        value_of(row, "Idiomas"),
        value_of(row, "Fechas_rango"),
        value_of(row, "Link"),
    )
}
