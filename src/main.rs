use std::{
    io::{self, Write},
    path::PathBuf,
};

use env_logger::Env;
use oppscrape::{
    configuration::get_configuration,
    domain::{
        links::{extract_opportunity_urls, is_valid_opportunity_url, opportunity_id},
        opportunity::MergedRecord,
    },
    services::{
        export::format_and_export,
        pipeline::{process_single_url, process_urls},
    },
};

enum MenuOutcome {
    Extracted(Vec<MergedRecord>, String),
    Nothing,
    Exit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = get_configuration().expect("Failed to read configuration.");

    let outcome = loop {
        println!();
        println!("1. Extraer datos de una única URL");
        println!("2. Extraer datos de varias URLs");
        println!("3. Salir");

        let choice = prompt("Por favor, introduce tu elección (1, 2 o 3): ")?;

        match choice.as_str() {
            "1" => {
                let url = prompt("Introduce la URL de la oportunidad: ")?;
                if !is_valid_opportunity_url(&url) {
                    println!("URL no válida. Por favor, asegúrate de que empieza con 'http' o 'https' y que no está vacía.");
                    break MenuOutcome::Nothing;
                }
                let records = vec![process_single_url(&settings, &url).await];
                let filename = format!("oportunidad_{}.csv", opportunity_id(&url));
                break MenuOutcome::Extracted(records, filename);
            }
            "2" => {
                println!("\n--- ¡Importante! Formato de entrada para URLs múltiples ---");
                println!("Puedes pegar varias URLs separadas por espacios, comas o saltos de línea,");
                println!("incluso pegadas una tras otra sin separación (el programa las detectará).");
                println!("Asegúrate de que cada URL empiece con 'http' o 'https'.");
                let raw = prompt("Introduce las URLs: \n")?;

                let urls = extract_opportunity_urls(&raw);
                if urls.is_empty() {
                    println!("No se detectaron URLs válidas. Por favor, intenta de nuevo y asegúrate de que las URLs empiecen con 'http' o 'https'.");
                    break MenuOutcome::Nothing;
                }
                println!("Se detectaron {} URLs. Iniciando extracción...", urls.len());
                let records = process_urls(&settings, &urls).await;
                break MenuOutcome::Extracted(records, "oportunidades_multiples.csv".to_string());
            }
            "3" => {
                println!("Saliendo del programa.");
                break MenuOutcome::Exit;
            }
            _ => println!("Elección no válida. Por favor, introduce 1, 2 o 3."),
        }
    };

    match outcome {
        MenuOutcome::Extracted(records, filename) if !records.is_empty() => {
            let path = PathBuf::from(&settings.output_dir).join(filename);
            format_and_export(&records, &path)?;
            println!(
                "\n¡Extracción completada! Datos guardados en la ruta: '{}'",
                path.display()
            );
        }
        MenuOutcome::Extracted(_, _) | MenuOutcome::Nothing => {
            println!("\nNo se pudo extraer ningún dato.");
        }
        MenuOutcome::Exit => {}
    }

    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
