mod config;
mod controller;
mod logging;

use config::AppConfig;
use controller::{ApiResponse, StudentController};
use serde_json::json;
use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;
use student_domain::StudentId;
use student_store::InMemoryStudentRepository;

/// Pequeño menú interactivo para administrar estudiantes en memoria.
///
/// Opciones soportadas:
/// 1) Listar estudiantes
/// 2) Ver estudiante por id
/// 3) Crear estudiante
/// 4) Reemplazar estudiante (PUT)
/// 5) Actualizar parcialmente (PATCH)
/// 6) Eliminar estudiante
/// 7) Reiniciar almacén (administrativo)
/// 8) Salir
fn main() -> Result<(), Box<dyn Error>> {
    let cfg = AppConfig::from_env()?;
    logging::init_logging(&cfg.log_filter);

    let repo = Arc::new(InMemoryStudentRepository::with_id_start(cfg.id_start));
    let controller = StudentController::new(repo);
    if cfg.seed_demo {
        seed_demo(&controller);
    }
    log::info!("gestión de estudiantes iniciada (primer id {})", cfg.id_start);

    loop {
        println!("\n== Estudiantes ==");
        println!("1) Listar estudiantes");
        println!("2) Ver estudiante por id");
        println!("3) Crear estudiante");
        println!("4) Reemplazar estudiante");
        println!("5) Actualizar parcialmente");
        println!("6) Eliminar estudiante");
        println!("7) Reiniciar almacén");
        println!("8) Salir");
        print!("Elige una opción: ");
        io::stdout().flush().ok();

        let mut choice = String::new();
        if io::stdin().read_line(&mut choice)? == 0 {
            break;
        }
        match choice.trim() {
            "1" => print_response(&controller.list()),
            "2" => {
                let Some(id) = prompt_id()? else { continue };
                print_response(&controller.get(id));
            }
            "3" => {
                let body = prompt_student(false)?;
                print_response(&controller.create(&body));
            }
            "4" => {
                let Some(id) = prompt_id()? else { continue };
                let body = prompt_student(false)?;
                print_response(&controller.replace(id, &body));
            }
            "5" => {
                let Some(id) = prompt_id()? else { continue };
                println!("(enter deja el campo sin cambios)");
                let body = prompt_student(true)?;
                print_response(&controller.patch(id, &body));
            }
            "6" => {
                let Some(id) = prompt_id()? else { continue };
                print_response(&controller.delete(id));
            }
            "7" => {
                let confirm = prompt("Se borrarán todos los estudiantes y se reiniciarán los ids. Escribir 'yes' para confirmar: ")?;
                if confirm.trim().to_lowercase() == "yes" {
                    print_response(&controller.reset());
                } else {
                    println!("Reinicio cancelado");
                }
            }
            "8" => {
                println!("Saliendo...");
                break;
            }
            other => {
                println!("Opción inválida: {}", other);
            }
        }
    }

    Ok(())
}

fn seed_demo(controller: &StudentController<InMemoryStudentRepository>) {
    let demo = [json!({"nombre": "Juan Pérez", "correo": "juan@example.com", "numero_telefono": "1234567890", "idioma": "español"}),
                json!({"nombre": "María García", "correo": "maria@example.com", "numero_telefono": "9876543210", "idioma": "inglés"})];
    for d in demo {
        let r = controller.create(&d.to_string());
        if r.status != 201 {
            log::warn!("no se pudo precargar {}: {}", d["correo"], r.body);
        }
    }
}

fn print_response(r: &ApiResponse) {
    let pretty = serde_json::to_string_pretty(&r.body).unwrap_or_else(|_| r.body.to_string());
    println!("[{}]\n{}", r.status, pretty);
}

fn prompt_id() -> io::Result<Option<StudentId>> {
    let raw = prompt("Id del estudiante: ")?;
    match raw.trim().parse::<StudentId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            eprintln!("Id inválido");
            Ok(None)
        }
    }
}

/// Pide los cuatro campos y arma el cuerpo JSON. Con `partial`, los campos
/// vacíos se omiten del cuerpo.
fn prompt_student(partial: bool) -> io::Result<String> {
    let mut body = serde_json::Map::new();
    for (key, label) in [("nombre", "Nombre"),
                         ("correo", "Correo"),
                         ("numero_telefono", "Teléfono (10 dígitos)"),
                         ("idioma", "Idioma (inglés/español/francés)")]
    {
        let value = prompt(&format!("{}: ", label))?;
        let value = value.trim();
        if partial && value.is_empty() {
            continue;
        }
        body.insert(key.to_string(), json!(value));
    }
    Ok(serde_json::Value::Object(body).to_string())
}

fn prompt(msg: &str) -> io::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s)
}
