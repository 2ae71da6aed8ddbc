// Logging: tracing-subscriber con puente `tracing-log`, de modo que las
// llamadas `log::*` de los crates de biblioteca acaban en el mismo sitio.
use tracing_subscriber::EnvFilter;

/// Instala el subscriber global. `RUST_LOG` tiene prioridad sobre `default_filter`.
/// Escribe en stderr para no mezclarse con la salida del menú.
pub fn init_logging(default_filter: &str) {
  let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))
                                                .unwrap_or_else(|_| EnvFilter::new("info"));
  // try_init falla si ya hay un subscriber; en ese caso se conserva el existente
  let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                   .with_target(true)
                                   .with_writer(std::io::stderr)
                                   .try_init();
}
