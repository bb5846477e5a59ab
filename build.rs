use std::env;
use std::fs;
use std::path::Path;

// Inyecta las variables de .env como variables de entorno de compilación.
// La app WASM no tiene entorno de proceso: config.rs las lee con option_env!.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found, using defaults (see .env.example)");
        return;
    }

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => return,
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let (key, value) = (key.trim(), value.trim());
            // No pisar variables ya definidas en el entorno real
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
