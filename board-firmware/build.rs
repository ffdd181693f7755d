// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

fn main() {
    // Lade .env file für optionale Board-Einstellungen
    // Ohne .env gelten die Defaults aus config.rs
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  .env file nicht gefunden: {}", e);
        eprintln!("   Nutze Default-Werte aus config.rs");
    }

    // Gebe Helligkeit an Rust-Compiler weiter
    // Der Wert wird zur Compile-Zeit in den Code eingebacken
    if let Ok(brightness) = std::env::var("STATUS_BOARD_BRIGHTNESS") {
        println!("cargo:rustc-env=STATUS_BOARD_BRIGHTNESS={}", brightness);
    }
    println!("cargo:rerun-if-env-changed=STATUS_BOARD_BRIGHTNESS");

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    //    Definiert Flash/RAM-Layout und Startup-Code
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and `esp-println` has the `defmt-espflash` feature"
                    );
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                what if what.starts_with("esp_rtos_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `esp-rtos` is not started. Make sure `esp_rtos::start()` runs before spawning tasks."
                    );
                    eprintln!();
                }
                _ => (),
            },
            // we don't have anything helpful for "missing-lib" yet
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
