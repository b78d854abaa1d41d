//! Build script for tmseg-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time
//! - Generates the board constants and pin lookup from display.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Number of user GPIOs on the RP2040
const GPIO_COUNT: u8 = 30;

/// Digits the TM1637 can drive
const MAX_DIGITS: i64 = 6;

fn main() {
    setup_linker();
    let config = load_config();
    let display = validate_display(&config);
    let pins = validate_pins(&config);
    generate_config(&display, &pins);
}

/// Validated `[display]` section
struct DisplaySection {
    digits: usize,
    brightness: u8,
    bit_delay_us: u32,
    scroll_frame_ms: u32,
    banner: String,
}

/// Validated `[pins]` section
struct PinsSection {
    clk: u8,
    dio: u8,
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse display.toml
fn load_config() -> toml::Value {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a display.toml configuration file         ║\n\
            ║  in the tmseg-firmware directory.                                ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read display.toml", &[e.to_string()]),
    };

    match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail("Invalid TOML syntax in display.toml", &[e.to_string()]),
    }
}

/// Validate the `[display]` section
fn validate_display(config: &toml::Value) -> DisplaySection {
    let Some(section) = config.get("display") else {
        fail("Missing [display] section in display.toml", &[]);
    };

    let mut errors = Vec::new();

    let digits = integer(section, "display.digits", 4, &mut errors);
    if !(1..=MAX_DIGITS).contains(&digits) {
        errors.push(format!("display.digits must be 1-{}, got {}", MAX_DIGITS, digits));
    }

    let brightness = integer(section, "display.brightness", 7, &mut errors);
    if !(0..=7).contains(&brightness) {
        errors.push(format!("display.brightness must be 0-7, got {}", brightness));
    }

    let bit_delay_us = integer(section, "display.bit_delay_us", 1, &mut errors);
    if !(1..=1_000).contains(&bit_delay_us) {
        errors.push(format!(
            "display.bit_delay_us must be 1-1000, got {}",
            bit_delay_us
        ));
    }

    let scroll_frame_ms = integer(section, "display.scroll_frame_ms", 250, &mut errors);
    if !(1..=10_000).contains(&scroll_frame_ms) {
        errors.push(format!(
            "display.scroll_frame_ms must be 1-10000, got {}",
            scroll_frame_ms
        ));
    }

    let banner = match section.get("banner") {
        None => String::from("Hello World"),
        Some(toml::Value::String(s)) if s.contains('\0') => {
            errors.push("display.banner must not contain NUL".to_string());
            String::new()
        }
        Some(toml::Value::String(s)) => s.clone(),
        Some(_) => {
            errors.push("display.banner must be a string".to_string());
            String::new()
        }
    };

    if !errors.is_empty() {
        fail("Invalid [display] section in display.toml", &errors);
    }

    DisplaySection {
        digits: digits as usize,
        brightness: brightness as u8,
        bit_delay_us: bit_delay_us as u32,
        scroll_frame_ms: scroll_frame_ms as u32,
        banner,
    }
}

/// Validate the `[pins]` section
fn validate_pins(config: &toml::Value) -> PinsSection {
    let Some(section) = config.get("pins") else {
        fail("Missing [pins] section in display.toml", &[]);
    };

    let mut errors = Vec::new();
    let mut pin = |key: &str| -> u8 {
        match section.get(key) {
            Some(toml::Value::String(s)) => match parse_pin_string(s) {
                Some(pin) => pin,
                None => {
                    errors.push(format!(
                        "pins.{}: invalid pin '{}' (expected gpio0-gpio29)",
                        key, s
                    ));
                    0
                }
            },
            Some(_) => {
                errors.push(format!("pins.{} must be a string like \"gpio2\"", key));
                0
            }
            None => {
                errors.push(format!("Missing pins.{}", key));
                0
            }
        }
    };

    let clk = pin("clk");
    let dio = pin("dio");

    if errors.is_empty() && clk == dio {
        errors.push(format!("pins.clk and pins.dio both use gpio{}", clk));
    }

    if !errors.is_empty() {
        fail("Invalid [pins] section in display.toml", &errors);
    }

    PinsSection { clk, dio }
}

/// Parse a pin string from config
///
/// Supports formats:
/// - "gpio11" -> 11
/// - "GPIO11" -> 11
fn parse_pin_string(s: &str) -> Option<u8> {
    let s = s.trim().to_ascii_lowercase();
    let num_str = s.strip_prefix("gpio")?;
    let pin: u8 = num_str.parse().ok()?;

    if pin >= GPIO_COUNT {
        return None;
    }

    Some(pin)
}

/// Read an integer key, falling back to `default` when absent
fn integer(section: &toml::Value, path: &str, default: i64, errors: &mut Vec<String>) -> i64 {
    let key = path.rsplit('.').next().unwrap_or(path);
    match section.get(key) {
        None => default,
        Some(toml::Value::Integer(n)) => *n,
        Some(_) => {
            errors.push(format!("{} must be an integer", path));
            default
        }
    }
}

/// Write the generated constants to $OUT_DIR/board_config.rs
fn generate_config(display: &DisplaySection, pins: &PinsSection) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let code = format!(
        "// Generated by build.rs from display.toml - do not edit\n\
        \n\
        /// Number of digits on the module\n\
        pub const DIGITS: usize = {digits};\n\
        /// Brightness at power-up\n\
        pub const BRIGHTNESS: u8 = {brightness};\n\
        /// Settle time per bus line transition\n\
        pub const BIT_DELAY_US: u32 = {bit_delay_us};\n\
        /// Pause between scroll frames\n\
        pub const SCROLL_FRAME_MS: u32 = {scroll_frame_ms};\n\
        /// Text scrolled after the count-up\n\
        pub const BANNER: &str = {banner:?};\n\
        /// Clock line GPIO\n\
        pub const CLK_GPIO: u8 = {clk};\n\
        /// Data line GPIO\n\
        pub const DIO_GPIO: u8 = {dio};\n\
        \n\
        /// Take the configured clock and data pins\n\
        pub fn bus_pins(\n    \
            p: embassy_rp::Peripherals,\n\
        ) -> (\n    \
            embassy_rp::Peri<'static, embassy_rp::gpio::AnyPin>,\n    \
            embassy_rp::Peri<'static, embassy_rp::gpio::AnyPin>,\n\
        ) {{\n    \
            (p.PIN_{clk}.into(), p.PIN_{dio}.into())\n\
        }}\n",
        digits = display.digits,
        brightness = display.brightness,
        bit_delay_us = display.bit_delay_us,
        scroll_frame_ms = display.scroll_frame_ms,
        banner = display.banner,
        clk = pins.clk,
        dio = pins.dio,
    );

    fs::write(out_dir.join("board_config.rs"), code).unwrap();
    println!("cargo:warning=display.toml validated successfully");
}

/// Abort the build with a boxed list of problems
fn fail(title: &str, details: &[String]) -> ! {
    let body = if details.is_empty() {
        String::new()
    } else {
        format!(
            "╠══════════════════════════════════════════════════════════════════╣\n{}\n",
            details
                .iter()
                .flat_map(|d| d.lines().map(str::to_string).collect::<Vec<_>>())
                .map(|line| {
                    let truncated = if line.chars().count() > 62 {
                        format!("{}...", line.chars().take(59).collect::<String>())
                    } else {
                        line
                    };
                    format!("║  • {:<62} ║", truncated)
                })
                .collect::<Vec<_>>()
                .join("\n")
        )
    };

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        {}\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
