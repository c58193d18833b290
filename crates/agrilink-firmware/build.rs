//! Bakes the uplink settings from `.env` into the firmware image.

const SETTINGS: [&str; 4] = [
    "AGRILINK_APN",
    "AGRILINK_ENDPOINT",
    "AGRILINK_API_KEY",
    "AGRILINK_UPLOAD_INTERVAL_SECS",
];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rustc-link-arg=-Tlinkall.x");

    // A missing .env is fine; the firmware falls back to its defaults.
    let _ = dotenvy::dotenv();

    for key in SETTINGS {
        println!("cargo:rerun-if-env-changed={key}");
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
