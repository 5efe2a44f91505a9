use fraiche_core::error::FraicheError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), FraicheError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
