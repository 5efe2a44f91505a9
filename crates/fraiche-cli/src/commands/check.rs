use crate::commands::parse_date;
use chrono::Utc;
use fraiche_core::enrich::status;
use fraiche_core::error::FraicheError;

pub fn run(expiry: &str) -> Result<(), FraicheError> {
    let expiry_date = parse_date(expiry)?;
    let now = Utc::now();

    let days = status::days_until(expiry_date, now);
    let verdict = status::classify(expiry_date, now);

    if days < 0 {
        println!("{verdict}: expired {} day(s) ago", -days);
    } else {
        println!("{verdict}: {days} day(s) remaining");
    }

    Ok(())
}
