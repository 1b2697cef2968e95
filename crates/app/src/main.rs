//! innkeep - hotel reservation record keeper
//!
//! Opens the configured ledger and walks one hotel and one customer through
//! a reservation.

use innkeep_core::{config, Ledger, LedgerConfig, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting innkeep");

    if let Err(e) = run() {
        tracing::error!("innkeep failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = config::default_config_path()?;
    let config = LedgerConfig::load_or_default(&config_path)?;
    tracing::info!(backend = ?config.backend, "Opening ledger");

    let ledger = Ledger::open(&config)?;
    demo(&ledger)?;
    Ok(())
}

/// Create a hotel and a customer, then book room 231. Returns the hotel ID.
fn demo(ledger: &Ledger) -> Result<String> {
    let mut hotel = ledger.new_hotel();
    hotel.create("Fiesta Americana")?;
    hotel.display();
    hotel.modify("Hilton")?;

    let mut customer = ledger.new_customer();
    customer.create("Mdiaz Malagon")?;
    customer.display();

    hotel.reserve_room(231u32, &customer)?;
    tracing::info!(hotel_id = hotel.id(), customer_id = customer.id(), "Room 231 booked");

    Ok(hotel.id().to_string())
}
