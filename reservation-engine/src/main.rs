use anyhow::Context;
use chrono::{Duration, Local};
use reservation_engine::{
    CancelReservationResponse, CreateReservationResponse, ReservationService, RestaurantConfig,
    setup_environment,
};
use shared::models::ReservationRequest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    let settings = setup_environment();

    // 2. Restaurant rules
    let config = RestaurantConfig::from_env().context("invalid restaurant configuration")?;
    tracing::info!(
        opening = config.opening_hour,
        closing = config.closing_hour,
        tables = config.tables.len(),
        "Reservation engine starting"
    );

    let service = ReservationService::from_config(&settings, config);

    // 3. Today's and tomorrow's slots
    let today = Local::now().date_naive();
    for date in [today, today + Duration::days(1)] {
        let slots = service.generate_time_slots(date);
        println!("{date}");
        println!("{}", serde_json::to_string_pretty(&slots)?);
    }

    // 4. One booking round trip, a few days out
    let date = today + Duration::days(3);
    let table = service
        .get_available_tables(date, "19:00")?
        .into_iter()
        .find(|t| t.fits_party(2));
    let Some(table) = table else {
        tracing::warn!(%date, "No table free at 19:00, skipping booking demo");
        return Ok(());
    };

    let request = ReservationRequest {
        date,
        time: "19:00".to_string(),
        guests: 2,
        table_id: table.id,
        name: "Demo Guest".to_string(),
        email: "guest@example.com".to_string(),
        phone: "555-123-4567".to_string(),
        special_requests: None,
    };

    let created = service.create_reservation(request).await;
    let response = CreateReservationResponse::from(created.clone());
    println!("{}", serde_json::to_string_pretty(&response)?);

    if let Ok(reservation) = created {
        let fetched = service.get_reservation(&reservation.id)?;
        tracing::info!(reservation = %fetched.id, status = ?fetched.status, "Fetched reservation");

        let cancelled = CancelReservationResponse::from(service.cancel_reservation(&fetched.id).await);
        println!("{}", serde_json::to_string_pretty(&cancelled)?);
    }

    Ok(())
}
