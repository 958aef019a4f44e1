//! Booking service: in-memory booking collection over HTTP.

use dormitory::config::BOOKING_SERVICE_PORT;
use dormitory::resource::Booking;
use dormitory::server::run_resource_service;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_resource_service::<Booking>(BOOKING_SERVICE_PORT).await
}
