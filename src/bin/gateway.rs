//! API gateway: forwards /students, /rooms and /bookings to their services.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dormitory::server::run_gateway().await
}
