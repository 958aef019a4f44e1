//! Room service: in-memory room collection over HTTP.

use dormitory::config::ROOM_SERVICE_PORT;
use dormitory::resource::Room;
use dormitory::server::run_resource_service;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_resource_service::<Room>(ROOM_SERVICE_PORT).await
}
