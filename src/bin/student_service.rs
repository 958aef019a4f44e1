//! Student service: in-memory student collection over HTTP.

use dormitory::config::STUDENT_SERVICE_PORT;
use dormitory::resource::Student;
use dormitory::server::run_resource_service;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_resource_service::<Student>(STUDENT_SERVICE_PORT).await
}
