mod cli;
mod console;
mod infra;
mod routes;
mod server;

use gate_access::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
