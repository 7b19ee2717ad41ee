mod cli;
mod demo;
mod render;

use esg_scorecard::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
