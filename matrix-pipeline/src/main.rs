use std::env;

use matrix_pipeline::{Pipeline, RunOutcome};
use numbers_api::HttpNumbersService;

const DEFAULT_BASE_URL: &str = "https://recruitment-test.investcloud.com";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let size: usize = args.get(1).unwrap_or(&"1000".to_string()).parse()?;
    let base_url = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let service = HttpNumbersService::new(base_url)?;
    let pipeline = Pipeline::new(service);

    match pipeline.run(size).await? {
        RunOutcome::Completed(report) => {
            println!("{}", report.response);
            println!("Hash submission took {} ms", report.elapsed.as_millis());
        }
        RunOutcome::Aborted {
            matrix,
            failed_rows,
        } => {
            println!("matrix {matrix} is invalid ({failed_rows} rows failed), try again");
        }
    }

    Ok(())
}
