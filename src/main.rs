use anyhow::Result;
use booked_tables::conf;
use booked_tables::display::component::ReservationDisplay;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let client = reqwest::Client::new();
    let mut display = ReservationDisplay::new(conf::endpoint());

    // first frame goes out before the fetch is issued, spinner and all
    print!("{}", display.view().to_text());

    display.activate(&client);
    display.resolve().await;

    print!("{}", display.view().to_text());
    Ok(())
}
