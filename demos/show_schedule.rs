use matchday::date::{self, ClockMode};
use matchday::view::{rows, select, View, EMPTY_MESSAGE};
use matchday::{ScheduleClient, ScheduleStore};

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    let base_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:8000".to_string());
    let leagues: Vec<String> = args.collect();

    let client = ScheduleClient::new(&base_url);
    let mut store = ScheduleStore::new();
    for league in &leagues {
        match client.refresh(&mut store, league).await {
            Ok(count) => println!("{league}: {count} fixtures"),
            Err(e) => eprintln!("{league}: {e}"),
        }
    }

    let now = date::civil_now(ClockMode::Broadcast);
    let mut views = vec![View::Today, View::Tomorrow, View::NextUp, View::TodayAndTomorrow];
    views.extend(leagues.iter().map(|l| View::League(l.clone())));

    for view in views {
        match &view {
            View::League(name) => println!("\n== {name} =="),
            _ => println!("\n== {view} =="),
        }
        let table = rows(&select(&store, &view, ClockMode::Local), now);
        if table.is_empty() {
            println!("{EMPTY_MESSAGE}");
            continue;
        }
        for row in table {
            println!(
                "{:<24} {:<24} {}  {}  [{}]",
                row.home, row.away, row.date, row.time, row.status
            );
        }
    }
}
