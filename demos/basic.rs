//! Basic example of ordering clients into a route.

use client_routing::client::load_clients;
use client_routing::utils::{format_duration, random_clients, render_route, RouteStatistics};
use client_routing::RouteAssembler;
use std::env;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let assembler = RouteAssembler::default();

    // Route a client export if one is given, otherwise a random instance
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        println!("Loading clients from: {}", args[1]);
        let records = load_clients(&args[1])?;

        let start_time = Instant::now();
        let ordered = assembler.route_records(&records);
        println!("Route computed in {}", format_duration(start_time.elapsed()));

        for (i, record) in ordered.iter().enumerate() {
            println!("{}. {}", i + 1, record.name);
        }
        return Ok(());
    }

    let clients = random_clients(40, 100.0, 2024);
    println!("Routing {} random clients", clients.len());

    let start_time = Instant::now();
    let plan = assembler.plan(&clients);
    let stats = RouteStatistics::from_plan(&plan, start_time.elapsed());

    println!("{}", stats.format());
    println!();

    let points: Vec<_> = plan.stops.iter().map(|stop| stop.point).collect();
    print!("{}", render_route(&points, 80, 25));

    Ok(())
}
