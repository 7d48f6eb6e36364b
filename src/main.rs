//! `fuzzy-aqi [--config <path>] [serve]`
//! `fuzzy-aqi [--config <path>] compute <pm25> <pm10> <co> <no2> <o3> <so2>`

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fuzzy_aqi::server;
use fuzzy_aqi::settings::Settings;
use fuzzy_aqi::standard::{assess_with, Readings};

const USAGE: &str = "usage: fuzzy-aqi [--config <path>] [serve | compute <pm25> <pm10> <co> <no2> <o3> <so2>]";

enum Command {
    Serve,
    Compute(Readings),
}

fn parse_args(mut args: Vec<String>) -> Result<(Option<String>, Command), String> {
    let mut config = None;
    if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            return Err("--config needs a path".into());
        }
        config = Some(args.remove(1));
        args.remove(0);
    }
    match args.first().map(String::as_str) {
        None | Some("serve") if args.len() <= 1 => Ok((config, Command::Serve)),
        Some("compute") if args.len() == 7 => {
            let mut values = [0.0; 6];
            for (value, arg) in values.iter_mut().zip(&args[1..]) {
                *value = arg.parse().map_err(|_| format!("'{arg}' is not a number"))?;
            }
            let [pm25, pm10, co, no2, o3, so2] = values;
            Ok((config, Command::Compute(Readings::new(pm25, pm10, co, no2, o3, so2))))
        }
        _ => Err(USAGE.into()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let (config, command) = match parse_args(std::env::args().skip(1).collect()) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };
    let settings = match Settings::load(config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // built once here and shared for the lifetime of the process
    let engine = match settings.engine() {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "cannot build the inference engine");
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Compute(readings) => match assess_with(&engine, &readings) {
            Ok(assessment) => {
                let band = assessment.band;
                println!("AQI: {:.1}", assessment.aqi);
                println!("Kategori: {}", band.label);
                println!("Rekomendasi: {}", band.recommendation);
                for d in &assessment.dominant {
                    println!("  {}: {} ({:.2})", d.pollutant, d.term, d.degree);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Terjadi kesalahan dalam perhitungan: {e}");
                ExitCode::FAILURE
            }
        },
        Command::Serve => {
            let rules = engine.rule_base().len();
            let app = server::router(Arc::new(engine));
            let listener = match tokio::net::TcpListener::bind(settings.server.address.as_str()).await {
                Ok(listener) => listener,
                Err(e) => {
                    error!(address = %settings.server.address, error = %e, "cannot bind");
                    return ExitCode::FAILURE;
                }
            };
            info!(address = %settings.server.address, rules, "listening");
            if let Err(e) = axum::serve(listener, app).await {
                error!(error = %e, "server stopped");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn serve_is_the_default() {
        assert!(matches!(parse_args(args("")), Ok((None, Command::Serve))));
        assert!(matches!(parse_args(args("serve")), Ok((None, Command::Serve))));
    }

    #[test]
    fn compute_takes_six_numbers_in_input_order() {
        match parse_args(args("--config my.toml compute 1 2 3 4 5 6")) {
            Ok((Some(config), Command::Compute(r))) => {
                assert_eq!(config, "my.toml");
                assert_eq!(r.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
            }
            _ => panic!("expected compute"),
        }
        assert!(parse_args(args("compute 1 2 3")).is_err());
        assert!(parse_args(args("compute 1 2 x 4 5 6")).is_err());
        assert!(parse_args(args("--config")).is_err());
    }
}
