use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use natal_chart::{
    ChartConfig, ChartResult, chart_angles, chart_from_json, compute_chart, sign_from_longitude,
};
use natal_time::{BirthInput, BirthMoment, jd_to_calendar};

#[derive(Parser)]
#[command(name = "natal", about = "Natal chart calculator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a natal chart
    Chart {
        /// Local civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local clock time (HH:MM)
        #[arg(long)]
        time: String,
        /// Latitude in degrees (north positive)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// UTC offset in hours (default: round(lon / 15))
        #[arg(long, allow_negative_numbers = true)]
        tz: Option<f64>,
        /// Print wire JSON instead of a table
        #[arg(long)]
        json: bool,
        /// TOML file with chart options
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Compute a chart from a JSON request (file path or - for stdin)
    ChartJson {
        /// Request file, or - to read stdin
        input: String,
        /// TOML file with chart options
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Sign and degree for a tropical longitude
    Sign {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Local sidereal time, Midheaven and Ascendant
    Angles {
        /// Local civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local clock time (HH:MM)
        #[arg(long)]
        time: String,
        /// Latitude in degrees (north positive)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// UTC offset in hours (default: round(lon / 15))
        #[arg(long, allow_negative_numbers = true)]
        tz: Option<f64>,
        /// TOML file with chart options
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Julian Day and Julian century for a local date and time
    Jd {
        /// Local civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local clock time (HH:MM)
        #[arg(long)]
        time: String,
        /// UTC offset in hours
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        tz: f64,
    },
}

fn load_config(path: Option<&Path>) -> ChartConfig {
    let Some(path) = path else {
        log::debug!("using default chart options");
        return ChartConfig::default();
    };
    ChartConfig::load(path).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    })
}

fn parse_moment(date: String, time: String, lat: f64, lon: f64, tz: Option<f64>) -> BirthMoment {
    let input = BirthInput {
        date,
        time,
        latitude: lat,
        longitude: lon,
        timezone_offset_hours: tz,
    };
    BirthMoment::try_from(&input).unwrap_or_else(|e| {
        eprintln!("Invalid birth data: {e}");
        std::process::exit(1);
    })
}

fn read_input(source: &str) -> String {
    let result = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(source)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Failed to read {source}: {e}");
        std::process::exit(1);
    })
}

fn print_json(chart: &ChartResult) {
    match chart.to_json() {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to encode chart: {e}");
            std::process::exit(1);
        }
    }
}

fn print_chart(moment: &BirthMoment, chart: &ChartResult) {
    let (y, m, d) = jd_to_calendar(moment.julian_day());
    let hours = d.fract() * 24.0;
    println!(
        "Chart for {:04}-{:02}-{:02} {:02}:{:02} (UTC{:+}) at {:.4}, {:.4}",
        moment.year(),
        moment.month(),
        moment.day(),
        moment.hour(),
        moment.minute(),
        moment.tz_offset_hours(),
        moment.latitude_deg(),
        moment.longitude_deg()
    );
    println!(
        "UT {:04}-{:02}-{:02} {:05.2}h  JD {:.5}\n",
        y,
        m,
        d.floor() as u32,
        hours,
        moment.julian_day()
    );
    for row in &chart.planets {
        let dms = sign_from_longitude(row.longitude_degrees).dms;
        println!(
            "  {:2} {:10} {:>9.4}°  {} {:11} {:>2}°{:02}'{:04.1}\"{}",
            row.name.symbol(),
            row.name.name(),
            row.longitude_degrees,
            row.sign.symbol(),
            row.sign.name(),
            dms.degrees,
            dms.minutes,
            dms.seconds,
            if row.is_retrograde { "  R" } else { "" }
        );
    }
    println!(
        "\nSun {}  Moon {}  Ascendant {}",
        chart.sun_sign.name(),
        chart.moon_sign.name(),
        chart.ascendant_sign.name()
    );
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            time,
            lat,
            lon,
            tz,
            json,
            config,
        } => {
            let config = load_config(config.as_deref());
            let moment = parse_moment(date, time, lat, lon, tz);
            let chart = compute_chart(&moment, &config);
            if json {
                print_json(&chart);
            } else {
                print_chart(&moment, &chart);
            }
        }

        Commands::ChartJson { input, config } => {
            let config = load_config(config.as_deref());
            let text = read_input(&input);
            match chart_from_json(&text, &config) {
                Ok(chart) => print_json(&chart),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Sign { lon } => {
            let info = sign_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} {} - {} deg {} min {:.1} sec ({:.4} deg in sign)",
                info.sign.symbol(),
                info.sign.name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degree_in_sign
            );
        }

        Commands::Angles {
            date,
            time,
            lat,
            lon,
            tz,
            config,
        } => {
            let config = load_config(config.as_deref());
            let moment = parse_moment(date, time, lat, lon, tz);
            let epoch = moment.julian_epoch();
            let angles = chart_angles(
                epoch.julian_day(),
                epoch.julian_century(),
                moment.latitude_deg(),
                moment.longitude_deg(),
                config.ascendant_rule,
            );
            let mc = sign_from_longitude(angles.midheaven_deg);
            let asc = sign_from_longitude(angles.ascendant_deg);
            println!("LST:       {:>9.4}° ({:.4}h)", angles.lst_deg, angles.lst_deg / 15.0);
            println!("Obliquity: {:>9.4}°", angles.obliquity_deg);
            println!(
                "MC:        {:>9.4}°  {} {:.2}°",
                angles.midheaven_deg,
                mc.sign.name(),
                mc.degree_in_sign
            );
            println!(
                "Ascendant: {:>9.4}°  {} {:.2}°",
                angles.ascendant_deg,
                asc.sign.name(),
                asc.degree_in_sign
            );
        }

        Commands::Jd { date, time, tz } => {
            let moment = parse_moment(date, time, 0.0, 0.0, Some(tz));
            let epoch = moment.julian_epoch();
            println!("JD: {:.6}", epoch.julian_day());
            println!("T:  {:.10} Julian centuries since J2000.0", epoch.julian_century());
        }
    }
}
