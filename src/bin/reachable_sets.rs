// Reachable velocity sets of a differential drive and a car-like robot
//
// usage: reachable_sets [GEOMETRY.toml] [--gnuplot] [-v...]
//
// Writes scatter plots of the sampled (v, ω) sets to ./img/.

use std::error::Error;
use std::f64::consts::FRAC_PI_4;

use log::{info, LevelFilter};

use plotlib::page::Page;
use plotlib::repr::Plot;
use plotlib::style::{PointMarker, PointStyle};
use plotlib::view::ContinuousView;

use kinematic_models::common::CanonicalVelocity;
use kinematic_models::sampling::VelocityBounds;
use kinematic_models::utils::visualization::{self, colors, Visualizer};
use kinematic_models::{ActuatorRange, CarLike, DiffDrive, ReachableSetSampler, RobotGeometry};

const WHEEL_SPEED_LIMIT: f64 = 10.0; // [rad/s]
const CAR_SPEED_LIMIT: f64 = 1.0; // [m/s]
const STEERING_LIMIT: f64 = FRAC_PI_4; // [rad]
const SAMPLES: usize = 21;

#[derive(Debug, PartialEq)]
struct Args {
    geometry_path: Option<String>,
    gnuplot: bool,
    level: LevelFilter,
}

/// Parse `[GEOMETRY.toml] [--gnuplot] [-v...]`; each `v` raises the log level one step
fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Args, String> {
    let mut args = Args { geometry_path: None, gnuplot: false, level: LevelFilter::Info };
    let mut verbosity = 0;
    for arg in argv {
        if arg == "--gnuplot" {
            args.gnuplot = true;
        } else if arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v') {
            verbosity += arg.len() - 1;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option {}", arg));
        } else if args.geometry_path.is_some() {
            return Err(format!("unexpected argument {}", arg));
        } else {
            args.geometry_path = Some(arg);
        }
    }
    args.level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Ok(args)
}

fn logger_init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            if record.level() > log::Level::Info {
                out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
            } else {
                out.finish(format_args!("[{}] {}", record.level(), message))
            }
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
}

fn report(name: &str, points: &[CanonicalVelocity]) {
    match VelocityBounds::of(points) {
        Some(b) => info!(
            "{}: {} points, v in [{:.3}, {:.3}] m/s, ω in [{:.3}, {:.3}] rad/s",
            name, points.len(), b.v_min, b.v_max, b.omega_min, b.omega_max
        ),
        None => info!("{}: empty set", name),
    }
}

fn save_svg(points: &[CanonicalVelocity], colour: &str, path: &str) -> Result<(), String> {
    let data: Vec<(f64, f64)> = points.iter().map(|p| (p.v, p.omega)).collect();
    let s0: Plot = Plot::new(data).point_style(
        PointStyle::new()
            .marker(PointMarker::Circle)
            .colour(colour)
            .size(2.),
    );

    let v = ContinuousView::new()
        .add(s0)
        .x_label("v")
        .y_label("ω");

    Page::single(&v).save(path).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().skip(1))?;
    logger_init(args.level)?;

    let geometry = match &args.geometry_path {
        Some(path) => RobotGeometry::load(path)?,
        None => RobotGeometry::default(),
    };
    info!("Robot geometry: {:?}", geometry);

    let diff_drive = ReachableSetSampler::new(
        DiffDrive::new(&geometry)?,
        ActuatorRange::symmetric(WHEEL_SPEED_LIMIT, SAMPLES)?,
        ActuatorRange::symmetric(WHEEL_SPEED_LIMIT, SAMPLES)?,
    )?;
    let diff_points = diff_drive.sample()?;
    report("Differential drive", &diff_points);

    let car = ReachableSetSampler::new(
        CarLike::new(&geometry)?,
        ActuatorRange::symmetric(CAR_SPEED_LIMIT, SAMPLES)?,
        ActuatorRange::symmetric(STEERING_LIMIT, SAMPLES)?,
    )?;
    let car_points = car.sample()?;
    report("Car-like", &car_points);

    std::fs::create_dir_all("./img")?;
    save_svg(&diff_points, colors::DIFF_DRIVE, "./img/reachable_diff_drive.svg")?;
    save_svg(&car_points, colors::CAR_LIKE, "./img/reachable_car.svg")?;
    info!("Saved ./img/reachable_diff_drive.svg and ./img/reachable_car.svg");

    if args.gnuplot {
        let all: Vec<CanonicalVelocity> = diff_points.iter().chain(&car_points).copied().collect();
        let mut vis = Visualizer::velocity_space();
        if let Some(bounds) = VelocityBounds::of(&all) {
            vis.fit_to(&bounds, 0.05);
        }
        vis.set_title("Reachable velocities")
            .plot_reachable_set(
                &diff_points,
                &visualization::PointStyle::new(colors::DIFF_DRIVE, "Differential drive"),
            )
            .plot_reachable_set(
                &car_points,
                &visualization::PointStyle::new(colors::CAR_LIKE, "Car-like").with_symbol('x'),
            );
        vis.save_png("./img/reachable_sets.png", 800, 600)?;
        info!("Saved ./img/reachable_sets.png");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, String> {
        parse_args(argv.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, Args { geometry_path: None, gnuplot: false, level: LevelFilter::Info });
    }

    #[test]
    fn test_verbosity_counts_every_v() {
        assert_eq!(parse(&["-v"]).unwrap().level, LevelFilter::Debug);
        assert_eq!(parse(&["-v", "-v"]).unwrap().level, LevelFilter::Trace);
        assert_eq!(parse(&["-vv"]).unwrap().level, LevelFilter::Trace);
        assert_eq!(parse(&["-vvv"]).unwrap().level, LevelFilter::Trace);
    }

    #[test]
    fn test_geometry_and_gnuplot() {
        let args = parse(&["robot.toml", "--gnuplot", "-v"]).unwrap();
        assert_eq!(args.geometry_path.as_deref(), Some("robot.toml"));
        assert!(args.gnuplot);
        assert_eq!(args.level, LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_flags_rejected() {
        assert!(parse(&["-x"]).is_err());
        assert!(parse(&["-vx"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["-"]).is_err());
        assert!(parse(&["a.toml", "b.toml"]).is_err());
    }
}
