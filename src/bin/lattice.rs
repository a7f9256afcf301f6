//! Build a lattice, refine it, and print it along with its virtual corners
use anyhow::bail;
use clap::Parser;
use log::{debug, info};
use vincenty::prelude::*;
use vincenty::{render_lattice, render_point, CoordinateFormat, DirectionFormat};

/// Lattice: Construct a coordinate lattice on the WGS84 ellipsoid from two
/// opposite corners, or from a center and a radius, and print it.
#[derive(Parser, Debug)]
#[clap(name = "lattice")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Southwest corner, "lat,lon" in degrees
    #[clap(long, allow_hyphen_values = true, requires = "ne")]
    sw: Option<GeodeticPoint>,

    /// Northeast corner, "lat,lon" in degrees
    #[clap(long, allow_hyphen_values = true, requires = "sw")]
    ne: Option<GeodeticPoint>,

    /// Center, "lat,lon" in degrees
    #[clap(long, allow_hyphen_values = true, requires = "radius", conflicts_with_all = ["sw", "ne"])]
    center: Option<GeodeticPoint>,

    /// Distance from the center to the edge midpoints, in meters
    #[clap(short, long)]
    radius: Option<f64>,

    /// Number of virtual cells along each side
    #[clap(long, default_value_t = vincenty::DEFAULT_VIRTUAL_SIZE)]
    virtual_size: usize,

    /// Split until the real spacing is at most this many meters
    #[clap(short, long)]
    split_until: Option<f64>,

    /// Coordinate format: raw, dd, dm, or dms
    #[clap(short, long, default_value = "dd")]
    format: CoordinateFormat,

    /// Number of decimals
    #[clap(short = 'd', long, default_value_t = 6)]
    decimals: usize,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    debug!("{options:#?}");

    let mut lattice = match (options.center, options.radius, options.sw, options.ne) {
        (Some(center), Some(radius), _, _) => {
            Lattice::from_center(center, radius, options.virtual_size)?
        }
        (None, _, Some(sw), Some(ne)) => {
            let mut lattice = Lattice::from_corners(sw, ne);
            lattice.set_virtual_size(options.virtual_size)?;
            lattice
        }
        _ => bail!("Expected either --sw and --ne, or --center and --radius"),
    };

    if let Some(max_spacing) = options.split_until {
        lattice.split_until(max_spacing);
    }
    info!(
        "{0}x{0} lattice, spacing {1} m",
        lattice.size(),
        lattice.real_spacing()
    );

    let style = Style::new(options.format, DirectionFormat::Deg, options.decimals);
    println!("# Real lattice, {0}x{0}", lattice.size());
    print!("{}", render_lattice(&lattice, &style));

    let n = lattice.virtual_size();
    println!("# Virtual corners, virtual size {n}");
    for (name, (i, j)) in [("NW", (0, 0)), ("NE", (0, n)), ("SW", (n, 0)), ("SE", (n, n))] {
        println!("{name} {}", render_point(&lattice.at(i, j), &style));
    }
    if let Some(spacing) = lattice.virtual_spacing() {
        println!("# Virtual spacing {spacing:.3} m");
    }
    Ok(())
}
