//! Intersection of a triangle and a kite on a 300x300 canvas.
//!
//! ```text
//! cargo run --example scenario
//! RUST_LOG=planar=trace cargo run --example scenario
//! ```

use planar::{Line, PlanarError, Point, PolygonCanvas};

const WIDTH: usize = 300;
const HEIGHT: usize = 300;

fn main() -> Result<(), PlanarError> {
    // Default: WARN for everything, INFO for planar.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planar=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut canvas = PolygonCanvas::new(WIDTH, HEIGHT)?;

    let p1 = Point::new(50.0, 120.0);
    let p2 = Point::new(250.0, 120.0);
    let p3 = Point::new(150.0, 220.0);
    canvas.add_points(&[p1, p2, p3]);
    canvas.add_lines(&[Line::new(p1, p2)?, Line::new(p2, p3)?, Line::new(p3, p1)?]);
    canvas.register_polygon(vec![p1, p2, p3])?;

    let p4 = Point::new(100.0, 200.0);
    let p5 = Point::new(200.0, 200.0);
    let p6 = Point::new(150.0, 70.0);
    let p7 = Point::new(150.0, 250.0);
    canvas.add_points(&[p4, p5, p6, p7]);
    canvas.add_lines(&[
        Line::new(p4, p6)?,
        Line::new(p6, p5)?,
        Line::new(p5, p7)?,
        Line::new(p7, p4)?,
    ]);
    canvas.register_polygon(vec![p4, p5, p6, p7])?;

    canvas.compute_intersections();
    println!(
        "intersection points: {} ({} interior)",
        canvas.intersections().len(),
        canvas.interior_intersections().len()
    );
    for point in canvas.interior_intersections().keys() {
        println!("  {point}");
    }

    let region = canvas.assemble_region()?;
    println!("centroid: {}", region.centroid);
    for edge in region.edges() {
        println!("  {edge}");
    }

    println!("occupied cells: {}", canvas.canvas().occupied().count());
    Ok(())
}
