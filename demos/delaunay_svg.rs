use plotters::prelude::*;
use rand::Rng;
use vorotwo::Triangulation;

const NUM_POINTS: usize = 200;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new("delaunay_voronoi.svg", (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root).build_cartesian_2d(0.0..100.0, 0.0..100.0)?;

    let mut dt = Triangulation::new([50.0, 50.0], 100_000.0);
    let mut rng = rand::thread_rng();
    for _ in 0..NUM_POINTS {
        dt.add_point([rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)]);
    }

    let points = dt.generators();
    let voronoi = dt.voronoi();

    // Draw Voronoi cells
    for region in &voronoi.regions {
        let mut poly: Vec<(f64, f64)> = region
            .iter()
            .map(|&i| (voronoi.cell_vertices[i][0], voronoi.cell_vertices[i][1]))
            .collect();

        chart.draw_series(std::iter::once(Polygon::new(
            poly.clone(),
            BLUE.mix(0.1).filled(),
        )))?;

        poly.push(poly[0]);
        chart.draw_series(std::iter::once(PathElement::new(poly, BLACK.mix(0.5))))?;
    }

    // Draw Delaunay edges
    for tri in dt.triangles() {
        let mut edges: Vec<(f64, f64)> = tri
            .iter()
            .map(|&v| (points[v][0], points[v][1]))
            .collect();
        edges.push(edges[0]);
        chart.draw_series(std::iter::once(PathElement::new(edges, BLUE.mix(0.6))))?;
    }

    // Draw generators
    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p[0], p[1]), 2, RED.filled())),
    )?;

    root.present()?;
    println!("Output saved to delaunay_voronoi.svg");
    Ok(())
}
