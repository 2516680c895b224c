use shademap::models::{Geometry, Region};
use shademap::viz::{self, EdgeStyle};
use shademap::{ShadeFormula, assign};
use std::fs;
use std::path::PathBuf;

fn square(index: usize, name: &str, lon0: f64, lat0: f64, size: f64) -> Region {
    Region {
        index,
        name: name.into(),
        geometry: Some(Geometry::Polygon {
            coordinates: vec![vec![
                vec![lon0, lat0],
                vec![lon0 + size, lat0],
                vec![lon0 + size, lat0 + size],
                vec![lon0, lat0 + size],
                vec![lon0, lat0],
            ]],
        }),
    }
}

fn sample_regions() -> Vec<Region> {
    vec![
        square(0, "West", -150.0, -20.0, 40.0),
        square(1, "Middle", -20.0, -20.0, 40.0),
        square(2, "East", 110.0, -20.0, 40.0),
        Region {
            index: 3,
            name: "Pointland".into(),
            geometry: Some(Geometry::Unsupported),
        },
        Region {
            index: 4,
            name: "Void".into(),
            geometry: None,
        },
    ]
}

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str) -> Vec<u8> {
    let tmp = tempfile::tempdir().unwrap();
    let path: PathBuf = tmp.path().join(name);
    maker(&path);
    let bytes = fs::read(&path).expect("file created");
    assert!(!bytes.is_empty(), "{name} has content");
    bytes
}

#[test]
fn png_and_svg_both_render() {
    let regions = sample_regions();
    let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
    let table = assign(&names, ShadeFormula::Normalized);
    for edges in [EdgeStyle::Drawn, EdgeStyle::None] {
        write_and_check(
            |p| viz::render_map(&regions, &table, p, 400, 200, edges).unwrap(),
            "map.png",
        );
    }
    let svg = write_and_check(
        |p| viz::render_map(&regions, &table, p, 400, 200, EdgeStyle::Drawn).unwrap(),
        "map.svg",
    );
    let svg = String::from_utf8(svg).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("polygon"));
}

#[test]
fn empty_regions_is_error() {
    let tmp = tempfile::tempdir().unwrap();
    let table = assign::<&str>(&[], ShadeFormula::Normalized);
    let e = viz::render_map(&[], &table, tmp.path().join("empty.png"), 400, 200, EdgeStyle::Drawn);
    assert!(e.is_err());
}

#[test]
fn region_missing_from_table_is_error() {
    let tmp = tempfile::tempdir().unwrap();
    let regions = sample_regions();
    let table = assign(&["West"], ShadeFormula::Normalized);
    let e = viz::render_map(
        &regions,
        &table,
        tmp.path().join("partial.png"),
        400,
        200,
        EdgeStyle::None,
    );
    assert!(e.unwrap_err().to_string().contains("Middle"));
}
