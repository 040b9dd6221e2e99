//! Implementation of `aoc25 circuits <file>`.
//!
//! Reads one `x,y,z` junction box per line, indexes them in a k-d tree and
//! collects the pairs between each box and its nearest neighbours. Pairs are
//! then connected shortest first:
//!
//! - after `--connections` pairs, the three largest circuits are measured and
//!   their sizes multiplied (the circuit volume);
//! - connecting continues until every box is in one circuit, and the product
//!   of the X coordinates of the closing pair is the distance from the wall.
//!
//! Exit codes: 0 = success, 1 = the candidate pairs never join every box,
//! 2 = unreadable input.
use std::io::Write;

use aoc25_core::{KdTree, Point3, PointPair, UnionFind, nearest_pairs};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;

/// Number of circuits multiplied into the volume.
const LARGEST_CIRCUITS: usize = 3;

/// Answers for one circuits run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitReport {
    /// Junction boxes read.
    pub boxes: usize,
    /// Distinct candidate pairs from the neighbour search.
    pub candidate_pairs: usize,
    /// Sizes of the largest circuits after the requested connections,
    /// largest first.
    pub largest_circuits: Vec<usize>,
    /// Product of [`CircuitReport::largest_circuits`].
    pub volume: u64,
    /// Product of the X coordinates of the pair that joined the last two
    /// circuits, if the candidate pairs ever joined everything.
    pub wall_distance: Option<i64>,
    /// Circuits left once every candidate pair has been tried.
    pub remaining_circuits: usize,
}

/// Parses one junction box per non-blank line.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] for a line that is not three
/// comma-separated finite numbers.
pub fn parse_boxes(content: &str) -> Result<Vec<Point3>, CliError> {
    let mut boxes = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parse_failed = |detail: String| CliError::ParseFailed {
            line: index + 1,
            detail,
        };

        let coords = line
            .split(',')
            .map(|field| {
                let field = field.trim();
                match field.parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(v),
                    Ok(_) | Err(_) => Err(format!("invalid coordinate {field:?}")),
                }
            })
            .collect::<Result<Vec<f64>, String>>()
            .map_err(parse_failed)?;
        let &[x, y, z] = coords.as_slice() else {
            return Err(parse_failed(format!(
                "expected 3 coordinates, found {}",
                coords.len()
            )));
        };
        boxes.push(Point3::new(x, y, z));
    }
    Ok(boxes)
}

/// Connects `boxes` shortest pair first and measures the resulting circuits.
///
/// # Errors
///
/// Returns [`CliError::TooFewBoxes`] for fewer than two boxes.
pub fn wire(
    boxes: &[Point3],
    neighbours: usize,
    connections: usize,
) -> Result<CircuitReport, CliError> {
    if boxes.len() < 2 {
        return Err(CliError::TooFewBoxes { found: boxes.len() });
    }

    let tree = KdTree::build(boxes.iter().copied());
    let pairs = nearest_pairs(&tree, neighbours);
    let mut circuits = UnionFind::new(boxes.len());

    let mut largest: Option<Vec<usize>> = None;
    let mut closing: Option<PointPair> = None;
    for (made, pair) in pairs.iter().enumerate() {
        if made == connections {
            largest = Some(largest_circuits(&mut circuits));
        }
        if circuits.union(pair.a, pair.b) && circuits.component_count() == 1 {
            tracing::debug!(a = pair.a, b = pair.b, made, "all junction boxes connected");
            closing = Some(*pair);
        }
        if largest.is_some() && closing.is_some() {
            break;
        }
    }
    let largest = match largest {
        Some(sizes) => sizes,
        None => largest_circuits(&mut circuits),
    };

    let volume = largest.iter().map(|&s| s as u64).product();
    // Saturating float-to-int conversion.
    let wall_distance = closing.map(|pair| (boxes[pair.a].x * boxes[pair.b].x) as i64);

    Ok(CircuitReport {
        boxes: boxes.len(),
        candidate_pairs: pairs.len(),
        largest_circuits: largest,
        volume,
        wall_distance,
        remaining_circuits: circuits.component_count(),
    })
}

fn largest_circuits(circuits: &mut UnionFind) -> Vec<usize> {
    let mut sizes: Vec<usize> = circuits
        .component_sizes()
        .into_iter()
        .map(|(_, size)| size)
        .collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.truncate(LARGEST_CIRCUITS);
    sizes
}

/// Runs the `circuits` command.
///
/// The volume is printed even when the boxes never fully connect; the
/// missing wall distance is then reported as an error.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 for malformed input and exit code 1
/// when the candidate pairs leave more than one circuit.
pub fn run(
    content: &str,
    neighbours: usize,
    connections: usize,
    format: OutputFormat,
) -> Result<(), CliError> {
    let boxes = parse_boxes(content)?;
    let report = wire(&boxes, neighbours, connections)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &report),
        OutputFormat::Json => print_json(&mut out, &report),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })?;

    if report.wall_distance.is_none() {
        return Err(CliError::Disconnected {
            circuits: report.remaining_circuits,
            neighbours,
        });
    }
    Ok(())
}

fn print_human<W: Write>(w: &mut W, report: &CircuitReport) -> std::io::Result<()> {
    writeln!(
        w,
        "The volume of the three largest circuits is {}",
        report.volume
    )?;
    if let Some(distance) = report.wall_distance {
        writeln!(w, "The distance from the wall is {distance}")?;
    }
    Ok(())
}

fn print_json<W: Write>(w: &mut W, report: &CircuitReport) -> std::io::Result<()> {
    serde_json::to_writer(&mut *w, report)?;
    writeln!(w)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use super::*;

    const EXAMPLE: &str = "162,817,812\n57,618,57\n906,360,560\n592,479,940\n352,342,300\n\
                           466,668,158\n542,29,236\n431,825,988\n739,650,466\n52,470,668\n\
                           216,146,977\n819,987,18\n117,168,530\n805,96,715\n346,949,466\n\
                           970,615,88\n941,993,340\n862,61,35\n984,92,344\n425,690,689\n";

    #[test]
    fn parse_skips_blank_lines() {
        let boxes = parse_boxes("1,2,3\n\n  4, 5 ,6  \n").expect("valid");
        assert_eq!(boxes, vec![Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)]);
    }

    #[test]
    fn parse_reports_line_number() {
        let err = parse_boxes("1,2,3\n4,5\n").expect_err("two coordinates");
        match err {
            CliError::ParseFailed { line, detail } => {
                assert_eq!(line, 2);
                assert!(detail.contains("expected 3"), "{detail}");
            }
            other => panic!("expected ParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_numbers() {
        let err = parse_boxes("1,2,x\n").expect_err("not a number");
        assert!(err.message().contains("\"x\""), "{}", err.message());
        assert!(parse_boxes("1,2,inf\n").is_err());
    }

    #[test]
    fn example_volume_after_ten_connections() {
        let boxes = parse_boxes(EXAMPLE).expect("valid");
        let report = wire(&boxes, 10, 10).expect("enough boxes");
        assert_eq!(report.boxes, 20);
        assert_eq!(report.largest_circuits, vec![5, 4, 2]);
        assert_eq!(report.volume, 40);
        assert_eq!(report.wall_distance, Some(25272));
        assert_eq!(report.remaining_circuits, 1);
    }

    #[test]
    fn volume_uses_every_pair_when_connections_exceed_pairs() {
        let boxes = parse_boxes(EXAMPLE).expect("valid");
        let report = wire(&boxes, 10, 1000).expect("enough boxes");
        assert_eq!(report.largest_circuits, vec![20]);
        assert_eq!(report.volume, 20);
    }

    #[test]
    fn single_neighbour_leaves_circuits_open() {
        let boxes = parse_boxes(EXAMPLE).expect("valid");
        let report = wire(&boxes, 1, 10).expect("enough boxes");
        assert_eq!(report.candidate_pairs, 14);
        assert_eq!(report.wall_distance, None);
        assert_eq!(report.remaining_circuits, 6);
    }

    #[test]
    fn three_boxes_on_a_line() {
        let boxes = parse_boxes("0,0,0\n10,0,0\n20,0,0\n").expect("valid");
        let report = wire(&boxes, 2, 1).expect("enough boxes");
        assert_eq!(report.largest_circuits, vec![2, 1]);
        assert_eq!(report.volume, 2);
        // (0, 1) then (1, 2) closes the circuit.
        assert_eq!(report.wall_distance, Some(200));
    }

    #[test]
    fn one_box_is_too_few() {
        let boxes = parse_boxes("1,1,1\n").expect("valid");
        assert!(matches!(
            wire(&boxes, 10, 10),
            Err(CliError::TooFewBoxes { found: 1 })
        ));
    }

    #[test]
    fn json_report_has_all_fields() {
        let boxes = parse_boxes(EXAMPLE).expect("valid");
        let report = wire(&boxes, 10, 10).expect("enough boxes");
        let mut buf = Vec::new();
        print_json(&mut buf, &report).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid JSON");
        assert_eq!(value["volume"], 40);
        assert_eq!(value["wall_distance"], 25272);
        assert_eq!(value["largest_circuits"], serde_json::json!([5, 4, 2]));
    }

    #[test]
    fn human_report_lines() {
        let boxes = parse_boxes(EXAMPLE).expect("valid");
        let report = wire(&boxes, 10, 10).expect("enough boxes");
        let mut buf = Vec::new();
        print_human(&mut buf, &report).expect("write");
        let text = String::from_utf8(buf).expect("utf-8");
        assert_eq!(
            text,
            "The volume of the three largest circuits is 40\n\
             The distance from the wall is 25272\n"
        );
    }
}
