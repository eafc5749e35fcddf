//! Text report — render a decoded model as labeled, tab-separated rows.
//!
//! ```text
//! Number of states: 5	MSD model
//! Number of streams: 1
//! Vector length: 1
//! State lf0_s2	Number of nodes 2
//! 	Node lf0_s2_1
//! 	Mean	4.861230
//! 	Variance	0.012345
//! 	MSD	0.981234
//! 	Counter-MSD	0.018766
//! ```
//!
//! A JSON rendering of the same content is available for tooling.

use std::io::Write;

use serde::Serialize;

use crate::model::*;
use crate::Result;

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Tab-separated text, one row per quadrant.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Write the text report for `model` to `writer`.
///
/// States are numbered from 2 and nodes from 1, following the HTS naming
/// convention (`{name}_s{state}_{node}`).
pub fn render_report(model: &PdfModel, model_name: &str, writer: &mut dyn Write) -> Result<()> {
    let header = &model.header;

    writeln!(writer, "Number of states: {}\t{}", model.state_count(), header.kind())?;
    writeln!(writer, "Number of streams: {}", header.stream_count)?;
    writeln!(writer, "Vector length: {}", header.vector_length)?;

    for (i, state) in model.states.iter().enumerate() {
        writeln!(
            writer,
            "State {}\tNumber of nodes {}",
            state_name(model_name, i),
            state.node_count()
        )?;
        for (j, node) in state.nodes.iter().enumerate() {
            writeln!(writer, "\tNode {}", node_name(model_name, i, j))?;
            for &quadrant in node.layout().quadrants() {
                write!(writer, "\t{}", quadrant.label())?;
                for value in node.leading_stream(quadrant).unwrap_or(&[]) {
                    write!(writer, "\t{}", format_value(*value))?;
                }
                writeln!(writer)?;
            }
        }
    }

    Ok(())
}

/// Write `model` as pretty-printed JSON to `writer`.
pub fn render_json(model: &PdfModel, model_name: &str, writer: &mut dyn Write) -> Result<()> {
    let states = model
        .states
        .iter()
        .enumerate()
        .map(|(i, state)| JsonState {
            name: state_name(model_name, i),
            nodes: state
                .nodes
                .iter()
                .enumerate()
                .map(|(j, node)| JsonNode {
                    name: node_name(model_name, i, j),
                    mean: node.leading_stream(Quadrant::Mean).unwrap_or(&[]),
                    variance: node.leading_stream(Quadrant::Variance).unwrap_or(&[]),
                    msd: node.leading_stream(Quadrant::MsdWeight),
                    counter_msd: node.leading_stream(Quadrant::MsdCounter),
                })
                .collect(),
        })
        .collect();

    let report = JsonReport {
        model: model_name,
        msd: model.is_msd(),
        stream_count: model.header.stream_count,
        vector_length: model.header.vector_length,
        states,
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    model: &'a str,
    msd: bool,
    stream_count: i32,
    vector_length: i32,
    states: Vec<JsonState<'a>>,
}

#[derive(Serialize)]
struct JsonState<'a> {
    name: String,
    nodes: Vec<JsonNode<'a>>,
}

#[derive(Serialize)]
struct JsonNode<'a> {
    name: String,
    mean: &'a [f32],
    variance: &'a [f32],
    #[serde(skip_serializing_if = "Option::is_none")]
    msd: Option<&'a [f32]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    counter_msd: Option<&'a [f32]>,
}

fn state_name(model_name: &str, state_index: usize) -> String {
    format!("{}_s{}", model_name, state_index + 2)
}

fn node_name(model_name: &str, state_index: usize, node_index: usize) -> String {
    format!("{}_s{}_{}", model_name, state_index + 2, node_index + 1)
}

/// Format like C's `%6f`: six decimals, right-aligned to width 6.
fn format_value(value: f32) -> String {
    if value.is_nan() {
        let text = if value.is_sign_negative() { "-nan" } else { "nan" };
        format!("{:>6}", text)
    } else if value.is_infinite() {
        format!("{:>6}", if value > 0.0 { "inf" } else { "-inf" })
    } else {
        format!("{:6.6}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_node_model(msd: bool, params: Vec<f32>) -> PdfModel {
        let header = ModelHeader::new(msd, 1, 2);
        let layout = header.layout().unwrap();
        let node = Node::from_params(layout, params).unwrap();
        PdfModel::new(header, vec![State::from(vec![node])])
    }

    fn render(model: &PdfModel, name: &str) -> String {
        let mut buf = Vec::new();
        render_report(model, name, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.0), "1.000000");
        assert_eq!(format_value(-0.25), "-0.250000");
        assert_eq!(format_value(1234.5), "1234.500000");
        assert_eq!(format_value(f32::NAN), "   nan");
        assert_eq!(format_value(f32::INFINITY), "   inf");
        assert_eq!(format_value(f32::NEG_INFINITY), "  -inf");
    }

    #[test]
    fn test_names() {
        assert_eq!(state_name("mgc", 0), "mgc_s2");
        assert_eq!(node_name("mgc", 4, 9), "mgc_s6_10");
    }

    #[test]
    fn test_non_msd_rows() {
        let model = one_node_model(false, vec![1.0, 2.0, 0.5, 0.25]);
        let text = render(&model, "dur");
        let expected = "Number of states: 1\tNon-MSD model\n\
                        Number of streams: 1\n\
                        Vector length: 2\n\
                        State dur_s2\tNumber of nodes 1\n\
                        \tNode dur_s2_1\n\
                        \tMean\t1.000000\t2.000000\n\
                        \tVariance\t0.500000\t0.250000\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_msd_rows_in_order() {
        let model = one_node_model(true, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let text = render(&model, "lf0");
        let labels: Vec<_> = text
            .lines()
            .skip(5)
            .map(|l| l.trim_start_matches('\t').split('\t').next().unwrap())
            .collect();
        assert_eq!(labels, vec!["Mean", "Variance", "MSD", "Counter-MSD"]);
        assert!(text.contains("\tCounter-MSD\t7.000000\t8.000000\n"));
    }

    #[test]
    fn test_empty_state() {
        let model = PdfModel::new(ModelHeader::new(false, 1, 2), vec![State::new()]);
        let text = render(&model, "dur");
        assert!(text.ends_with("State dur_s2\tNumber of nodes 0\n"));
    }

    #[test]
    fn test_json_omits_msd_for_non_msd() {
        let model = one_node_model(false, vec![1.0, 2.0, 0.5, 0.25]);
        let mut buf = Vec::new();
        render_json(&model, "dur", &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let node = &value["states"][0]["nodes"][0];
        assert_eq!(node["name"], "dur_s2_1");
        assert_eq!(node["mean"], serde_json::json!([1.0, 2.0]));
        assert!(node.get("msd").is_none());
        assert_eq!(value["msd"], false);
    }
}
