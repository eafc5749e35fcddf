//! Shared helpers: a test-only encoder for the model wire format.
//!
//! Mirrors the decoder exactly: every field is written in host order and
//! then byte-reversed, so the helpers work on hosts of either endianness.

#![allow(dead_code)]

use hts_pdf::{ModelHeader, Node, PdfModel, Quadrant, State};

/// Append one `int32` field in file byte order.
pub fn put_int(buf: &mut Vec<u8>, value: i32) {
    let mut bytes = value.to_ne_bytes();
    bytes.reverse();
    buf.extend_from_slice(&bytes);
}

/// Append one `float32` field in file byte order.
pub fn put_float(buf: &mut Vec<u8>, value: f32) {
    let mut bytes = value.to_ne_bytes();
    bytes.reverse();
    buf.extend_from_slice(&bytes);
}

/// Encode `model` the way the synthesis engine writes it.
pub fn encode_model(model: &PdfModel) -> Vec<u8> {
    let mut buf = Vec::new();
    put_int(&mut buf, model.header.msd_flag);
    put_int(&mut buf, model.header.stream_count);
    put_int(&mut buf, model.header.vector_length);
    for state in &model.states {
        put_int(&mut buf, state.node_count() as i32);
    }
    for (_, _, node) in model.nodes() {
        let layout = node.layout();
        for k in 0..layout.vector_length() {
            for &quadrant in layout.quadrants() {
                let offset = layout.offset(quadrant, k).unwrap();
                put_float(&mut buf, node.as_slice()[offset]);
            }
        }
    }
    buf
}

/// A model whose stream-0 slots hold distinct, recognizable values.
///
/// Slots of streams beyond the first stay `0.0`, as the decoder leaves them.
pub fn synthetic_model(
    msd: bool,
    stream_count: i32,
    vector_length: i32,
    node_counts: &[usize],
) -> PdfModel {
    let header = ModelHeader::new(msd, stream_count, vector_length);
    let layout = header.layout().unwrap();
    let states = node_counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let nodes = (0..count)
                .map(|j| {
                    let mut node = Node::zeroed(layout).unwrap();
                    for &quadrant in layout.quadrants() {
                        for k in 0..layout.vector_length() {
                            let value = (i * 1000 + j * 100 + quadrant.index() * 10 + k) as f32
                                + 0.125;
                            node.set(quadrant, k, value);
                        }
                    }
                    node
                })
                .collect::<Vec<_>>();
            State::from(nodes)
        })
        .collect();
    PdfModel::new(header, states)
}

/// Assert two models carry the same header, shape and parameter bits.
pub fn assert_bit_identical(a: &PdfModel, b: &PdfModel) {
    assert_eq!(a.header, b.header, "headers differ");
    assert_eq!(a.node_counts(), b.node_counts(), "node counts differ");
    for ((i, j, x), (_, _, y)) in a.nodes().zip(b.nodes()) {
        let xb: Vec<u32> = x.as_slice().iter().map(|v| v.to_bits()).collect();
        let yb: Vec<u32> = y.as_slice().iter().map(|v| v.to_bits()).collect();
        assert_eq!(xb, yb, "node {} of state {} differs", j, i);
    }
}

/// A report row as rendered, e.g. `\tMean\t1.000000`.
pub fn row(label: &str, values: &[&str]) -> String {
    let mut line = format!("\t{}", label);
    for v in values {
        line.push('\t');
        line.push_str(v);
    }
    line
}

pub fn quadrant_labels(msd: bool) -> Vec<&'static str> {
    let n = if msd { 4 } else { 2 };
    Quadrant::ALL[..n].iter().map(|q| q.label()).collect()
}
