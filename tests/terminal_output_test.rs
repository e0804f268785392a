//! Full pipeline into an in-memory terminal.

use ascii_cube::engine::Animation;
use ascii_cube::term::{encode_clear_into, TerminalRenderer};
use ascii_cube::types::{RenderConfig, LUMINANCE_RAMP};

fn clear_sequence() -> Vec<u8> {
    let mut v = Vec::new();
    encode_clear_into(&mut v).unwrap();
    v
}

#[test]
fn test_frame_is_cleared_then_printed_row_by_row() {
    let config = RenderConfig::perspective();
    let mut anim = Animation::new(&config).unwrap();
    let mut term = TerminalRenderer::with_writer(Vec::new());
    anim.step(&mut term).unwrap();

    let out = term.into_writer();
    let clear = clear_sequence();
    assert!(out.starts_with(&clear));

    let body = String::from_utf8(out[clear.len()..].to_vec()).unwrap();
    assert!(body.ends_with('\n'));
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), config.height as usize);
    assert!(lines.iter().all(|l| l.chars().count() == config.width as usize));
    assert!(body.contains('@'));
    assert!(body.chars().all(|c| c == ' ' || c == '\n' || LUMINANCE_RAMP.contains(&c)));
}

#[test]
fn test_every_frame_starts_with_a_clear() {
    let config = RenderConfig::perspective();
    let mut anim = Animation::new(&config).unwrap();
    let mut term = TerminalRenderer::with_writer(Vec::new());
    anim.run_frames(&mut term, 2).unwrap();

    let out = term.into_writer();
    let clear = clear_sequence();
    let frame_len = clear.len() + (config.width as usize + 1) * config.height as usize;
    assert_eq!(out.len(), 2 * frame_len);
    assert!(out[frame_len..].starts_with(&clear));
}
