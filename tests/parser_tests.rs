use pretty_assertions::assert_eq;

use yaoshan_web::parser::{split_blocks, split_title_body, DESCRIPTION_PLACEHOLDER, TITLE_PLACEHOLDER};

#[test]
fn blank_lines_delimit_blocks() {
    let raw = "A\nB\n\nC\n\nD\nE";
    assert_eq!(split_blocks(raw), vec!["A\nB", "C", "D\nE"]);
}

#[test]
fn whitespace_only_blocks_are_dropped() {
    let raw = "first\n\n   \n\nsecond\n\n";
    assert_eq!(split_blocks(raw), vec!["first", "second"]);
}

#[test]
fn no_blank_line_yields_one_block() {
    assert_eq!(split_blocks("1. 药膳名称：银耳汤\n2. 主要功效：润肺").len(), 1);
}

#[test]
fn title_and_body_split() {
    let (title, description) = split_title_body("银耳莲子汤\n主要功效：安神\n原料配方：银耳、莲子");
    assert_eq!(title, "银耳莲子汤");
    assert_eq!(description, "主要功效：安神\n原料配方：银耳、莲子");
}

#[test]
fn single_line_block_gets_description_placeholder() {
    let (title, description) = split_title_body("Name");
    assert_eq!(title, "Name");
    assert_eq!(description, DESCRIPTION_PLACEHOLDER);
}

#[test]
fn lines_are_trimmed_and_empties_dropped() {
    let (title, description) = split_title_body("  酸枣仁粥  \n\n   做法：煮粥   ");
    assert_eq!(title, "酸枣仁粥");
    assert_eq!(description, "做法：煮粥");
}

#[test]
fn empty_block_gets_both_placeholders() {
    let (title, description) = split_title_body("   \n  ");
    assert_eq!(title, TITLE_PLACEHOLDER);
    assert_eq!(description, DESCRIPTION_PLACEHOLDER);
}
