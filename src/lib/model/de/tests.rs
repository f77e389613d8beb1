//! Tests for deserializing whole macro definitions.

use serde_json::{self, Value};
use speculoos::prelude::*;

use crate::model::{Color, Dimensions, ImageMacro, MacroSet, Point, MAX_TEXT_BOX_COUNT};


fn drake_json() -> Value {
    json!({
        "style": {"font": "impact", "stroke_width": 2},
        "macros": {
            "drake": {
                "filename": "drake.jpg",
                "style": {"text_fill": "black"},
                "text_boxes": [
                    {"pos": [600, 0], "dimensions": [600, 600]},
                    {"pos": {"x": 600, "y": 600}, "dimensions": {"width": 600, "height": 600},
                     "style": {"vert_align": "top"}}
                ]
            },
            "blank": {"filename": "blank.png"}
        }
    })
}


#[test]
fn macro_set_full() {
    let set: MacroSet = serde_json::from_value(drake_json()).unwrap();
    assert_eq!(2, set.len());
    assert_eq!(vec!["blank", "drake"], set.names().collect::<Vec<_>>());
    assert_eq!(Some("impact"), set.style.font.as_deref());
    assert_eq!(Some(2), set.style.stroke_width);

    let drake = set.get("drake").unwrap();
    assert_eq!("drake.jpg", drake.filename);
    assert_eq!(Some(Color::black()), drake.style.text_fill);
    assert_eq!(2, drake.text_count());

    let first = &drake.text_boxes[0];
    assert_eq!(Point::new(600, 0), first.pos);
    assert_eq!(Dimensions::new(600, 600), first.dimensions);
    assert!(first.style.is_empty());

    let second = &drake.text_boxes[1];
    assert_eq!(Point::new(600, 600), second.pos);
    assert_eq!(Some("top"), second.style.vert_align.as_deref());
}

#[test]
fn macro_without_boxes() {
    let set: MacroSet = serde_json::from_value(drake_json()).unwrap();
    let blank = set.get("blank").unwrap();
    assert_eq!(0, blank.text_count());
    assert!(blank.style.is_empty());
    assert_that!(set.get("nope")).is_none();
}

#[test]
fn empty_macro_set() {
    let set: MacroSet = serde_json::from_value(json!({})).unwrap();
    assert!(set.is_empty());
    assert!(set.style.is_empty());
}

#[test]
fn macro_requires_filename() {
    assert_that!(serde_json::from_value::<ImageMacro>(json!({"text_boxes": []})))
        .is_err();
    let result = serde_json::from_value::<ImageMacro>(json!({"filename": ""}));
    assert_that!(result).is_err();
}

#[test]
fn macro_rejects_unknown_fields() {
    assert_that!(serde_json::from_value::<ImageMacro>(json!({
        "filename": "a.png",
        "captions": []
    }))).is_err();
    assert_that!(serde_json::from_value::<ImageMacro>(json!({
        "filename": "a.png",
        "text_boxes": [{"pos": [0, 0], "dimensions": [1, 1], "size": 3}]
    }))).is_err();
}

#[test]
fn macro_rejects_too_many_boxes() {
    let boxes: Vec<Value> = (0..MAX_TEXT_BOX_COUNT + 1)
        .map(|i| json!({"pos": [0, i], "dimensions": [10, 10]}))
        .collect();
    let result = serde_json::from_value::<ImageMacro>(json!({
        "filename": "a.png",
        "text_boxes": boxes
    }));
    assert_that!(result).is_err();
}

#[test]
fn text_box_requires_geometry() {
    assert_that!(serde_json::from_value::<ImageMacro>(json!({
        "filename": "a.png",
        "text_boxes": [{"pos": [0, 0]}]
    }))).is_err();
}
