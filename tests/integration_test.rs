// Integration tests driving the buffer against the demo file

use decal::align::AlignError;
use decal::buffer::Buffer;
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn demo_buffer() -> Buffer {
    Buffer::load(Path::new("demos/declarations.c")).expect("Failed to read demo file")
}

#[test]
fn test_align_file_scope_declarations() {
    let mut buffer = demo_buffer();

    let count = buffer.align_range(2, 4).expect("Alignment failed");
    assert_eq!(count, 3);
    assert_eq!(
        &buffer.lines()[2..5],
        [
            "static unsigned int call_count   = 0;",
            "static const char  *greeting     = \"hello; world = 42\";",
            "static double       scale_factor = 1.5;",
        ]
    );
}

#[test]
fn test_align_function_block_keeps_indentation() {
    let mut buffer = demo_buffer();

    let count = buffer.align_range(7, 11).expect("Alignment failed");
    assert_eq!(count, 5);
    assert_eq!(
        &buffer.lines()[7..12],
        [
            "    int                total     = 0;",
            "    char              *separator = \", \";",
            "    unsigned long long big       = 10000;",
            "    double             ratio;",
            "    const char        *name      = \"decal\";",
        ]
    );

    // Shared columns: every = the block kept sits at the same offset.
    let equals: Vec<Option<usize>> = buffer.lines()[7..12]
        .iter()
        .filter(|l| l.contains('='))
        .map(|l| l.find('='))
        .collect();
    assert_eq!(equals, vec![Some(33), Some(33), Some(33), Some(33)]);
}

#[test]
fn test_range_with_trailing_blank_line_shrinks() {
    let mut buffer = demo_buffer();
    let before = buffer.len();

    // Lines 3-6 of the file: three declarations plus the blank line
    // after them, which is dropped from the aligned output.
    let count = buffer.align_range(2, 5).expect("Alignment failed");
    assert_eq!(count, 3);
    assert_eq!(buffer.len(), before - 1);
}

#[test]
fn test_undo_restores_the_original_file() {
    let mut buffer = demo_buffer();
    let original = buffer.lines().to_vec();

    buffer.align_range(7, 11).expect("Alignment failed");
    assert!(buffer.is_dirty());
    assert_ne!(buffer.lines(), original.as_slice());

    assert!(buffer.undo());
    assert_eq!(buffer.lines(), original.as_slice());
    assert!(!buffer.is_dirty());
}

#[test]
fn test_inert_range_is_a_no_op() {
    let mut buffer = demo_buffer();
    let original = buffer.lines().to_vec();

    // The #include line and the blank after it hold no declarations.
    let count = buffer.align_range(0, 1).expect("Alignment failed");
    assert_eq!(count, 0);
    assert_eq!(buffer.lines(), original.as_slice());
    assert!(!buffer.is_dirty());
}

#[test]
fn test_malformed_line_reports_its_batch_position() {
    let mut buffer = Buffer::from_lines(
        "scratch.c",
        vec![String::from("int ok = 1;"), String::from("= 2;")],
    );

    let err = buffer.align_range(0, 1).unwrap_err();
    let AlignError::MalformedLine { line_number, cause } = err;
    assert_eq!(line_number, 2);
    assert_eq!(cause.split_token, "=");
    assert_eq!(cause.column, 1);
    assert_eq!(buffer.lines()[1], "= 2;");
}

#[test]
fn test_save_round_trip() {
    let path = env::temp_dir().join(format!("decal_save_{}.c", process::id()));
    let source =
        fs::read_to_string("demos/declarations.c").expect("Failed to read demo file");
    let lines: Vec<String> = source.lines().map(String::from).collect();

    let mut buffer = Buffer::from_lines(&path, lines);
    buffer.align_range(7, 11).expect("Alignment failed");
    buffer.save().expect("Save failed");
    assert!(!buffer.is_dirty());

    let reloaded = Buffer::load(&path).expect("Reload failed");
    assert_eq!(reloaded.lines(), buffer.lines());

    fs::remove_file(&path).ok();
}
