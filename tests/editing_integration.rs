use quill::app::{App, Message, Model, update};
use quill::config::EditorSettings;
use quill::editor::{Cursor, Direction, Document, TAB_STOP};
use quill::highlight::Highlight;
use quill::storage::{load_lines, save_atomic};

fn apply(model: Model, messages: &[Message]) -> Model {
    messages.iter().fold(model, |model, msg| update(model, *msg))
}

#[test]
fn test_opening_comment_recolours_following_rows() {
    let doc = {
        let mut doc = Document::from_lines(["x", "int y;", "int z;"], TAB_STOP);
        doc.set_filename("demo.c");
        doc.select_syntax();
        doc
    };
    let model = Model::new(doc, (24, 80), EditorSettings::default());
    assert_eq!(model.document.row(2).unwrap().highlight()[0], Highlight::Keyword2);

    let model = apply(model, &[Message::InsertByte(b'/'), Message::InsertByte(b'*')]);
    for index in 1..3 {
        let row = model.document.row(index).unwrap();
        assert!(row.highlight().iter().all(|h| *h == Highlight::MultilineComment));
    }

    let model = apply(model, &[Message::DeleteBack]);
    assert_eq!(model.document.row(2).unwrap().highlight()[0], Highlight::Keyword2);
}

#[test]
fn test_edit_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("story.txt");
    std::fs::write(&path, "once\nupon\n").unwrap();

    let doc = App::new(Some(path.clone())).load_document().unwrap();
    let model = Model::new(doc, (24, 80), EditorSettings::default());
    let model = apply(
        model,
        &[
            Message::MoveCursor(Direction::Down),
            Message::MoveEnd,
            Message::InsertByte(b'!'),
            Message::MoveCursor(Direction::Right),
            Message::InsertByte(b'a'),
        ],
    );
    assert_eq!(model.cursor, Cursor::at(2, 1));
    assert_eq!(model.document.num_rows(), 3);

    let written = save_atomic(&path, &model.document.to_bytes()).unwrap();
    assert_eq!(written, 13);
    let lines = load_lines(&path).unwrap();
    assert_eq!(lines, vec![b"once".to_vec(), b"upon!".to_vec(), b"a".to_vec()]);
}

#[test]
fn test_cursor_movement_wraps_between_rows() {
    let doc = Document::from_lines(["ab", "cd"], TAB_STOP);
    let model = Model::new(doc, (24, 80), EditorSettings::default());
    let model = apply(model, &[Message::MoveEnd, Message::MoveCursor(Direction::Right)]);
    assert_eq!(model.cursor, Cursor::at(1, 0));
    let model = apply(model, &[Message::MoveCursor(Direction::Left)]);
    assert_eq!(model.cursor, Cursor::at(0, 2));
}

#[test]
fn test_moving_up_clamps_column() {
    let doc = Document::from_lines(["a", "long line"], TAB_STOP);
    let mut model = Model::new(doc, (24, 80), EditorSettings::default());
    model.cursor = Cursor::at(1, 8);
    let model = update(model, Message::MoveCursor(Direction::Up));
    assert_eq!(model.cursor, Cursor::at(0, 1));
}
