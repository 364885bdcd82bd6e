use egui::pos2;
use proptest::prelude::*;
use sticker_builder::element::{ElementPatch, ElementType};
use sticker_builder::EditorSession;

#[derive(Debug, Clone)]
enum Action {
    AddText,
    AddShape,
    MoveFirst(f32, f32),
    DeleteFirst,
    DuplicateLast,
    ForwardFirst,
    BackwardLast,
    Undo,
    Redo,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::AddText),
        Just(Action::AddShape),
        (0.0f32..500.0, 0.0f32..500.0).prop_map(|(x, y)| Action::MoveFirst(x, y)),
        Just(Action::DeleteFirst),
        Just(Action::DuplicateLast),
        Just(Action::ForwardFirst),
        Just(Action::BackwardLast),
        Just(Action::Undo),
        Just(Action::Redo),
    ]
}

fn perform(session: &mut EditorSession, action: &Action) {
    let first = session.document().iter().next().map(|e| e.id());
    let last = session.document().iter().next_back().map(|e| e.id());
    match action {
        Action::AddText => {
            let _ = session.add_element(ElementType::Text, &ElementPatch::default());
        }
        Action::AddShape => {
            let _ = session.add_element(ElementType::Shape, &ElementPatch::default());
        }
        Action::MoveFirst(x, y) => {
            if let Some(id) = first {
                session.update_element(id, ElementPatch::position(pos2(*x, *y)));
            }
        }
        Action::DeleteFirst => {
            if let Some(id) = first {
                session.delete_element(id);
            }
        }
        Action::DuplicateLast => {
            if let Some(id) = last {
                session.duplicate_element(id);
            }
        }
        Action::ForwardFirst => {
            if let Some(id) = first {
                session.bring_forward(id);
            }
        }
        Action::BackwardLast => {
            if let Some(id) = last {
                session.send_backward(id);
            }
        }
        Action::Undo => {
            session.undo();
        }
        Action::Redo => {
            session.redo();
        }
    }
}

proptest! {
    #[test]
    fn document_always_matches_history_cursor(actions in prop::collection::vec(action(), 0..40)) {
        let mut session = EditorSession::default();
        for action in &actions {
            perform(&mut session, action);
            let history = session.history();
            prop_assert!(history.cursor() < history.len());
            prop_assert_eq!(session.document().elements(), history.current());
        }
    }

    #[test]
    fn undo_then_redo_is_identity(actions in prop::collection::vec(action(), 1..30)) {
        let mut session = EditorSession::default();
        for action in &actions {
            perform(&mut session, action);
        }
        let before = session.document().clone();
        let len = session.history().len();

        if session.undo() {
            prop_assert!(session.redo());
            prop_assert_eq!(session.document(), &before);
        }
        prop_assert_eq!(session.history().len(), len);
    }

    #[test]
    fn undoing_everything_empties_the_canvas(actions in prop::collection::vec(action(), 0..30)) {
        let mut session = EditorSession::default();
        for action in &actions {
            perform(&mut session, action);
        }
        while session.undo() {}

        prop_assert!(session.document().is_empty());
        prop_assert_eq!(session.history().cursor(), 0);
        prop_assert_eq!(session.selected_element_id(), None);
    }

    #[test]
    fn recording_after_undo_discards_the_future(
        actions in prop::collection::vec(action(), 1..30),
        undos in 1usize..5,
    ) {
        let mut session = EditorSession::default();
        for action in &actions {
            perform(&mut session, action);
        }
        for _ in 0..undos {
            session.undo();
        }
        let cursor = session.history().cursor();

        session.add_element(ElementType::Shape, &ElementPatch::default()).unwrap();

        prop_assert!(!session.history().can_redo());
        prop_assert_eq!(session.history().len(), cursor + 2);
    }
}
