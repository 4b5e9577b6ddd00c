use proptest::prelude::*;
use reverso::{
    AppendLetterCommand, CapitalizeAtCommand, DeleteFromStartCommand, Error, HistoryManager,
    LowerCaseAtCommand, SharedText,
};
use unicode_segmentation::UnicodeSegmentation;

fn manager(text: &str) -> HistoryManager {
    HistoryManager::new(SharedText::from(text))
}

/// Whole letters that never join the letter before them.
fn piece() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "a",
        "Z",
        " ",
        "3",
        "(",
        "e\u{301}",
        "\u{1F1FA}\u{1F1F8}",
        "\u{df}",
        "\u{416}",
        "\u{1F44D}\u{1F3FD}",
    ])
}

fn pieces(max: usize) -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(piece(), 0..max)
}

/// Text with combining marks, regional indicators and other clusters,
/// either built from whole letters or drawn from any printable chars.
fn unicode_text() -> impl Strategy<Value = String> {
    prop_oneof![
        pieces(16).prop_map(|pieces| pieces.concat()),
        "\\PC{0,16}",
        "[a-z\u{301}\u{1F1E6}-\u{1F1FF} ]{0,16}",
    ]
}

proptest! {
    #[test]
    fn append_then_undo_restores(text in unicode_text(), letter in "\\PC") {
        let mut manager = manager(&text);
        let command = AppendLetterCommand::new(&letter).unwrap();

        match manager.do_command(command) {
            Ok(()) => {
                manager.undo().unwrap();
                prop_assert_eq!(manager.text().as_str(), text.as_str());

                manager.redo().unwrap();
                prop_assert_eq!(manager.text().to_string(), format!("{text}{letter}"));
            }
            Err(error) => {
                prop_assert_eq!(error, Error::InvalidLetter(letter.clone()));
                prop_assert_eq!(manager.text().as_str(), text.as_str());
                prop_assert_eq!(manager.undo_len(), 0);
            }
        }
    }

    #[test]
    fn whole_letters_always_append(
        text in pieces(12).prop_map(|pieces| pieces.concat()),
        letter in piece(),
    ) {
        let mut manager = manager(&text);
        manager.do_command(AppendLetterCommand::new(letter).unwrap()).unwrap();
        manager.undo().unwrap();
        prop_assert_eq!(manager.text().as_str(), text.as_str());
    }

    #[test]
    fn delete_from_start_then_undo_restores(text in unicode_text()) {
        prop_assume!(!text.is_empty());
        let mut manager = manager(&text);
        let command = DeleteFromStartCommand::new(manager.text()).unwrap();
        let first_len = command.letter().len();
        manager.do_command(command).unwrap();
        prop_assert_eq!(manager.text().as_str(), &text[first_len..]);

        manager.undo().unwrap();
        prop_assert_eq!(manager.text().as_str(), text.as_str());
        prop_assert_eq!(manager.text().len(), text.graphemes(true).count());
    }

    #[test]
    fn capitalize_then_undo_restores(
        prefix in pieces(12),
        letter in "[a-z]",
        suffix in pieces(12),
    ) {
        let text = format!("{}{letter}{}", prefix.concat(), suffix.concat());
        let mut manager = manager(&text);
        manager.do_command(CapitalizeAtCommand::new(prefix.len())).unwrap();
        manager.undo().unwrap();
        prop_assert_eq!(manager.text().as_str(), text.as_str());
    }

    #[test]
    fn lower_case_then_undo_restores(
        prefix in pieces(12),
        letter in "[A-Z]",
        suffix in pieces(12),
    ) {
        let text = format!("{}{letter}{}", prefix.concat(), suffix.concat());
        let mut manager = manager(&text);
        manager.do_command(LowerCaseAtCommand::new(prefix.len())).unwrap();
        manager.undo().unwrap();
        prop_assert_eq!(manager.text().as_str(), text.as_str());
    }

    #[test]
    fn history_bookkeeping(
        text in unicode_text(),
        letters in prop::collection::vec(piece(), 1..8),
    ) {
        let mut manager = manager(&text);
        for letter in letters {
            let (undo_len, redo_len) = (manager.undo_len(), manager.redo_len());
            if manager.do_command(AppendLetterCommand::new(letter).unwrap()).is_err() {
                prop_assert_eq!(manager.undo_len(), undo_len);
                continue;
            }
            prop_assert_eq!(manager.undo_len(), undo_len + 1);
            prop_assert_eq!(manager.redo_len(), redo_len);

            manager.undo().unwrap();
            prop_assert_eq!(manager.redo_len(), redo_len + 1);
        }
    }

    #[test]
    fn out_of_range_index_leaves_text(text in unicode_text(), past_end in 0usize..4) {
        let mut manager = manager(&text);
        let index = text.graphemes(true).count() + past_end;
        prop_assert!(manager.do_command(CapitalizeAtCommand::new(index)).is_err());
        prop_assert_eq!(manager.text().as_str(), text.as_str());
        prop_assert_eq!(manager.undo_len(), 0);
    }
}
