/// The sink for everything the command line interface tells its user: help text and error messages.
///
/// The sink is invoked at most once per invocation, with exit code `0` for help and `1` for every failure.
/// It is implemented for any `Fn(String, i32)` closure, and for [`ConsoleInterface`] (the default).
///
/// ### Example
/// ```
/// # use cmdtree_core as cmdtree;
/// use cmdtree::prelude::*;
///
/// struct Quiet;
///
/// impl UserInterface for Quiet {
///     fn emit(&self, _message: String, _exit_code: i32) {}
/// }
/// ```
pub trait UserInterface {
    /// Deliver `message` to the user, who is about to see the program exit with `exit_code`.
    fn emit(&self, message: String, exit_code: i32);
}

impl<F> UserInterface for F
where
    F: Fn(String, i32),
{
    fn emit(&self, message: String, exit_code: i32) {
        self(message, exit_code)
    }
}

/// Writes help to stdout, and errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn emit(&self, message: String, exit_code: i32) {
        if exit_code == 0 {
            println!("{message}");
        } else {
            eprintln!("{message}");
        }
    }
}

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_WIDTH: usize = 17;

/// Break `paragraph` into lines of at most `width` characters, hyphenating words that don't fit on a line.
pub(crate) fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let width = width.max(MINIMUM_WIDTH);
    let mut lines = Vec::default();
    let mut current = String::default();
    let mut current_width = 0;

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        let word_width = word.chars().count();

        if current.is_empty() {
            current_width = hyphenate(width, &mut lines, &mut current, word);
        } else if current_width + word_width + 1 <= width {
            current.push(' ');
            current.push_str(word);
            current_width += word_width + 1;
        } else {
            lines.push(std::mem::take(&mut current));
            current_width = hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// Push the full-width pieces of `word` onto `lines`, leaving the remainder in `current`.
fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) -> usize {
    let increment = width - 1;
    let characters: Vec<char> = word.chars().collect();
    let mut left = 0;

    while characters.len() - left > width {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
    characters.len() - left
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::UserInterface;
    use std::cell::RefCell;
    use std::sync::mpsc;

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        emitted: RefCell<Vec<(String, i32)>>,
    }

    impl UserInterface for InMemoryInterface {
        fn emit(&self, message: String, exit_code: i32) {
            self.emitted.borrow_mut().push((message, exit_code));
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume_all(self) -> Vec<(String, i32)> {
            self.emitted.take()
        }

        pub(crate) fn consume(self) -> (String, i32) {
            let mut emitted = self.consume_all();
            assert_eq!(emitted.len(), 1, "expected exactly one emission: {emitted:?}");
            emitted.remove(0)
        }
    }

    pub(crate) fn channel_interface() -> (SenderInterface, ReceiverInterface) {
        let (tx, rx) = mpsc::channel();
        (SenderInterface { tx }, ReceiverInterface { rx })
    }

    pub(crate) struct SenderInterface {
        tx: mpsc::Sender<(String, i32)>,
    }

    impl UserInterface for SenderInterface {
        fn emit(&self, message: String, exit_code: i32) {
            self.tx.send((message, exit_code)).unwrap();
        }
    }

    pub(crate) struct ReceiverInterface {
        rx: mpsc::Receiver<(String, i32)>,
    }

    impl ReceiverInterface {
        // The sender must be dropped first, otherwise this blocks.
        pub(crate) fn consume_all(self) -> Vec<(String, i32)> {
            self.rx.iter().collect()
        }

        pub(crate) fn consume(self) -> (String, i32) {
            let mut emitted = self.consume_all();
            assert_eq!(emitted.len(), 1, "expected exactly one emission: {emitted:?}");
            emitted.remove(0)
        }
    }
}
