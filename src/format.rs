//! Text formatting for the detail view

/// Join items as a short en-GB conjunction: "a", "a and b", "a, b and c".
pub fn conjunction<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{head} and {}", last.as_ref())
        }
    }
}

pub fn list_label(position: usize, name: &str) -> String {
    format!("{}. {name}", position + 1)
}
