use std::io::{self, Write};

use crate::directory::PersonDirectory;

pub const NOT_FOUND: &str = "No user found with that id";

/// Text shown for `id`: the three record lines, or the not-found message.
pub fn render(id: i64, directory: &PersonDirectory) -> String {
    match directory.get(id) {
        Some(person) => format!(
            "User ID: {}\nName: {}\nBirthday: {}",
            id,
            person.name,
            person.birthday.format("%Y-%m-%d")
        ),
        None => NOT_FOUND.to_string(),
    }
}

pub fn display<W: Write + ?Sized>(id: i64, directory: &PersonDirectory, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", render(id, directory))
}
