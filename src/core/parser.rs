use crate::domain::model::{trim_field, Course};

/// Field separators; a single line may mix both.
const DELIMITERS: [char; 2] = ['\t', ','];

/// Splits a line on tabs and commas, trimming every field.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(&DELIMITERS[..]).map(trim_field).collect()
}

/// Parses one catalog line.
///
/// Returns `None` when the line has fewer than two fields (code and title).
/// Blank lines are expected to be filtered out by the caller.
pub fn parse_line(line: &str) -> Option<Course> {
    let fields = split_fields(line);
    if fields.len() < 2 {
        return None;
    }

    let prereqs = fields[2..]
        .iter()
        .filter(|code| !code.is_empty())
        .map(|code| code.to_ascii_uppercase())
        .collect();

    Some(Course {
        number: fields[0].to_ascii_uppercase(),
        title: fields[1].to_string(),
        prereqs,
    })
}

/// Splits text into physical lines, accepting `\n`, `\r\n` and bare `\r`.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|segment| segment.strip_suffix('\r').unwrap_or(segment).split('\r'))
}
