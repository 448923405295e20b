use crate::core::catalog::{Catalog, Lookup};
use std::io::{self, Write};

pub const SCHEDULE_HEADER: &str = "Here is a sample schedule:";

/// Writes the header followed by one `<code>, <title>` line per course.
pub fn write_course_list<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "{}", SCHEDULE_HEADER)?;
    for course in catalog.list_all() {
        writeln!(out, "{}, {}", course.number, course.title)?;
    }
    Ok(())
}

pub fn write_lookup<W: Write>(out: &mut W, lookup: &Lookup<'_>) -> io::Result<()> {
    match lookup {
        Lookup::NotFound(code) => writeln!(out, "{} is not a course we offer.", code),
        Lookup::Found(course) => {
            writeln!(out, "{}, {}", course.number, course.title)?;
            if course.prereqs.is_empty() {
                writeln!(out, "Prerequisites: None")
            } else {
                writeln!(out, "Prerequisites: {}", course.prereqs.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Course;

    fn render_lookup(lookup: &Lookup<'_>) -> String {
        let mut out = Vec::new();
        write_lookup(&mut out, lookup).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_catalog_prints_only_header() {
        let mut out = Vec::new();
        write_course_list(&mut out, &Catalog::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Here is a sample schedule:\n");
    }

    #[test]
    fn test_found_course_with_prereqs() {
        let course = Course {
            number: "CS300".to_string(),
            title: "Algorithms".to_string(),
            prereqs: vec!["CS200".to_string(), "MATH201".to_string()],
        };
        assert_eq!(
            render_lookup(&Lookup::Found(&course)),
            "CS300, Algorithms\nPrerequisites: CS200, MATH201\n"
        );
    }

    #[test]
    fn test_found_course_without_prereqs() {
        let course = Course {
            number: "CS100".to_string(),
            title: "Foundations".to_string(),
            prereqs: vec![],
        };
        assert_eq!(
            render_lookup(&Lookup::Found(&course)),
            "CS100, Foundations\nPrerequisites: None\n"
        );
    }

    #[test]
    fn test_not_found() {
        assert_eq!(
            render_lookup(&Lookup::NotFound("BIO999".to_string())),
            "BIO999 is not a course we offer.\n"
        );
    }
}
