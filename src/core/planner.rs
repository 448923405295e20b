use crate::core::catalog::Catalog;
use crate::core::report::{write_course_list, write_lookup};
use crate::domain::model::trim_field;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

const MENU: &str = "1. Load Data Structure.  \n\
                    2. Print Course List.  \n\
                    3. Print Course. \n\
                    9. Exit \n\
                    What would you like to do? ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    List,
    Show,
    Exit,
    Invalid(String),
}

impl From<&str> for MenuChoice {
    fn from(input: &str) -> Self {
        match trim_field(input) {
            "1" => MenuChoice::Load,
            "2" => MenuChoice::List,
            "3" => MenuChoice::Show,
            "9" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadOutcome {
    Loaded,
    Failed,
    EndOfInput,
}

/// Interactive menu over a [`Catalog`].
///
/// Input and output are generic so whole sessions can be scripted.
pub struct Planner<S: Storage> {
    storage: S,
    catalog: Catalog,
    loaded: bool,
    preload: Option<String>,
}

impl<S: Storage> Planner<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            catalog: Catalog::new(),
            loaded: false,
            preload: None,
        }
    }

    /// Queues a catalog to load right after the welcome line of the next run.
    pub fn with_preload(mut self, path: impl Into<String>) -> Self {
        self.preload = Some(path.into());
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether the most recent load attempt succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn load(&mut self, path: &str) -> Result<usize> {
        let result = self.catalog.load(&self.storage, path);
        self.loaded = result.is_ok();
        result
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        writeln!(out, "Welcome to the course planner.")?;

        if let Some(path) = self.preload.take() {
            tracing::debug!("Preloading catalog: {}", path);
            self.load_and_report(&path, &mut out)?;
        }

        loop {
            write!(out, "{}", MENU)?;
            out.flush()?;

            let Some(line) = read_trimmed(&mut input)? else {
                tracing::debug!("Input closed at menu prompt");
                break;
            };

            let choice = MenuChoice::from(line.as_str());
            tracing::debug!("Menu choice: {:?}", choice);

            match choice {
                MenuChoice::Load => {
                    if self.prompt_and_load(&mut input, &mut out)? == LoadOutcome::EndOfInput {
                        break;
                    }
                }
                MenuChoice::List => match self.ensure_loaded(&mut input, &mut out)? {
                    LoadOutcome::Loaded => write_course_list(&mut out, &self.catalog)?,
                    LoadOutcome::Failed => continue,
                    LoadOutcome::EndOfInput => break,
                },
                MenuChoice::Show => match self.ensure_loaded(&mut input, &mut out)? {
                    LoadOutcome::Loaded => {
                        write!(out, "What course do you want to know about? ")?;
                        out.flush()?;
                        let Some(code) = read_trimmed(&mut input)? else {
                            break;
                        };
                        write_lookup(&mut out, &self.catalog.lookup(&code))?;
                    }
                    LoadOutcome::Failed => continue,
                    LoadOutcome::EndOfInput => break,
                },
                MenuChoice::Exit => {
                    writeln!(out, "Thank you for using the course planner!")?;
                    break;
                }
                MenuChoice::Invalid(other) => {
                    writeln!(out, "{} is not a valid option.", other)?;
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    fn ensure_loaded<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<LoadOutcome> {
        if self.loaded {
            return Ok(LoadOutcome::Loaded);
        }
        self.prompt_and_load(input, out)
    }

    fn prompt_and_load<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<LoadOutcome> {
        write!(out, "Please enter the file name to load: ")?;
        out.flush()?;

        let Some(file_name) = read_trimmed(input)? else {
            return Ok(LoadOutcome::EndOfInput);
        };
        if file_name.is_empty() {
            writeln!(out, "File name cannot be empty.")?;
            return Ok(LoadOutcome::Failed);
        }

        self.load_and_report(&file_name, out)
    }

    fn load_and_report<W: Write>(
        &mut self,
        file_name: &str,
        out: &mut W,
    ) -> io::Result<LoadOutcome> {
        match self.load(file_name) {
            Ok(_) => {
                writeln!(out, "Data loaded successfully.")?;
                Ok(LoadOutcome::Loaded)
            }
            Err(e) => {
                tracing::warn!("Load of {} failed: {:?}", file_name, e);
                writeln!(out, "{}", e)?;
                Ok(LoadOutcome::Failed)
            }
        }
    }
}

/// Reads one line, trimmed; `None` at end of input.
fn read_trimmed<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(trim_field(&buf).to_string()))
}
