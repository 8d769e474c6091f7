//! Reading a TELL/ASK document.
//!
//! A document has four lines:
//!
//! ```text
//! TELL
//! <sentences, separated by ;>
//! ASK
//! <query>
//! ```
//!
//! The keywords are compared after trimming, any whitespace in the knowledge base or query is ignored, and any lines after the query are ignored.
//!
//! ```rust
//! # use iengine::context::Context;
//! # use iengine::config::Config;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let document = "TELL\np2=> p3; p3 => p1; p1 => d; p2;\nASK\nd\n";
//!
//! assert!(the_context.read_tell_ask(document.as_bytes()).is_ok());
//! assert_eq!(the_context.kb().sentences().len(), 4);
//! assert!(the_context.solve().unwrap().found());
//! ```

use std::io::BufRead;

use crate::{
    context::Context,
    misc::log::targets::{self},
    types::err::{self},
};

pub const TELL: &str = "TELL";
pub const ASK: &str = "ASK";

impl Context {
    /// Reads a TELL/ASK document into the context, adding the knowledge base and setting the query.
    pub fn read_tell_ask(&mut self, mut reader: impl BufRead) -> Result<(), err::ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        let mut next_line = |buffer: &mut String| -> Result<Option<String>, err::ErrorKind> {
            buffer.clear();
            match reader.read_line(buffer) {
                Ok(0) => Ok(None),
                Ok(_) => {
                    line_counter += 1;
                    Ok(Some(buffer.trim().to_owned()))
                }
                Err(_) => Err(err::ErrorKind::from(err::ReadError::Line(line_counter + 1))),
            }
        };

        match next_line(&mut buffer)? {
            Some(line) if line == TELL => {}
            _ => return Err(err::ErrorKind::from(err::ReadError::MissingTell)),
        }

        let kb = match next_line(&mut buffer)? {
            Some(line) => line,
            None => return Err(err::ErrorKind::from(err::ReadError::MissingAsk)),
        };

        match next_line(&mut buffer)? {
            Some(line) if line == ASK => {}
            _ => return Err(err::ErrorKind::from(err::ReadError::MissingAsk)),
        }

        let query = match next_line(&mut buffer)? {
            Some(line) if !line.is_empty() => line,
            _ => return Err(err::ErrorKind::from(err::ReadError::MissingQuery)),
        };

        let count = self.tell(&kb)?;
        log::info!(target: targets::CONTEXT, "Read {count} sentences");
        self.ask(&query)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn read(document: &str) -> Result<Context, err::ErrorKind> {
        let mut the_context = Context::from_config(Config::default());
        the_context.read_tell_ask(document.as_bytes())?;
        Ok(the_context)
    }

    #[test]
    fn keywords_are_trimmed() {
        let the_context = read("  TELL \n a; a => b \nASK  \n b ").unwrap();
        assert_eq!(the_context.kb().sentences().len(), 2);
        assert_eq!(the_context.query().map(|q| q.to_string()), Some("b".to_owned()));
    }

    #[test]
    fn missing_pieces() {
        assert_eq!(
            read("ASK\na\n").err(),
            Some(err::ErrorKind::Read(err::ReadError::MissingTell))
        );
        assert_eq!(
            read("TELL\na;\n").err(),
            Some(err::ErrorKind::Read(err::ReadError::MissingAsk))
        );
        assert_eq!(
            read("TELL\na;\nASK\n").err(),
            Some(err::ErrorKind::Read(err::ReadError::MissingQuery))
        );
    }

    #[test]
    fn parse_errors_propagate() {
        assert!(matches!(
            read("TELL\n(a;\nASK\na\n").err(),
            Some(err::ErrorKind::Parse(_))
        ));
    }
}
