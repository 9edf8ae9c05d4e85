//! Interactive prompts for names and disambiguation

use std::io::{self, BufRead, Write};

use degrees_core::{Dataset, PersonId, Resolution};

/// Line-oriented prompter over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a label and read one line. Returns None at end of input.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Resolve a name, asking which person is meant when several share it
    pub fn choose_person(&mut self, dataset: &Dataset, name: &str) -> io::Result<Option<PersonId>> {
        let candidates = match dataset.resolve(name) {
            Resolution::Ambiguous(candidates) => candidates,
            other => return Ok(other.disambiguate("")),
        };

        writeln!(self.output, "Which '{}'?", name)?;
        for id in &candidates {
            if let Some(person) = dataset.person(id) {
                writeln!(
                    self.output,
                    "ID: {}, Name: {}, Birth: {}",
                    person.id,
                    person.name,
                    person.birth_display()
                )?;
            }
        }

        let choice = self.ask("Intended Person ID: ")?.unwrap_or_default();
        Ok(Resolution::Ambiguous(candidates).disambiguate(&choice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrees_core::Person;
    use std::io::Cursor;

    fn create_test_dataset() -> Dataset {
        let mut builder = Dataset::builder();
        builder.add_person(Person::new("1", "Chris Evans").with_birth(Some(1981)));
        builder.add_person(Person::new("2", "Chris Evans").with_birth(Some(1966)));
        builder.add_person(Person::new("3", "Scarlett Johansson"));
        builder.build()
    }

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(prompter: &mut Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.output().clone()).unwrap()
    }

    #[test]
    fn test_ask_reads_line() {
        let mut p = prompter("Kevin Bacon\r\n");
        assert_eq!(p.ask("Name: ").unwrap().as_deref(), Some("Kevin Bacon"));
        assert_eq!(p.ask("Name: ").unwrap(), None);
        assert_eq!(written(&mut p), "Name: Name: ");
    }

    #[test]
    fn test_unique_name_needs_no_prompt() {
        let dataset = create_test_dataset();
        let mut p = prompter("");

        let id = p.choose_person(&dataset, "scarlett johansson").unwrap();
        assert_eq!(id, Some(PersonId::from("3")));
        assert_eq!(written(&mut p), "");
    }

    #[test]
    fn test_ambiguous_name_prompts_for_id() {
        let dataset = create_test_dataset();
        let mut p = prompter("2\n");

        let id = p.choose_person(&dataset, "Chris Evans").unwrap();

        assert_eq!(id, Some(PersonId::from("2")));
        assert_eq!(
            written(&mut p),
            "Which 'Chris Evans'?\n\
             ID: 1, Name: Chris Evans, Birth: 1981\n\
             ID: 2, Name: Chris Evans, Birth: 1966\n\
             Intended Person ID: "
        );
    }

    #[test]
    fn test_invalid_choice_is_not_found() {
        let dataset = create_test_dataset();
        let mut p = prompter("3\n");
        assert_eq!(p.choose_person(&dataset, "Chris Evans").unwrap(), None);

        let mut p = prompter("");
        assert_eq!(p.choose_person(&dataset, "Chris Evans").unwrap(), None);
    }

    #[test]
    fn test_unknown_name() {
        let dataset = create_test_dataset();
        let mut p = prompter("");
        assert_eq!(p.choose_person(&dataset, "Nobody").unwrap(), None);
    }
}
