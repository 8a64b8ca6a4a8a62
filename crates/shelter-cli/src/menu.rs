//! Interactive lookup session.
//!
//! The session alternates between two focused flows, animals and
//! candidates, until the user quits or input ends. It is generic over its
//! reader and writer so tests can drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use shelter_matchcore::{best_destination_for_animal, first_animal_for_candidate};
use shelter_types::{CandidateNumber, Catalog, Roster};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Animals,
    Candidates,
}

/// What the user asked for after a flow finished one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    Switch(Focus),
    Quit,
}

enum Reply {
    Number(u32),
    Other,
    Closed,
}

pub struct MenuSession<'a, R, W> {
    catalog: &'a Catalog,
    roster: &'a Roster,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(catalog: &'a Catalog, roster: &'a Roster, input: R, output: W) -> Self {
        Self {
            catalog,
            roster,
            input,
            output,
        }
    }

    /// Run until the user quits or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_header()?;

        let mut focus = None;
        loop {
            let current = match focus {
                Some(f) => f,
                None => match self.main_menu()? {
                    Some(Next::Switch(f)) => f,
                    Some(Next::Quit) => return self.say_goodbye(),
                    None => continue,
                },
            };

            let next = match current {
                Focus::Animals => self.animal_flow()?,
                Focus::Candidates => self.candidate_flow()?,
            };
            match next {
                Next::Switch(f) => focus = Some(f),
                Next::Quit => return self.say_goodbye(),
            }
        }
    }

    fn print_header(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== Animal Shelter - Interactive Lookup ===")?;
        writeln!(self.output)?;
        writeln!(self.output, "Animals and their favorite toys:")?;
        for (idx, animal) in self.catalog.animals().enumerate() {
            writeln!(
                self.output,
                "{}. {} - favorites: {}",
                idx + 1,
                animal.name,
                animal.favorites.join(", ")
            )?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "Candidates and their toys:")?;
        for entry in &self.roster.candidates {
            writeln!(self.output, "Candidate {}: {}", entry.number.0, entry.toys)?;
        }
        writeln!(self.output)
    }

    /// `Ok(None)` means the choice was invalid and the menu should repeat.
    fn main_menu(&mut self) -> io::Result<Option<Next>> {
        writeln!(self.output, "Main menu:")?;
        writeln!(self.output, "1 - Choose an animal")?;
        writeln!(self.output, "2 - Choose a candidate")?;
        writeln!(self.output, "3 - Quit")?;

        Ok(match self.ask("\nEnter the option number: ")? {
            Reply::Number(1) => Some(Next::Switch(Focus::Animals)),
            Reply::Number(2) => Some(Next::Switch(Focus::Candidates)),
            Reply::Number(3) | Reply::Closed => Some(Next::Quit),
            Reply::Number(_) | Reply::Other => {
                writeln!(self.output, "Invalid option.")?;
                None
            }
        })
    }

    fn animal_flow(&mut self) -> io::Result<Next> {
        let catalog = self.catalog;
        loop {
            writeln!(self.output, "\nAnimals:")?;
            for (idx, animal) in catalog.animals().enumerate() {
                writeln!(self.output, "{}. {}", idx + 1, animal.name)?;
            }

            let picked = match self.ask("\nEnter the animal number: ")? {
                Reply::Closed => return Ok(Next::Quit),
                Reply::Number(n) => usize::try_from(n)
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|idx| catalog.animals().nth(idx)),
                Reply::Other => None,
            };

            match picked {
                Some(animal) => {
                    let verdict = best_destination_for_animal(catalog, self.roster, animal.code);
                    writeln!(
                        self.output,
                        "\nThe ideal destination for {} is: {}",
                        animal.name, verdict.destination
                    )?;
                    for note in &verdict.notes {
                        writeln!(self.output, "- {note}")?;
                    }
                    writeln!(self.output)?;
                }
                None => writeln!(self.output, "Invalid option.")?,
            }

            match self.follow_up(Focus::Animals)? {
                Some(Focus::Animals) => {}
                Some(other) => return Ok(Next::Switch(other)),
                None => return Ok(Next::Quit),
            }
        }
    }

    fn candidate_flow(&mut self) -> io::Result<Next> {
        loop {
            writeln!(self.output, "\nCandidates:")?;
            for entry in &self.roster.candidates {
                writeln!(
                    self.output,
                    "{}. Candidate {} - toys: {}",
                    entry.number.0, entry.number.0, entry.toys
                )?;
            }

            let picked = match self.ask("\nEnter the candidate number: ")? {
                Reply::Closed => return Ok(Next::Quit),
                Reply::Number(n) => u8::try_from(n)
                    .ok()
                    .map(CandidateNumber)
                    .filter(|number| self.roster.get(*number).is_some()),
                Reply::Other => None,
            };

            match picked {
                Some(number) => {
                    match first_animal_for_candidate(self.catalog, self.roster, number) {
                        Some(verdict) => {
                            writeln!(
                                self.output,
                                "\nThe ideal animal for {number} is: {}",
                                verdict.name
                            )?;
                            for note in &verdict.notes {
                                writeln!(self.output, "- {note}")?;
                            }
                            writeln!(self.output)?;
                        }
                        None => writeln!(
                            self.output,
                            "\nNo ideal animal found for {number} with the current lists.\n"
                        )?,
                    }
                }
                None => writeln!(self.output, "Invalid option.")?,
            }

            match self.follow_up(Focus::Candidates)? {
                Some(Focus::Candidates) => {}
                Some(other) => return Ok(Next::Switch(other)),
                None => return Ok(Next::Quit),
            }
        }
    }

    /// Sub-menu after an answer. `None` means quit; an unrecognized choice
    /// stays on `current`.
    fn follow_up(&mut self, current: Focus) -> io::Result<Option<Focus>> {
        writeln!(self.output, "1 - Choose another animal")?;
        writeln!(self.output, "2 - Choose another candidate")?;
        writeln!(self.output, "3 - Quit")?;

        let choice = match self.ask("\nEnter the option number: ")? {
            Reply::Number(1) => Some(Focus::Animals),
            Reply::Number(2) => Some(Focus::Candidates),
            Reply::Number(3) | Reply::Closed => None,
            Reply::Number(_) | Reply::Other => Some(current),
        };
        writeln!(self.output)?;
        Ok(choice)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Reply> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Reply::Closed);
        }
        Ok(line
            .trim()
            .parse()
            .map_or(Reply::Other, Reply::Number))
    }

    fn say_goodbye(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nExiting...")?;
        self.output.flush()
    }
}
