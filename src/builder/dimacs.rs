use crate::{
    context::GenericContext,
    structures::{atom::Atom, clause::CClause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

use std::io::BufRead;

/// Details of a formula read from DIMACS input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given in the problem line, if any.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given in the problem line, if any.
    pub expected_clauses: Option<usize>,

    /// The count of clauses read.
    pub clauses: usize,

    /// The count of XOR constraints read.
    pub xors: usize,
}

/// Reads a DIMACS literal, written on line `line`, or None for the terminating zero.
///
/// An item which is not an integer, or whose atom is beyond the atoms a context supports, is an error.
fn literal_at(item: &str, line: usize) -> Result<Option<CLiteral>, ErrorKind> {
    match item.parse::<isize>() {
        Ok(0) => Ok(None),
        Ok(int) => match CLiteral::from_int(int) {
            Some(literal) => Ok(Some(literal)),
            None => Err(ErrorKind::from(err::ParseError::Literal(line))),
        },
        Err(_) => Err(ErrorKind::from(err::ParseError::Literal(line))),
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS file into the context.
    ///
    /// In addition to clauses, lines beginning with `x` are read as XOR constraints, requiring the exclusive-or of the literals of the line to be true.
    /// A line beginning with `%` ends the formula.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use marten_sat::context::Context;
    /// # use marten_sat::config::Config;
    /// # use marten_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// x1 3 4 0
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).expect("read");
    /// assert_eq!(info.expected_atoms, Some(4));
    /// assert_eq!(info.clauses, 6);
    /// assert_eq!(info.xors, 1);
    /// assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            let line = buffer.trim_start();
            match line.chars().next() {
                None | Some('c') => {}

                Some('%') => break 'line_loop,

                Some('p') => {
                    let mut problem_details = line.split_whitespace().skip(2);
                    let mut count = || -> Result<usize, ErrorKind> {
                        problem_details
                            .next()
                            .and_then(|string| string.parse().ok())
                            .ok_or(ErrorKind::from(err::ParseError::ProblemSpecification))
                    };
                    info.expected_atoms = Some(count()?);
                    info.expected_clauses = Some(count()?);
                }

                Some('x') => {
                    if !clause_buffer.is_empty() {
                        return Err(ErrorKind::from(err::ParseError::Line(line_counter)));
                    }

                    let mut literals = Vec::default();
                    let mut terminated = false;
                    for item in line[1..].split_whitespace() {
                        match literal_at(item, line_counter)? {
                            Some(literal) => literals.push(literal),
                            None => {
                                terminated = true;
                                break;
                            }
                        }
                    }
                    if !terminated {
                        return Err(ErrorKind::from(err::ParseError::Line(line_counter)));
                    }

                    self.add_xor(literals)?;
                    info.xors += 1;
                }

                Some(_) => {
                    for item in line.split_whitespace() {
                        match literal_at(item, line_counter)? {
                            Some(literal) => clause_buffer.push(literal),
                            None => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                info.clauses += 1;
                            }
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(ErrorKind::from(err::ParseError::UnterminatedClause));
        }

        if let Some(expected) = info.expected_atoms {
            if let Ok(atom) = Atom::try_from(expected) {
                if atom > 0 {
                    self.ensure_atom(atom - 1)?;
                }
            }
        }

        log::info!(
            "Read {} clauses and {} XOR constraints over {} atoms",
            info.clauses,
            info.xors,
            self.atom_db.count()
        );

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context, reports::Report, types::err::ParseError};

    use super::*;

    #[test]
    fn clauses_across_lines() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"c a comment\np cnf 3 2\n1 -2\n 3 0 -1\n2 0\n";

        let info = the_context.read_dimacs(dimacs.as_slice()).expect("read");
        assert_eq!(info.expected_clauses, Some(2));
        assert_eq!(info.clauses, 2);
        assert_eq!(the_context.atom_db.count(), 3);
    }

    #[test]
    fn declared_atoms_are_added() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"p cnf 10 1\n1 2 0\n";

        assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
        assert_eq!(the_context.atom_db.count(), 10);
    }

    #[test]
    fn errors() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.read_dimacs(b"p cnf x 2\n".as_slice()),
            Err(ErrorKind::from(ParseError::ProblemSpecification))
        );

        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.read_dimacs(b"1 2 0\n1 a 0\n".as_slice()),
            Err(ErrorKind::from(ParseError::Literal(2)))
        );

        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.read_dimacs(b"1 2 0\n-1 2\n".as_slice()),
            Err(ErrorKind::from(ParseError::UnterminatedClause))
        );
    }

    #[test]
    fn xor_lines() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"p cnf 2 0\nx1 2 0\nx-1 2 0\n";

        let info = the_context.read_dimacs(dimacs.as_slice()).expect("read");
        assert_eq!(info.xors, 2);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn formula_ends_at_percent() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"1 0\n%\n0\n";

        let info = the_context.read_dimacs(dimacs.as_slice()).expect("read");
        assert_eq!(info.clauses, 1);
    }
}
