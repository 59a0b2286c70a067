// The netrc format as documented by ftp(1) and GNU inetutils:
// https://www.gnu.org/software/inetutils/manual/html_node/The-_002enetrc-file.html
// Tokens are separated by any whitespace, so entries may span lines freely.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{line_ending, multispace1, not_line_ending, space1},
    combinator::{map_opt, opt, verify},
    multi::many0,
    sequence::{preceded, terminated, tuple},
    IResult, Offset,
};

use crate::error::ParseError;
use crate::machine::{Machine, Macro, Netrc};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum Key {
    Login,
    Password,
    Account,
}

#[derive(PartialEq, Debug)]
struct Field<'a> {
    key: Key,
    // The keyword token itself, kept to locate errors.
    at: &'a str,
    value: &'a str,
}

#[derive(PartialEq, Debug)]
enum Entry<'a> {
    Machine {
        at: &'a str,
        name: &'a str,
        fields: Vec<Field<'a>>,
    },
    Default {
        at: &'a str,
        fields: Vec<Field<'a>>,
    },
    Macro {
        name: &'a str,
        body: &'a str,
    },
}

/// Parses netrc content into its machines and macros.
pub fn parse(data: &str) -> Result<Netrc, ParseError> {
    let (rest, entries) = entries(data).map_err(|_| unexpected(data, data))?;

    if !rest.is_empty() {
        return Err(unexpected(data, rest));
    }

    build(data, entries)
}

fn token(i: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(i)
}

fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    verify(token, move |t: &str| t == word)
}

fn comment(i: &str) -> IResult<&str, &str> {
    let mut parser = tuple((tag("#"), not_line_ending));
    let (input, (_, _)) = parser(i)?;

    Ok((input, ""))
}

fn space_or_comment(i: &str) -> IResult<&str, &str> {
    let mut parser = alt((comment, multispace1));
    let (input, _) = parser(i)?;

    Ok((input, ""))
}

fn spaces_or_comments(i: &str) -> IResult<&str, &str> {
    let mut parser = many0(space_or_comment);
    let (input, _) = parser(i)?;

    Ok((input, ""))
}

fn key(i: &str) -> IResult<&str, (Key, &str)> {
    map_opt(token, |t| match t {
        "login" => Some((Key::Login, t)),
        "password" => Some((Key::Password, t)),
        "account" => Some((Key::Account, t)),
        _ => None,
    })(i)
}

fn field(i: &str) -> IResult<&str, Field> {
    let mut parser = tuple((key, multispace1, token));
    let (input, ((key, at), _, value)) = parser(i)?;

    Ok((input, Field { key, at, value }))
}

fn fields(i: &str) -> IResult<&str, Vec<Field>> {
    let mut parser = many0(preceded(spaces_or_comments, field));
    parser(i)
}

fn machine_block(i: &str) -> IResult<&str, Entry> {
    let mut parser = tuple((keyword("machine"), multispace1, token, fields));
    let (input, (at, _, name, fields)) = parser(i)?;

    Ok((input, Entry::Machine { at, name, fields }))
}

fn default_block(i: &str) -> IResult<&str, Entry> {
    let mut parser = tuple((keyword("default"), fields));
    let (input, (at, fields)) = parser(i)?;

    Ok((input, Entry::Default { at, fields }))
}

// The body runs from the line after `macdef` up to the first empty line.
fn macro_body(i: &str) -> IResult<&str, &str> {
    let mut end = 0;
    for line in i.split_inclusive('\n') {
        if line == "\n" || line == "\r\n" {
            return Ok((&i[end + line.len()..], &i[..end]));
        }
        end += line.len();
    }

    Ok(("", i))
}

fn macro_block(i: &str) -> IResult<&str, Entry> {
    let mut parser = tuple((
        keyword("macdef"),
        space1,
        token,
        not_line_ending,
        opt(line_ending),
        macro_body,
    ));
    let (input, (_, _, name, _, _, body)) = parser(i)?;

    Ok((input, Entry::Macro { name, body }))
}

fn entry(i: &str) -> IResult<&str, Entry> {
    alt((machine_block, default_block, macro_block))(i)
}

fn entries(i: &str) -> IResult<&str, Vec<Entry>> {
    let mut parser = terminated(
        many0(preceded(spaces_or_comments, entry)),
        spaces_or_comments,
    );
    parser(i)
}

fn line_of(data: &str, at: &str) -> usize {
    data[..data.offset(at)].matches('\n').count() + 1
}

fn unexpected(data: &str, rest: &str) -> ParseError {
    let line = line_of(data, rest);
    let mut tokens = rest.split_whitespace();
    let token = tokens.next().unwrap_or_default();
    let takes_value = matches!(
        token,
        "machine" | "login" | "password" | "account" | "macdef"
    );

    if takes_value && tokens.next().is_none() {
        ParseError::MissingValue {
            line,
            keyword: token.to_string(),
        }
    } else {
        ParseError::UnexpectedToken {
            line,
            token: token.to_string(),
        }
    }
}

fn build(data: &str, entries: Vec<Entry>) -> Result<Netrc, ParseError> {
    let mut netrc = Netrc::default();
    let mut seen_default = false;

    for entry in entries {
        match entry {
            Entry::Machine { at, name, fields } => {
                if seen_default {
                    return Err(ParseError::MachineAfterDefault {
                        line: line_of(data, at),
                        name: name.to_string(),
                    });
                }
                netrc.machines.push(machine(data, name, fields)?);
            }
            Entry::Default { at, fields } => {
                if seen_default {
                    return Err(ParseError::MultipleDefault {
                        line: line_of(data, at),
                    });
                }
                seen_default = true;
                netrc.machines.push(machine(data, "", fields)?);
            }
            Entry::Macro { name, body } => netrc.macros.push(Macro {
                name: name.to_string(),
                body: body.to_string(),
            }),
        }
    }

    Ok(netrc)
}

fn machine(data: &str, name: &str, fields: Vec<Field>) -> Result<Machine, ParseError> {
    let mut login = None;
    let mut password = None;
    let mut account = None;

    for field in fields {
        let slot = match field.key {
            Key::Login => &mut login,
            Key::Password => &mut password,
            Key::Account => &mut account,
        };
        if slot.is_some() {
            return Err(ParseError::DuplicateField {
                line: line_of(data, field.at),
                keyword: field.at.to_string(),
                machine: name.to_string(),
            });
        }
        *slot = Some(field.value);
    }

    Ok(Machine {
        name: name.to_string(),
        login: login.unwrap_or_default().to_string(),
        password: password.unwrap_or_default().to_string(),
        account: account.unwrap_or_default().to_string(),
    })
}
