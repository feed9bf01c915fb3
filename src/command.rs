// User input events for the text session, one per line

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::error::UnknownValue;
use crate::models::{FuelType, SortMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Brand(Option<String>),
    Price { min: u32, max: u32 },
    MinPrice(u32),
    MaxPrice(u32),
    Fuel(Option<FuelType>),
    Seats(String),
    Sort(SortMode),
    Reset,
    Page(usize),
    Next,
    Prev,
    Wish(u32),
    Wishlist,
    Show(u32),
    Close,
    Mode,
    Options,
    Export(PathBuf),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{value}' is not a valid {expected}")]
    InvalidNumber {
        value: String,
        expected: &'static str,
    },
    #[error(transparent)]
    UnknownValue(#[from] UnknownValue),
}

pub const HELP: &str = "\
Commands:
  search [text]        filter by brand or model (empty clears)
  brand [name]         exact brand filter (empty clears)
  price <min> <max>    inclusive price range
  min <n> | max <n>    change one price bound
  fuel [type|any]      Petrol, Diesel, Electric, Hybrid
  seats [n]            exact seat count (empty clears)
  sort [mode]          none, price-low-high, price-high-low
  reset                restore default filters
  page <n> | next | prev
  wish <id>            add/remove a car from the wishlist
  wishlist             list wishlisted cars
  show <id> | close    open/close the detail view
  mode                 toggle dark/light mode
  options              list brands, fuel types and seat counts
  export <file.csv>    write the filtered cars as CSV
  help | quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "search" | "s" => Command::Search(rest.to_string()),
            "brand" => Command::Brand(non_empty(rest)),
            "price" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(min), Some(max)) => Command::Price {
                        min: parse_price(min)?,
                        max: parse_price(max)?,
                    },
                    _ => {
                        return Err(CommandError::MissingArgument {
                            command: "price",
                            expected: "<min> <max>",
                        });
                    }
                }
            }
            "min" => Command::MinPrice(parse_price(required(rest, "min", "<price>")?)?),
            "max" => Command::MaxPrice(parse_price(required(rest, "max", "<price>")?)?),
            "fuel" => match rest.to_ascii_lowercase().as_str() {
                "" | "any" | "all" => Command::Fuel(None),
                _ => Command::Fuel(Some(rest.parse()?)),
            },
            // Kept as text: the controller decides what unparseable seat text means
            "seats" => Command::Seats(rest.to_string()),
            "sort" => Command::Sort(rest.parse()?),
            "reset" => Command::Reset,
            "page" => Command::Page(parse_number(required(rest, "page", "<number>")?, "page number")?),
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Prev,
            "wish" | "w" => Command::Wish(parse_id(required(rest, "wish", "<id>")?)?),
            "wishlist" => Command::Wishlist,
            "show" => Command::Show(parse_id(required(rest, "show", "<id>")?)?),
            "close" => Command::Close,
            "mode" | "dark" | "light" => Command::Mode,
            "options" => Command::Options,
            "export" => Command::Export(PathBuf::from(required(rest, "export", "<file.csv>")?)),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

fn required<'a>(
    text: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if text.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(text)
    }
}

fn parse_number<T: FromStr>(text: &str, expected: &'static str) -> Result<T, CommandError> {
    text.parse().map_err(|_| CommandError::InvalidNumber {
        value: text.to_string(),
        expected,
    })
}

// Accepts "45000", "45,000" and "$45,000"
fn parse_price(text: &str) -> Result<u32, CommandError> {
    let cleaned: String = text.chars().filter(|c| *c != ',' && *c != '$').collect();
    parse_number(&cleaned, "price")
}

fn parse_id(text: &str) -> Result<u32, CommandError> {
    parse_number(text, "car id")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, CommandError> {
        line.parse()
    }

    #[test]
    fn filter_commands() {
        assert_eq!(parse("search  model 3 ").unwrap(), Command::Search("model 3".into()));
        assert_eq!(parse("search").unwrap(), Command::Search(String::new()));
        assert_eq!(parse("brand Toyota").unwrap(), Command::Brand(Some("Toyota".into())));
        assert_eq!(parse("brand").unwrap(), Command::Brand(None));
        assert_eq!(
            parse("price 40000 $60,000").unwrap(),
            Command::Price { min: 40_000, max: 60_000 }
        );
        assert_eq!(parse("max 30000").unwrap(), Command::MaxPrice(30_000));
        assert_eq!(parse("fuel electric").unwrap(), Command::Fuel(Some(FuelType::Electric)));
        assert_eq!(parse("fuel any").unwrap(), Command::Fuel(None));
        assert_eq!(parse("seats lots").unwrap(), Command::Seats("lots".into()));
        assert_eq!(parse("sort price-high-low").unwrap(), Command::Sort(SortMode::PriceDescending));
        assert_eq!(parse("sort").unwrap(), Command::Sort(SortMode::None));
    }

    #[test]
    fn navigation_and_wishlist_commands() {
        assert_eq!(parse("page 2").unwrap(), Command::Page(2));
        assert_eq!(parse("NEXT").unwrap(), Command::Next);
        assert_eq!(parse("wish 4").unwrap(), Command::Wish(4));
        assert_eq!(parse("show 1").unwrap(), Command::Show(1));
        assert_eq!(parse("export out.csv").unwrap(), Command::Export(PathBuf::from("out.csv")));
        assert_eq!(parse("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(parse("   "), Err(CommandError::Empty));
        assert_eq!(parse("fly"), Err(CommandError::Unknown("fly".into())));
        assert!(matches!(parse("price 100"), Err(CommandError::MissingArgument { .. })));
        assert!(matches!(parse("wish four"), Err(CommandError::InvalidNumber { .. })));
        assert!(matches!(parse("min -5"), Err(CommandError::InvalidNumber { .. })));
        assert!(matches!(parse("fuel coal"), Err(CommandError::UnknownValue(_))));
        assert!(matches!(parse("sort random"), Err(CommandError::UnknownValue(_))));
    }
}
