use addressbook_core::{FieldKey, Msg};

/// One parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Messages to feed to the state machine, in order.
    Messages(Vec<Msg>),
    Show,
    Help,
    Quit,
}

/// Parses a line into a command. Empty lines parse to no messages.
pub fn parse_line(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(Command::Messages(Vec::new()));
    };
    match command {
        "search" => {
            let postcode = parts.next().unwrap_or("").to_string();
            let house_number = parts.next().unwrap_or("").to_string();
            Ok(Command::Messages(vec![
                Msg::FieldChanged {
                    field: FieldKey::PostCode,
                    value: postcode,
                },
                Msg::FieldChanged {
                    field: FieldKey::HouseNumber,
                    value: house_number,
                },
                Msg::SearchSubmitted,
            ]))
        }
        "select" => {
            let id = parts
                .next()
                .ok_or_else(|| "usage: select <id>".to_string())?;
            Ok(Command::Messages(vec![Msg::FieldChanged {
                field: FieldKey::SelectedAddress,
                value: id.to_string(),
            }]))
        }
        "add" => {
            // Missing names still submit; the machine reports the error.
            let first_name = parts.next().unwrap_or("").to_string();
            let last_name = parts.next().unwrap_or("").to_string();
            Ok(Command::Messages(vec![
                Msg::FieldChanged {
                    field: FieldKey::FirstName,
                    value: first_name,
                },
                Msg::FieldChanged {
                    field: FieldKey::LastName,
                    value: last_name,
                },
                Msg::PersonSubmitted,
            ]))
        }
        "remove" => {
            let id = parts
                .next()
                .ok_or_else(|| "usage: remove <id>".to_string())?;
            Ok(Command::Messages(vec![Msg::EntryRemoved {
                id: id.to_string(),
            }]))
        }
        "clear" => Ok(Command::Messages(vec![Msg::ClearClicked])),
        "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_line_sets_both_fields_then_submits() {
        let parsed = parse_line("search 1234 56").expect("parse");
        assert_eq!(
            parsed,
            Command::Messages(vec![
                Msg::FieldChanged {
                    field: FieldKey::PostCode,
                    value: "1234".to_string(),
                },
                Msg::FieldChanged {
                    field: FieldKey::HouseNumber,
                    value: "56".to_string(),
                },
                Msg::SearchSubmitted,
            ])
        );
    }

    #[test]
    fn search_without_arguments_submits_empty_fields() {
        // The machine owns the validation message, not the parser.
        let parsed = parse_line("search").expect("parse");
        let Command::Messages(msgs) = parsed else {
            panic!("expected messages");
        };
        assert_eq!(msgs.len(), 3);
    }

    #[test]
    fn select_requires_an_id() {
        assert!(parse_line("select").is_err());
        assert_eq!(
            parse_line("select addr-1").expect("parse"),
            Command::Messages(vec![Msg::FieldChanged {
                field: FieldKey::SelectedAddress,
                value: "addr-1".to_string(),
            }])
        );
    }

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(
            parse_line("   ").expect("parse"),
            Command::Messages(Vec::new())
        );
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert!(parse_line("frobnicate").is_err());
    }
}
