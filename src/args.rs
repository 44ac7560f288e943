// =============== Imports ================
use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn command() -> Command {
    Command::new("canito")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Search YouTube and queue the result in mpv")
        .arg(
            Arg::new("query")
                .help("What to search for (prompted for when omitted)")
                .num_args(1..)
                .conflicts_with("file"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .help("Play a file or URL directly, skipping the search"),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Don't bias the search toward auto-generated uploads"),
        )
        .arg(
            Arg::new("print")
                .short('p')
                .long("print")
                .action(ArgAction::SetTrue)
                .help("Only print the search result, don't touch the player"),
        )
}

pub fn handle_args() -> ArgMatches {
    command().get_matches()
}

// Joins the query words, None if there were none
pub fn query(matches: &ArgMatches) -> Option<String> {
    matches
        .get_many::<String>("query")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .filter(|query| !query.trim().is_empty())
}

// * Config default unless --all was passed
pub fn autogenerated(matches: &ArgMatches, config_default: bool) -> bool {
    config_default && !matches.get_flag("all")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        command().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn query_words_are_joined() {
        let matches = parse(&["canito", "never", "gonna", "give"]);
        assert_eq!(query(&matches).as_deref(), Some("never gonna give"));
        assert!(autogenerated(&matches, true));
    }

    #[test]
    fn no_query_is_none() {
        assert_eq!(query(&parse(&["canito"])), None);
    }

    #[test]
    fn all_disables_autogenerated() {
        let matches = parse(&["canito", "--all", "song"]);
        assert!(!autogenerated(&matches, true));
        assert!(!autogenerated(&parse(&["canito", "song"]), false));
    }

    #[test]
    fn file_conflicts_with_query() {
        assert!(command().try_get_matches_from(["canito", "-f", "a.mp3", "song"]).is_err());
        let matches = parse(&["canito", "-f", "a.mp3"]);
        assert_eq!(matches.get_one::<String>("file").map(String::as_str), Some("a.mp3"));
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }
}
